use crate::{
    config::{Cli, ToolConfig},
    constants::HARDHAT_PROJECTS,
    report::Report,
    runner::Runner,
    targets::forge_projects,
    tasks::BatchVerifier,
};
use clap::CommandFactory;
use tracing::info;

/// Run the full verification batch described by `cli`.
///
/// Returns `None` without running anything if a chain parameter is missing,
/// after printing the help text. With `--strict`, errors once the batch has
/// finished if any attempted target did not verify.
pub async fn verify_all<R: Runner>(
    cli: &Cli,
    tools: ToolConfig,
    runner: R,
) -> eyre::Result<Option<Report>> {
    let Some(chain) = cli.chain() else {
        Cli::command().print_help()?;
        return Ok(None);
    };
    info!(chain_id = chain.chain_id, root = %cli.root.display(), "starting verification");

    let report = BatchVerifier::new(chain, &cli.root, tools, runner)
        .run(HARDHAT_PROJECTS, &forge_projects())
        .await?;

    report.log_summary();
    if let Some(path) = &cli.report {
        report.write_json(path).await?;
        info!(path = %path.display(), "wrote report");
    }
    if cli.strict {
        report.ensure_verified()?;
    }
    Ok(Some(report))
}
