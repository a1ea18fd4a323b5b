use clap::Parser;
use init4_bin_base::utils::from_env::FromEnv;
use verifier::{
    config::{Cli, ToolConfig},
    runner::{DryRunner, ProcessRunner},
    service::verify_all,
};

// Verification is strictly sequential, one child process at a time.
#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let _guard = init4_bin_base::init4();

    let cli = Cli::parse();
    let tools = ToolConfig::from_env()?;

    if cli.dry_run {
        verify_all(&cli, tools, DryRunner).await?;
    } else {
        verify_all(&cli, tools, ProcessRunner).await?;
    }
    Ok(())
}
