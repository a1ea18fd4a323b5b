//! Verification of every known deployment, one project at a time.

/// Hardhat verification commands
pub mod hardhat;
pub use hardhat::hardhat_invocation;

/// Forge verification commands
pub mod forge;
pub use forge::forge_invocation;

use crate::{
    VerifyError,
    abi::{ConstructorArgs, ProxyOwnerArgs, encode_constructor_args},
    config::{Chain, ToolConfig},
    constants::HardhatProject,
    network::write_network_config,
    report::{Outcome, Report, TargetReport, Tool},
    runner::Runner,
    targets::{ForgeProject, VerificationTarget},
};
use alloy::primitives::Address;
use std::path::PathBuf;
use tracing::{Instrument, info_span};

/// Runs the verification tools for a batch of projects against one chain.
///
/// Targets are attempted strictly in order. A target that fails to verify
/// is recorded in the [`Report`] and the batch moves on. Only failing to
/// render a project's network config aborts the batch.
#[derive(Debug)]
pub struct BatchVerifier<R, C = ProxyOwnerArgs> {
    chain: Chain,
    root: PathBuf,
    tools: ToolConfig,
    runner: R,
    constructor_args: C,
    report: Report,
}

impl<R: Runner> BatchVerifier<R> {
    /// Create a verifier for `chain`, resolving project paths against `root`.
    pub fn new(chain: Chain, root: impl Into<PathBuf>, tools: ToolConfig, runner: R) -> Self {
        Self {
            chain,
            root: root.into(),
            tools,
            runner,
            constructor_args: ProxyOwnerArgs,
            report: Report::default(),
        }
    }
}

impl<R: Runner, C: ConstructorArgs> BatchVerifier<R, C> {
    /// Replace the constructor argument provider.
    pub fn with_constructor_args<C2: ConstructorArgs>(self, provider: C2) -> BatchVerifier<R, C2> {
        BatchVerifier {
            chain: self.chain,
            root: self.root,
            tools: self.tools,
            runner: self.runner,
            constructor_args: provider,
            report: self.report,
        }
    }

    /// The results recorded so far.
    pub const fn report(&self) -> &Report {
        &self.report
    }

    fn project_dir(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Render the project's network config, then verify each of its
    /// addresses with hardhat.
    pub async fn verify_hardhat(&mut self, project: &HardhatProject) -> Result<(), VerifyError> {
        let span = info_span!("hardhat", project = project.path);
        let dir = self.project_dir(project.path);

        write_network_config(&dir, &self.chain).instrument(span.clone()).await?;

        for &address in project.addresses {
            span_info!(span, %address, "verifying");
            let inv = hardhat_invocation(self.tools.npx(), &dir, address);
            let outcome = self.runner.run(&inv).instrument(span.clone()).await;
            self.record(&span, Tool::Hardhat, project.path, address, None, outcome);
        }
        Ok(())
    }

    /// Verify each of the project's targets with forge.
    pub async fn verify_forge(&mut self, project: &ForgeProject) {
        let span = info_span!("forge", project = project.path);
        let dir = self.project_dir(project.path);

        for target in &project.targets {
            span_info!(span, address = %target.address, contract = %target.contract, "verifying");
            let outcome = match self.constructor_hex(target) {
                Ok(args) => {
                    let inv = forge_invocation(self.tools.forge(), &dir, target, &self.chain, args);
                    self.runner.run(&inv).instrument(span.clone()).await
                }
                Err(err) => Outcome::Errored { reason: err.to_string() },
            };
            self.record(
                &span,
                Tool::Forge,
                project.path,
                target.address,
                Some(target.contract.to_string()),
                outcome,
            );
        }
    }

    /// Verify every hardhat project, then every forge project, and return
    /// the report.
    pub async fn run(
        mut self,
        hardhat: &[HardhatProject],
        forge: &[ForgeProject],
    ) -> Result<Report, VerifyError> {
        for project in hardhat {
            self.verify_hardhat(project).await?;
        }
        for project in forge {
            self.verify_forge(project).await;
        }
        Ok(self.report)
    }

    fn constructor_hex(&self, target: &VerificationTarget) -> Result<Option<String>, VerifyError> {
        let Some(signature) = &target.constructor else { return Ok(None) };
        let args = self.constructor_args.args(target, &self.chain);
        encode_constructor_args(signature, &args).map(Some)
    }

    fn record(
        &mut self,
        span: &tracing::Span,
        tool: Tool,
        project: &str,
        address: Address,
        contract: Option<String>,
        outcome: Outcome,
    ) {
        match &outcome {
            Outcome::Verified => span_debug!(span, %address, "verified"),
            Outcome::Skipped => {}
            other => span_warn!(span, %address, outcome = ?other, "verification did not succeed"),
        }
        self.report.push(TargetReport {
            tool,
            project: project.to_owned(),
            address,
            contract,
            outcome,
        });
    }
}
