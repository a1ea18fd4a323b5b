//! Per-target results of a verification batch.

use alloy::primitives::Address;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// The external tool a target was verified with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// `npx hardhat verify`
    Hardhat,
    /// `forge verify-contract`
    Forge,
}

/// How the verification of a single target ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// The tool exited successfully.
    Verified,
    /// The tool exited with a failure status. `code` is `None` if it was
    /// killed by a signal.
    Failed {
        /// Exit code.
        code: Option<i32>,
    },
    /// The command could not be built or spawned.
    Errored {
        /// What went wrong.
        reason: String,
    },
    /// Nothing was run.
    Skipped,
}

impl Outcome {
    /// Returns `true` if the target verified.
    pub const fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Returns `true` if nothing was run.
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Result of one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetReport {
    /// Tool used.
    pub tool: Tool,
    /// Project directory the tool ran in.
    pub project: String,
    /// Deployed address.
    pub address: Address,
    /// Contract reference, for forge targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    /// Outcome.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Outcome counts of a batch.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Targets that verified.
    pub verified: usize,
    /// Targets the tool rejected.
    pub failed: usize,
    /// Targets whose command could not be run.
    pub errored: usize,
    /// Targets that were not run.
    pub skipped: usize,
}

/// Ordered results of a verification batch.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// One entry per target, in the order they were attempted.
    pub targets: Vec<TargetReport>,
}

impl Report {
    /// Record the result of a target.
    pub fn push(&mut self, target: TargetReport) {
        self.targets.push(target);
    }

    /// Number of recorded targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Count outcomes.
    pub fn summary(&self) -> Summary {
        self.targets.iter().fold(Summary::default(), |mut s, t| {
            match t.outcome {
                Outcome::Verified => s.verified += 1,
                Outcome::Failed { .. } => s.failed += 1,
                Outcome::Errored { .. } => s.errored += 1,
                Outcome::Skipped => s.skipped += 1,
            }
            s
        })
    }

    /// Targets that were attempted and did not verify.
    pub fn unverified(&self) -> impl Iterator<Item = &TargetReport> {
        self.targets.iter().filter(|t| !t.outcome.is_verified() && !t.outcome.is_skipped())
    }

    /// Error if any attempted target did not verify. Skipped targets do not
    /// count.
    pub fn ensure_verified(&self) -> eyre::Result<()> {
        let unverified = self.unverified().count();
        if unverified > 0 {
            eyre::bail!("{unverified} of {} targets did not verify", self.len());
        }
        Ok(())
    }

    /// Log the summary and every target that did not verify.
    pub fn log_summary(&self) {
        for t in self.unverified() {
            warn!(
                tool = ?t.tool,
                project = %t.project,
                address = %t.address,
                contract = t.contract.as_deref().unwrap_or_default(),
                outcome = ?t.outcome,
                "not verified"
            );
        }
        let Summary { verified, failed, errored, skipped } = self.summary();
        info!(total = self.len(), verified, failed, errored, skipped, "verification finished");
    }

    /// Write the report as pretty JSON.
    pub async fn write_json(&self, path: &Path) -> eyre::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(outcome: Outcome) -> TargetReport {
        TargetReport {
            tool: Tool::Forge,
            project: "./multicall".into(),
            address: Address::repeat_byte(0x11),
            contract: Some("./src/Multicall3.sol:Multicall3".into()),
            outcome,
        }
    }

    #[test]
    fn summary_counts_each_outcome() {
        let mut report = Report::default();
        report.push(target(Outcome::Verified));
        report.push(target(Outcome::Failed { code: Some(1) }));
        report.push(target(Outcome::Failed { code: None }));
        report.push(target(Outcome::Errored { reason: "no forge".into() }));
        report.push(target(Outcome::Skipped));

        assert_eq!(
            report.summary(),
            Summary { verified: 1, failed: 2, errored: 1, skipped: 1 }
        );
        assert_eq!(report.unverified().count(), 3);
        assert!(report.ensure_verified().is_err());
    }

    #[test]
    fn skipped_targets_pass_strict_check() {
        let mut report = Report::default();
        report.push(target(Outcome::Verified));
        report.push(target(Outcome::Skipped));
        assert_eq!(report.unverified().count(), 0);
        assert!(report.ensure_verified().is_ok());
        assert!(Report::default().ensure_verified().is_ok());
    }

    #[test]
    fn serializes_flat_entries() {
        let value = serde_json::to_value(target(Outcome::Failed { code: Some(2) })).unwrap();
        assert_eq!(value["tool"], "forge");
        assert_eq!(value["status"], "failed");
        assert_eq!(value["code"], 2);
        assert_eq!(value["address"], "0x1111111111111111111111111111111111111111");

        let mut hardhat = target(Outcome::Verified);
        hardhat.tool = Tool::Hardhat;
        hardhat.contract = None;
        let value = serde_json::to_value(hardhat).unwrap();
        assert_eq!(value["status"], "verified");
        assert!(value.get("contract").is_none());
    }

    #[tokio::test]
    async fn writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let mut report = Report::default();
        report.push(target(Outcome::Skipped));
        report.write_json(&path).await.unwrap();

        let back: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back["targets"][0]["status"], "skipped");
    }
}
