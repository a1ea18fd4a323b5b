//! Execution of external verification commands.

use crate::report::Outcome;
use std::{fmt, future::Future, path::PathBuf};
use tracing::{debug, info};

/// A command to run inside a project checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to run.
    pub program: String,
    /// Arguments, without shell quoting.
    pub args: Vec<String>,
    /// Working directory.
    pub dir: PathBuf,
}

impl Invocation {
    /// Create an invocation of `program` in `dir` with no arguments.
    pub fn new(program: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), args: Vec::new(), dir: dir.into() }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a flag followed by its value.
    pub fn flag(self, flag: &str, value: impl Into<String>) -> Self {
        self.arg(flag).arg(value)
    }

    /// Returns `true` if `flag` is among the arguments.
    pub fn has_arg(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// The value following `flag`, if any.
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        let pos = self.args.iter().position(|a| a == flag)?;
        self.args.get(pos + 1).map(String::as_str)
    }

    fn command(&self) -> tokio::process::Command {
        let mut command = tokio::process::Command::new(&self.program);
        command.args(&self.args).current_dir(&self.dir);
        command
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cd {} && {}", self.dir.display(), self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs invocations one at a time, to completion.
pub trait Runner {
    /// Run `invocation` and report how it ended. Never fails the batch.
    fn run(&self, invocation: &Invocation) -> impl Future<Output = Outcome> + Send;
}

/// Spawns each invocation as a child process with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Outcome {
        debug!(%invocation, "spawning");
        match invocation.command().status().await {
            Ok(status) if status.success() => Outcome::Verified,
            Ok(status) => Outcome::Failed { code: status.code() },
            Err(err) => {
                Outcome::Errored { reason: format!("failed to run {}: {err}", invocation.program) }
            }
        }
    }
}

/// Logs each invocation without running it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunner;

impl Runner for DryRunner {
    async fn run(&self, invocation: &Invocation) -> Outcome {
        info!(%invocation, "dry run");
        Outcome::Skipped
    }
}
