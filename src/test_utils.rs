//! Test utilities for exercising the verification batch without running
//! any external tool.
use crate::{config::Chain, report::Outcome, runner::{Invocation, Runner}};
use alloy::primitives::address;
use init4_bin_base::deps::tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, registry, util::SubscriberInitExt,
};
use std::sync::Mutex;

/// A chain pointed at example endpoints.
pub fn test_chain() -> Chain {
    Chain {
        chain_id: 10,
        rpc_url: "https://rpc.example".into(),
        browser_api_url: "https://api.example".into(),
        browser_url: "https://explorer.example".into(),
        proxy_owner: address!("0x00000000000000000000000000000000000000aa"),
    }
}

/// Initializes a logger that prints during testing
pub fn setup_logging() {
    let filter = EnvFilter::from_default_env();
    let fmt = fmt::layer().with_filter(filter);
    let registry = registry().with(fmt);
    let _ = registry.try_init();
}

/// Records every invocation and answers with a fixed outcome.
#[derive(Debug)]
pub struct RecordingRunner {
    outcome: Outcome,
    calls: Mutex<Vec<Invocation>>,
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new(Outcome::Verified)
    }
}

impl RecordingRunner {
    /// A runner answering every invocation with `outcome`.
    pub const fn new(outcome: Outcome) -> Self {
        Self { outcome, calls: Mutex::new(Vec::new()) }
    }

    /// Invocations seen so far, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl Runner for &RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> Outcome {
        self.calls.lock().unwrap().push(invocation.clone());
        self.outcome.clone()
    }
}
