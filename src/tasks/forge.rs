use crate::{
    config::Chain, constants::FORGE_VERIFIER, runner::Invocation, targets::VerificationTarget,
    utils::hex_address,
};
use std::path::Path;

/// `forge verify-contract` for `target`, run inside `dir`.
///
/// `constructor_args` is the already encoded hex passed through
/// `--constructor-args`. An optimizer run count of 0 is left to forge's
/// default.
pub fn forge_invocation(
    forge: &str,
    dir: &Path,
    target: &VerificationTarget,
    chain: &Chain,
    constructor_args: Option<String>,
) -> Invocation {
    let mut inv = Invocation::new(forge, dir)
        .arg("verify-contract")
        .arg(hex_address(&target.address))
        .arg(target.contract.to_string())
        .flag("--verifier", FORGE_VERIFIER)
        .flag("--verifier-url", chain.browser_api_url.as_str())
        .flag("--chain-id", chain.chain_id.to_string())
        .arg("--watch")
        .arg("--skip-is-verified-check");

    if let Some(version) = &target.compiler_version {
        inv = inv.flag("--compiler-version", version.to_string());
    }
    if let Some(runs) = target.optimizations.filter(|runs| *runs != 0) {
        inv = inv.flag("--num-of-optimizations", runs.to_string());
    }
    if let Some(args) = constructor_args {
        inv = inv.flag("--constructor-args", args);
    }
    inv
}
