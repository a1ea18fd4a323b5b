//! Forge verification targets and the projects they belong to.

use crate::{
    constants::{
        CONTRACTS_BEDROCK_PATH, GOVERNANCE_TOKEN, MULTICALL_PATH, MULTICALL3, PERMIT2,
        PERMIT2_PATH, PREDEPLOYS, PROXY_ADMIN, PROXY_ADMIN_COMPILER, PROXY_CONSTRUCTOR,
        PROXY_CONTRACT, Predeploy, WETH,
    },
    utils::predeploy_to_code_namespace,
};
use alloy::primitives::Address;
use std::borrow::Cow;

/// A deployment to verify with `forge verify-contract`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationTarget {
    /// Deployed address.
    pub address: Address,
    /// Contract reference, either `path:Name` or a bare contract name.
    pub contract: Cow<'static, str>,
    /// Compiler version override.
    pub compiler_version: Option<Cow<'static, str>>,
    /// Optimizer runs override.
    pub optimizations: Option<u32>,
    /// Human-readable constructor signature. If set, constructor arguments
    /// are encoded and passed along.
    pub constructor: Option<Cow<'static, str>>,
}

impl VerificationTarget {
    /// A target with no overrides.
    pub fn new(address: Address, contract: impl Into<Cow<'static, str>>) -> Self {
        Self {
            address,
            contract: contract.into(),
            compiler_version: None,
            optimizations: None,
            constructor: None,
        }
    }

    /// Set the compiler version.
    pub fn with_compiler_version(mut self, version: impl Into<Cow<'static, str>>) -> Self {
        self.compiler_version = Some(version.into());
        self
    }

    /// Set the optimizer runs.
    pub fn with_optimizations(mut self, runs: u32) -> Self {
        self.optimizations = Some(runs);
        self
    }

    /// Set the constructor signature.
    pub fn with_constructor(mut self, signature: impl Into<Cow<'static, str>>) -> Self {
        self.constructor = Some(signature.into());
        self
    }

    /// The proxy in front of `predeploy`.
    pub fn predeploy_proxy(predeploy: &Predeploy) -> Self {
        Self::new(predeploy.address, PROXY_CONTRACT).with_constructor(PROXY_CONSTRUCTOR)
    }

    /// The implementation behind `predeploy`, in the code namespace.
    pub fn predeploy_implementation(predeploy: &Predeploy) -> Self {
        let target = Self::new(predeploy_to_code_namespace(predeploy.address), predeploy.name);
        if predeploy.name == PROXY_ADMIN {
            target.with_compiler_version(PROXY_ADMIN_COMPILER)
        } else {
            target
        }
    }
}

/// A forge checkout and the targets verified from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeProject {
    /// Directory of the checkout, relative to the verification root.
    pub path: &'static str,
    /// Targets, in verification order.
    pub targets: Vec<VerificationTarget>,
}

/// Rollup targets built from `predeploys`: the governance token and WETH,
/// then one proxy per predeploy, then one implementation per predeploy.
pub fn rollup_targets(predeploys: &[Predeploy]) -> Vec<VerificationTarget> {
    let mut targets = Vec::with_capacity(2 + 2 * predeploys.len());
    targets.push(VerificationTarget::new(
        GOVERNANCE_TOKEN,
        "src/governance/GovernanceToken.sol:GovernanceToken",
    ));
    targets.push(VerificationTarget::new(WETH, "src/L2/WETH.sol:WETH"));
    targets.extend(predeploys.iter().map(VerificationTarget::predeploy_proxy));
    targets.extend(predeploys.iter().map(VerificationTarget::predeploy_implementation));
    targets
}

/// Every forge project, in verification order.
pub fn forge_projects() -> Vec<ForgeProject> {
    vec![
        ForgeProject {
            path: MULTICALL_PATH,
            targets: vec![VerificationTarget::new(MULTICALL3, "./src/Multicall3.sol:Multicall3")],
        },
        ForgeProject {
            path: PERMIT2_PATH,
            targets: vec![VerificationTarget::new(PERMIT2, "./src/Permit2.sol:Permit2")],
        },
        ForgeProject { path: CONTRACTS_BEDROCK_PATH, targets: rollup_targets(PREDEPLOYS) },
    ]
}
