//! Constructor arguments passed to `forge verify-contract`.

use crate::{VerifyError, config::Chain, targets::VerificationTarget};
use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    json_abi::Constructor,
};

/// Supplies the constructor arguments a deployment was created with.
pub trait ConstructorArgs {
    /// Arguments for `target` on `chain`, in declaration order.
    fn args(&self, target: &VerificationTarget, chain: &Chain) -> Vec<DynSolValue>;
}

/// Passes the chain's proxy owner as the sole constructor argument.
///
/// This holds for the predeploy proxies, which are the only targets that
/// declare a constructor.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProxyOwnerArgs;

impl ConstructorArgs for ProxyOwnerArgs {
    fn args(&self, _target: &VerificationTarget, chain: &Chain) -> Vec<DynSolValue> {
        vec![DynSolValue::Address(chain.proxy_owner)]
    }
}

/// ABI-encode `args` against a human-readable constructor signature such as
/// `constructor(address)`. Returns `0x`-prefixed hex.
pub fn encode_constructor_args(
    signature: &str,
    args: &[DynSolValue],
) -> Result<String, VerifyError> {
    let constructor = Constructor::parse(signature).map_err(|source| {
        VerifyError::ConstructorSignature { signature: signature.to_owned(), source }
    })?;
    let encoded = constructor.abi_encode_input(args).map_err(|source| {
        VerifyError::ConstructorEncode { signature: signature.to_owned(), source }
    })?;
    Ok(alloy::hex::encode_prefixed(encoded))
}
