use crate::constants::CODE_NAMESPACE_PREFIX;
use alloy::primitives::Address;

/// Returns the address at which the implementation of a proxied predeploy
/// lives: the low 16 bits of `predeploy` OR'd into [`CODE_NAMESPACE_PREFIX`].
///
/// Mirrors `Predeploys.predeployToCodeNamespace` in the rollup contracts.
pub const fn predeploy_to_code_namespace(predeploy: Address) -> Address {
    let mut out = CODE_NAMESPACE_PREFIX.0.0;
    let input = predeploy.0.0;
    out[18] |= input[18];
    out[19] |= input[19];
    Address::new(out)
}

/// Formats an address the way it is passed to the external tools.
pub fn hex_address(address: &Address) -> String {
    alloy::hex::encode_prefixed(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_predeploy_to_code_namespace() {
        let implementation =
            predeploy_to_code_namespace(address!("0x4200000000000000000000000000000000000016"));
        assert_eq!(implementation, address!("0xc0d3c0d3c0d3c0d3c0d3c0d3c0d3c0d3c0d30016"));
        assert_eq!(hex_address(&implementation), "0xc0d3c0d3c0d3c0d3c0d3c0d3c0d3c0d3c0d30016");
    }

    #[test]
    fn code_namespace_ignores_high_bits() {
        let a = predeploy_to_code_namespace(address!("0x420000000000000000000000000000000000001a"));
        let b = predeploy_to_code_namespace(address!("0xffffffffffffffffffffffffffffffffffff001a"));
        assert_eq!(a, b);
        assert_eq!(a, address!("0xc0d3c0d3c0d3c0d3c0d3c0d3c0d3c0d3c0d3001a"));
    }

    #[test]
    fn code_namespace_is_idempotent() {
        for seed in [0u8, 0x0f, 0x42, 0xff] {
            let addr = Address::repeat_byte(seed);
            let once = predeploy_to_code_namespace(addr);
            assert_eq!(predeploy_to_code_namespace(once), once);
        }
    }

    #[test]
    fn hex_address_is_lowercase() {
        let addr = address!("0xcA11bde05977b3631167028862bE2a173976CA11");
        assert_eq!(hex_address(&addr), "0xca11bde05977b3631167028862be2a173976ca11");
    }
}
