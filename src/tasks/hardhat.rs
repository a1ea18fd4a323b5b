use crate::{constants::HARDHAT_NETWORK, runner::Invocation, utils::hex_address};
use alloy::primitives::Address;
use std::path::Path;

/// `npx hardhat verify --network custom <address>`, run inside `dir`.
pub fn hardhat_invocation(npx: &str, dir: &Path, address: Address) -> Invocation {
    Invocation::new(npx, dir)
        .arg("hardhat")
        .arg("verify")
        .flag("--network", HARDHAT_NETWORK)
        .arg(hex_address(&address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn builds_verify_command() {
        let inv = hardhat_invocation(
            "npx",
            Path::new("./create2deployer"),
            address!("0x13b0D85CcB8bf860b6b79AF3029fCA081AE9beF2"),
        );
        assert_eq!(inv.program, "npx");
        assert_eq!(inv.dir, Path::new("./create2deployer"));
        assert_eq!(
            inv.args,
            [
                "hardhat",
                "verify",
                "--network",
                "custom",
                "0x13b0d85ccb8bf860b6b79af3029fca081ae9bef2"
            ]
        );
    }
}
