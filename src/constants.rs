//! Static deployment tables and fixed values used by the verifier.

use alloy::primitives::{Address, address};

/// Prefix of the code namespace holding predeploy implementations. The low
/// 16 bits are always zero.
pub const CODE_NAMESPACE_PREFIX: Address = address!("0xc0D3C0d3C0d3C0D3c0d3C0d3c0D3C0d3c0d30000");

/// Template from which the hardhat network config is rendered.
pub const NETWORK_CONFIG_TEMPLATE: &str = "hardhat.config.ts.template";
/// Rendered hardhat network config, next to the template.
pub const NETWORK_CONFIG_OUTPUT: &str = "hardhat.config.ts";

/// Name of the network declared by the rendered hardhat config.
pub const HARDHAT_NETWORK: &str = "custom";
/// Verifier passed to `forge verify-contract`.
pub const FORGE_VERIFIER: &str = "blockscout";

/// Default program used to run hardhat.
pub const DEFAULT_NPX_BIN: &str = "npx";
/// Default program used to run forge.
pub const DEFAULT_FORGE_BIN: &str = "forge";

/// Generic proxy deployed in front of every predeploy.
pub const PROXY_CONTRACT: &str = "src/universal/Proxy.sol:Proxy";
/// Constructor of [`PROXY_CONTRACT`].
pub const PROXY_CONSTRUCTOR: &str = "constructor(address)";

/// `ProxyAdmin` was built with an older compiler than the rest of the
/// predeploys.
pub const PROXY_ADMIN: &str = "ProxyAdmin";
/// Compiler used for the `ProxyAdmin` implementation.
pub const PROXY_ADMIN_COMPILER: &str = "v0.8.15+commit.e14f2714";

/// Checkout of the rollup contracts.
pub const CONTRACTS_BEDROCK_PATH: &str = "./optimism/packages/contracts-bedrock";
/// Governance token predeploy. Not proxied.
pub const GOVERNANCE_TOKEN: Address = address!("0x4200000000000000000000000000000000000042");
/// Wrapped ether predeploy. Not proxied.
pub const WETH: Address = address!("0x4200000000000000000000000000000000000006");

/// Checkout of multicall.
pub const MULTICALL_PATH: &str = "./multicall";
/// Canonical `Multicall3` deployment.
pub const MULTICALL3: Address = address!("0xcA11bde05977b3631167028862bE2a173976CA11");

/// Checkout of permit2.
pub const PERMIT2_PATH: &str = "./permit2";
/// Canonical `Permit2` deployment.
pub const PERMIT2: Address = address!("0x000000000022D473030F116dDEE9F6B43aC78BA3");

/// A proxied predeploy: the proxy address and the contract behind it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Predeploy {
    /// Address of the proxy.
    pub address: Address,
    /// Name of the implementation contract.
    pub name: &'static str,
}

impl Predeploy {
    const fn new(address: Address, name: &'static str) -> Self {
        Self { address, name }
    }
}

/// Proxied predeploys, in verification order.
pub const PREDEPLOYS: &[Predeploy] = &[
    Predeploy::new(address!("0x4200000000000000000000000000000000000016"), "L2ToL1MessagePasser"),
    Predeploy::new(address!("0x4200000000000000000000000000000000000002"), "DeployerWhitelist"),
    Predeploy::new(
        address!("0x4200000000000000000000000000000000000007"),
        "L2CrossDomainMessenger",
    ),
    Predeploy::new(address!("0x4200000000000000000000000000000000000010"), "L2StandardBridge"),
    Predeploy::new(address!("0x4200000000000000000000000000000000000011"), "SequencerFeeVault"),
    Predeploy::new(
        address!("0x4200000000000000000000000000000000000012"),
        "OptimismMintableERC20Factory",
    ),
    Predeploy::new(address!("0x4200000000000000000000000000000000000013"), "L1BlockNumber"),
    Predeploy::new(address!("0x420000000000000000000000000000000000000F"), "GasPriceOracle"),
    Predeploy::new(address!("0x4200000000000000000000000000000000000015"), "L1Block"),
    Predeploy::new(address!("0x4200000000000000000000000000000000000000"), "LegacyMessagePasser"),
    Predeploy::new(address!("0x4200000000000000000000000000000000000014"), "L2ERC721Bridge"),
    Predeploy::new(
        address!("0x4200000000000000000000000000000000000017"),
        "OptimismMintableERC721Factory",
    ),
    Predeploy::new(address!("0x4200000000000000000000000000000000000018"), PROXY_ADMIN),
    Predeploy::new(address!("0x4200000000000000000000000000000000000019"), "BaseFeeVault"),
    Predeploy::new(address!("0x420000000000000000000000000000000000001a"), "L1FeeVault"),
    Predeploy::new(address!("0x4200000000000000000000000000000000000020"), "SchemaRegistry"),
    Predeploy::new(address!("0x4200000000000000000000000000000000000021"), "EAS"),
];

/// A hardhat checkout and the deployments verified from it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HardhatProject {
    /// Directory of the checkout, relative to the verification root.
    pub path: &'static str,
    /// Deployed addresses, in verification order.
    pub addresses: &'static [Address],
}

/// Hardhat checkouts, in verification order.
pub const HARDHAT_PROJECTS: &[HardhatProject] = &[
    HardhatProject {
        path: "./account-abstraction",
        addresses: &[
            address!("0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789"),
            address!("0x7fc98430eaedbb6070b35b39d798725049088348"),
        ],
    },
    HardhatProject {
        path: "./account-abstraction-v0.7.0",
        addresses: &[
            address!("0x0000000071727De22E5E9d8BAf0edAc6f37da032"),
            address!("0xEFC2c1444eBCC4Db75e7613d20C6a62fF67A167C"),
        ],
    },
    HardhatProject {
        path: "./safe-smart-account",
        addresses: &[
            address!("0x69f4D1788e39c87893C980c06EdF4b7f686e2938"),
            address!("0xfb1bffC9d739B8D520DaF37dF666da4C687191EA"),
            address!("0x998739BFdAAdde7C933B942a68053933098f9EDa"),
            address!("0xA1dabEF33b3B82c7814B6D82A79e50F4AC44102B"),
        ],
    },
    HardhatProject {
        path: "./create2deployer",
        addresses: &[address!("0x13b0D85CcB8bf860b6b79AF3029fCA081AE9beF2")],
    },
];
