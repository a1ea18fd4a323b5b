use crate::constants::{DEFAULT_FORGE_BIN, DEFAULT_NPX_BIN};
use alloy::primitives::Address;
use clap::Parser;
use init4_bin_base::utils::from_env::FromEnv;
use std::path::PathBuf;

/// Connection parameters of the chain whose deployments are being verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// Chain id.
    pub chain_id: u64,
    /// RPC endpoint of the chain.
    pub rpc_url: String,
    /// API endpoint of the block explorer.
    pub browser_api_url: String,
    /// Frontend of the block explorer.
    pub browser_url: String,
    /// Owner passed to every predeploy proxy constructor.
    pub proxy_owner: Address,
}

fn parse_url(s: &str) -> Result<String, url::ParseError> {
    url::Url::parse(s).map(|_| s.to_owned())
}

/// Command line of `verify-contracts`.
///
/// Every chain parameter is optional at the parser level. When any of them
/// is missing the help text is printed and nothing runs.
#[derive(Debug, Clone, Parser)]
#[command(name = "verify-contracts", about = "Contract verify", long_about = None)]
pub struct Cli {
    /// chain id
    #[arg(long = "chainId")]
    pub chain_id: Option<u64>,

    /// rpc url
    #[arg(long = "rpcUrl", value_parser = parse_url)]
    pub rpc_url: Option<String>,

    /// browser api url
    #[arg(long = "browserApiUrl", value_parser = parse_url)]
    pub browser_api_url: Option<String>,

    /// browser url
    #[arg(long = "browserUrl", value_parser = parse_url)]
    pub browser_url: Option<String>,

    /// proxy owner address
    #[arg(long = "proxyOwner")]
    pub proxy_owner: Option<Address>,

    /// Directory containing the project checkouts.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Log every command instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// Write the per-target report as JSON to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exit with an error if any target did not verify.
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Assemble the [`Chain`], or `None` if any parameter is missing. A
    /// chain id of 0 counts as missing.
    pub fn chain(&self) -> Option<Chain> {
        Some(Chain {
            chain_id: self.chain_id.filter(|id| *id != 0)?,
            rpc_url: self.rpc_url.clone()?,
            browser_api_url: self.browser_api_url.clone()?,
            browser_url: self.browser_url.clone()?,
            proxy_owner: self.proxy_owner?,
        })
    }
}

/// Locations of the external verification tools.
#[derive(Debug, Clone, Default, FromEnv)]
pub struct ToolConfig {
    /// Program used to run hardhat.
    #[from_env(
        var = "NPX_BIN",
        desc = "Program used to run hardhat. Defaults to `npx`",
        infallible,
        optional
    )]
    pub npx_bin: Option<String>,

    /// Program used to run forge.
    #[from_env(
        var = "FORGE_BIN",
        desc = "Program used to run forge. Defaults to `forge`",
        infallible,
        optional
    )]
    pub forge_bin: Option<String>,
}

impl ToolConfig {
    /// Program used to run hardhat.
    pub fn npx(&self) -> &str {
        self.npx_bin.as_deref().unwrap_or(DEFAULT_NPX_BIN)
    }

    /// Program used to run forge.
    pub fn forge(&self) -> &str {
        self.forge_bin.as_deref().unwrap_or(DEFAULT_FORGE_BIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const FULL: &[&str] = &[
        "verify-contracts",
        "--chainId",
        "10",
        "--rpcUrl",
        "https://rpc.example",
        "--browserApiUrl",
        "https://api.example",
        "--browserUrl",
        "https://explorer.example",
        "--proxyOwner",
        "0x00000000000000000000000000000000000000aa",
    ];

    #[test]
    fn parses_full_chain() {
        let cli = Cli::try_parse_from(FULL).unwrap();
        let chain = cli.chain().unwrap();
        assert_eq!(chain.chain_id, 10);
        assert_eq!(chain.rpc_url, "https://rpc.example");
        assert_eq!(chain.browser_api_url, "https://api.example");
        assert_eq!(chain.browser_url, "https://explorer.example");
        assert_eq!(chain.proxy_owner, address!("0x00000000000000000000000000000000000000aa"));
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(!cli.dry_run && !cli.strict);
    }

    #[test]
    fn missing_parameter_yields_no_chain() {
        let cli = Cli::try_parse_from(["verify-contracts", "--chainId", "10"]).unwrap();
        assert!(cli.chain().is_none());

        let cli = Cli::try_parse_from(&FULL[..FULL.len() - 2]).unwrap();
        assert!(cli.chain().is_none());
    }

    #[test]
    fn zero_chain_id_yields_no_chain() {
        let mut args = FULL.to_vec();
        args[2] = "0";
        let cli = Cli::try_parse_from(&args).unwrap();
        assert_eq!(cli.chain_id, Some(0));
        assert!(cli.chain().is_none());
    }

    #[test]
    fn rejects_malformed_values() {
        let mut args = FULL.to_vec();
        args[4] = "not a url";
        assert!(Cli::try_parse_from(&args).is_err());

        let mut args = FULL.to_vec();
        args[10] = "0x1234";
        assert!(Cli::try_parse_from(&args).is_err());
    }

    #[test]
    fn tool_defaults() {
        let tools = ToolConfig::default();
        assert_eq!(tools.npx(), "npx");
        assert_eq!(tools.forge(), "forge");

        let tools = ToolConfig { npx_bin: None, forge_bin: Some("/opt/forge".into()) };
        assert_eq!(tools.forge(), "/opt/forge");
    }
}
