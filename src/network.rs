//! Renders the hardhat network config declaring the chain under verification.

use crate::{
    VerifyError,
    config::Chain,
    constants::{NETWORK_CONFIG_OUTPUT, NETWORK_CONFIG_TEMPLATE},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Placeholder for the chain id.
pub const CHAIN_ID_PLACEHOLDER: &str = "{{ chainId }}";
/// Placeholder for the RPC url.
pub const RPC_URL_PLACEHOLDER: &str = "{{ rpcURL }}";
/// Placeholder for the explorer API url.
pub const API_URL_PLACEHOLDER: &str = "{{ apiURL }}";
/// Placeholder for the explorer frontend url.
pub const BROWSER_URL_PLACEHOLDER: &str = "{{ browserURL }}";

/// Substitute the chain parameters into `template`. Everything else is
/// left untouched.
pub fn render_network_config(template: &str, chain: &Chain) -> String {
    template
        .replace(CHAIN_ID_PLACEHOLDER, &chain.chain_id.to_string())
        .replace(RPC_URL_PLACEHOLDER, &chain.rpc_url)
        .replace(API_URL_PLACEHOLDER, &chain.browser_api_url)
        .replace(BROWSER_URL_PLACEHOLDER, &chain.browser_url)
}

/// Render `<dir>/hardhat.config.ts.template` into `<dir>/hardhat.config.ts`,
/// overwriting any previous output. Returns the path written.
pub async fn write_network_config(dir: &Path, chain: &Chain) -> Result<PathBuf, VerifyError> {
    let template_path = dir.join(NETWORK_CONFIG_TEMPLATE);
    let output_path = dir.join(NETWORK_CONFIG_OUTPUT);

    let template = tokio::fs::read_to_string(&template_path)
        .await
        .map_err(|source| VerifyError::TemplateRead { path: template_path.clone(), source })?;

    tokio::fs::write(&output_path, render_network_config(&template, chain))
        .await
        .map_err(|source| VerifyError::ConfigWrite { path: output_path.clone(), source })?;

    debug!(path = %output_path.display(), chain_id = chain.chain_id, "wrote network config");
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_chain;

    const TEMPLATE: &str = r#"const config = {
  networks: {
    custom: { chainId: {{ chainId }}, url: "{{ rpcURL }}" },
  },
  etherscan: {
    customChains: [{
      network: "custom",
      chainId: {{ chainId }},
      urls: { apiURL: "{{ apiURL }}", browserURL: "{{ browserURL }}" },
    }],
  },
};
"#;

    #[test]
    fn renders_every_placeholder() {
        let rendered = render_network_config(TEMPLATE, &test_chain());
        let expected = r#"const config = {
  networks: {
    custom: { chainId: 10, url: "https://rpc.example" },
  },
  etherscan: {
    customChains: [{
      network: "custom",
      chainId: 10,
      urls: { apiURL: "https://api.example", browserURL: "https://explorer.example" },
    }],
  },
};
"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn leaves_unknown_text_alone() {
        let template = "{{ chainid }} {{chainId}} $rpcURL";
        assert_eq!(render_network_config(template, &test_chain()), template);
    }

    #[tokio::test]
    async fn overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(NETWORK_CONFIG_TEMPLATE), TEMPLATE).unwrap();
        std::fs::write(dir.path().join(NETWORK_CONFIG_OUTPUT), "stale").unwrap();

        let path = write_network_config(dir.path(), &test_chain()).await.unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        write_network_config(dir.path(), &test_chain()).await.unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(path, dir.path().join(NETWORK_CONFIG_OUTPUT));
        assert_eq!(first, render_network_config(TEMPLATE, &test_chain()));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_network_config(dir.path(), &test_chain()).await.unwrap_err();
        assert!(matches!(err, VerifyError::TemplateRead { .. }));
        assert!(!dir.path().join(NETWORK_CONFIG_OUTPUT).exists());
    }
}
