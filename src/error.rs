use std::path::PathBuf;

/// Errors raised while preparing verification commands.
#[derive(thiserror::Error, Debug)]
pub enum VerifyError {
    /// The hardhat network config template could not be read.
    #[error("failed to read network config template {}: {source}", .path.display())]
    TemplateRead {
        /// Template path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The rendered network config could not be written.
    #[error("failed to write network config {}: {source}", .path.display())]
    ConfigWrite {
        /// Output path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A constructor signature could not be parsed.
    #[error("invalid constructor signature `{signature}`: {source}")]
    ConstructorSignature {
        /// The offending signature.
        signature: String,
        /// Underlying parser error.
        source: alloy::json_abi::parser::Error,
    },

    /// Constructor arguments did not match the signature.
    #[error("failed to encode arguments for `{signature}`: {source}")]
    ConstructorEncode {
        /// The signature arguments were encoded against.
        signature: String,
        /// Underlying encoder error.
        source: alloy::dyn_abi::Error,
    },
}
