//! Verifies well-known contract deployments and rollup predeploys on a
//! block explorer by driving `hardhat verify` and `forge verify-contract`.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
mod macros;

pub mod abi;
pub mod config;
pub mod constants;
pub mod network;
pub mod report;
pub mod runner;
pub mod service;
pub mod targets;
pub mod tasks;
pub mod utils;

/// Test utilities
pub mod test_utils;

mod error;
pub use error::VerifyError;
