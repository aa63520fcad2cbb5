//! Builds a static token list from a directory of token logos, reading each
//! token's ERC-20 metadata over JSON-RPC.

pub mod abi;
pub mod config;
pub mod error;
mod interfaces;
pub mod resolver;
pub mod rpc;
pub mod scanner;
pub mod tokenlist;

pub use error::{Error, Result};
