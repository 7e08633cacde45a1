//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment (private key, RPC URL)
//!     → wallet.rs (key parsing, signing)
//!     → client.rs (ChainBackend over JSON-RPC with timeouts)
//!     → signer.rs (chain id, gas price, nonce, gas limit → SignerContext)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from configuration / environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod signer;
pub mod types;
pub mod wallet;

pub use client::{ChainBackend, RpcClient};
pub use signer::{assemble_signer, CallIntent, SignerContext};
pub use types::{BlockchainError, BlockchainResult};
pub use wallet::Wallet;
