//! Goldcoin ERC-20 command-line tool.
//!
//! # Architecture Overview
//!
//! ```text
//!     CLI flags ──▶ cli ──▶ token::TokenContract ──┬──▶ blockchain::signer ──┐
//!                                                  │                        │
//!                                                  ├──▶ token::Deployer ────┤
//!                                                  │                        ▼
//!                                                  └──▶ token::Erc20Token ─▶ blockchain::ChainBackend ──▶ JSON-RPC node
//!
//!     Cross-cutting: config (TOML + .env + environment), observability (tracing)
//! ```

pub mod blockchain;
pub mod cli;
pub mod config;
pub mod observability;
pub mod token;

pub use config::AppConfig;
pub use token::TokenContract;
