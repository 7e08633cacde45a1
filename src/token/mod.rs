//! Goldcoin token subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flag
//!     → contract.rs (operation facade)
//!     → blockchain::signer (signing context, state-changing ops only)
//!     → deployer.rs / instance.rs (creation tx, bound token calls)
//!     → bindings.rs (sol!-generated ABI encoding)
//!     → blockchain::client (JSON-RPC)
//! ```

pub mod bindings;
pub mod contract;
pub mod deployer;
pub mod instance;
pub mod parse;

pub use contract::TokenContract;
pub use deployer::{Deployer, GoldcoinDeployer};
pub use instance::{Erc20Token, GoldcoinInstance};
