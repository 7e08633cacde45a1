//! Configuration schema definitions.
//!
//! All types derive Serde traits so the same structure can be read from a
//! TOML file before environment overrides are applied.

use serde::{Deserialize, Serialize};

/// Root configuration for the CLI.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// JSON-RPC endpoint URL (`CLIENT_URL`).
    pub client_url: String,

    /// Hex private key of the token owner (`OWNER_PRIVATEKEY`).
    #[serde(skip_serializing)]
    pub owner_private_key: Option<String>,

    /// Address of a deployed token (`CONTRACT_ADDRESS`).
    pub contract_address: Option<String>,

    /// Transaction hash to fetch a receipt for (`CONTRACT_HASH`).
    pub contract_hash: Option<String>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_url: "http://localhost:8545".to_string(),
            owner_private_key: None,
            contract_address: None,
            contract_hash: None,
            rpc_timeout_secs: 10,
            log_level: "info".to_string(),
        }
    }
}
