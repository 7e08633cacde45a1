//! Chain-specific types and error definitions.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// Could not build a connection to the RPC endpoint.
    #[error("Connection error: {0}")]
    Connection(String),

    /// RPC request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Invalid private key format or signing failure.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Caller-supplied input was rejected before touching the chain.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Contract binding failed to encode or decode a call.
    #[error("Contract call error: {0}")]
    ContractCall(String),

    /// No receipt exists for the transaction (unknown or not yet mined).
    #[error("Receipt not found for transaction {0}")]
    ReceiptNotFound(TxHash),

    /// A required setting is missing.
    #[error("Not configured: {0} is not set")]
    NotConfigured(&'static str),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Outcome of a contract deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deployment {
    /// Address the contract was created at.
    pub address: Address,
    /// Hash of the creation transaction.
    pub tx_hash: TxHash,
}

/// Token symbol together with an account balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceQuery {
    pub symbol: String,
    pub balance: U256,
}

/// Descriptive token metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
}

/// A signed transaction ready for `eth_sendRawTransaction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTx {
    /// Hash of the signed transaction.
    pub hash: TxHash,
    /// EIP-2718 encoded bytes.
    pub raw: Bytes,
}
