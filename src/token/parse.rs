//! Validation of user-supplied token arguments.
//!
//! All of these run before any chain call is made.

use std::str::FromStr;

use alloy::primitives::{Address, TxHash, U256};

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Parse a token amount given as a base-10 integer string.
pub fn parse_amount(amount: &str) -> BlockchainResult<U256> {
    let amount = amount.trim();
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BlockchainError::Validation(format!(
            "amount '{}' is not a decimal number",
            amount
        )));
    }

    U256::from_str_radix(amount, 10).map_err(|e| {
        BlockchainError::Validation(format!("amount '{}' is out of range: {}", amount, e))
    })
}

/// Parse a hex account or contract address.
pub fn parse_address(address: &str) -> BlockchainResult<Address> {
    Address::from_str(address.trim())
        .map_err(|e| BlockchainError::Validation(format!("invalid address '{}': {}", address, e)))
}

/// Parse a 32-byte transaction hash.
pub fn parse_tx_hash(hash: &str) -> BlockchainResult<TxHash> {
    TxHash::from_str(hash.trim()).map_err(|e| {
        BlockchainError::Validation(format!("invalid transaction hash '{}': {}", hash, e))
    })
}
