//! Owner key handling and transaction signing.
//!
//! # Security
//! - The private key comes from configuration (`OWNER_PRIVATEKEY`)
//! - Keys are never logged or serialized

use alloy::consensus::{SignableTransaction, TxEnvelope, TxLegacy};
use alloy::eips::eip2718::Encodable2718;
use alloy::network::TxSigner;
use alloy::primitives::{Address, Bytes};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;

use crate::blockchain::types::{BlockchainError, BlockchainResult, SignedTx};

/// Environment variable holding the owner's private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "OWNER_PRIVATEKEY";

/// Parse a hex-encoded secp256k1 private key (with or without `0x`).
pub fn parse_private_key(private_key_hex: &str) -> BlockchainResult<PrivateKeySigner> {
    let key_hex = private_key_hex.trim();
    let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

    key_hex
        .parse::<PrivateKeySigner>()
        .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))
}

/// Address controlled by a hex-encoded private key.
pub fn owner_address(private_key_hex: &str) -> BlockchainResult<Address> {
    Ok(parse_private_key(private_key_hex)?.address())
}

/// Signing key bound to a chain ID.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Bind an already parsed key to `chain_id` for EIP-155 signatures.
    pub fn new(signer: PrivateKeySigner, chain_id: u64) -> Self {
        Self {
            signer: signer.with_chain_id(Some(chain_id)),
        }
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign a legacy transaction and encode it for broadcast.
    pub async fn sign_legacy(&self, mut tx: TxLegacy) -> BlockchainResult<SignedTx> {
        let signature = self
            .signer
            .sign_transaction(&mut tx)
            .await
            .map_err(|e| BlockchainError::Wallet(format!("Signing failed: {}", e)))?;

        let signed = tx.into_signed(signature);
        let hash = *signed.hash();
        let envelope = TxEnvelope::from(signed);

        Ok(SignedTx {
            hash,
            raw: Bytes::from(envelope.encoded_2718()),
        })
    }
}
