//! Signing context assembly.
//!
//! Every state-changing operation starts here. The steps run strictly in
//! order and the first failure is handed back to the caller as-is:
//!
//! ```text
//! chain id → parse key → bind signer → gas price → pending nonce → estimate gas
//! ```

use alloy::consensus::TxLegacy;
use alloy::primitives::{Address, Bytes, TxKind, U256};
use alloy::rpc::types::TransactionRequest;

use crate::blockchain::client::ChainBackend;
use crate::blockchain::types::{BlockchainResult, SignedTx};
use crate::blockchain::wallet::{parse_private_key, Wallet};

/// Destination and input of the transaction a context is built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallIntent {
    pub to: TxKind,
    pub input: Bytes,
}

impl CallIntent {
    /// Contract creation with the given init code.
    pub fn create(bytecode: Bytes) -> Self {
        Self {
            to: TxKind::Create,
            input: bytecode,
        }
    }

    /// Call into an existing contract.
    pub fn call(to: Address, input: Bytes) -> Self {
        Self {
            to: TxKind::Call(to),
            input,
        }
    }

    /// Request used for gas estimation on behalf of `from`.
    pub fn to_request(&self, from: Address) -> TransactionRequest {
        TransactionRequest {
            from: Some(from),
            to: Some(self.to),
            input: self.input.clone().into(),
            ..Default::default()
        }
    }
}

/// Transaction parameters plus the key that signs them.
///
/// Built fresh for each operation and dropped afterwards.
#[derive(Debug, Clone)]
pub struct SignerContext {
    wallet: Wallet,
    pub chain_id: u64,
    pub from: Address,
    pub nonce: u64,
    /// Wei per gas unit.
    pub gas_price: u128,
    pub gas_limit: u64,
    pub value: U256,
}

impl SignerContext {
    /// Legacy transaction carrying this context's parameters.
    pub fn legacy_tx(&self, intent: CallIntent) -> TxLegacy {
        TxLegacy {
            chain_id: Some(self.chain_id),
            nonce: self.nonce,
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            to: intent.to,
            value: self.value,
            input: intent.input,
        }
    }

    /// Sign `intent` with this context.
    pub async fn sign(&self, intent: CallIntent) -> BlockchainResult<SignedTx> {
        self.wallet.sign_legacy(self.legacy_tx(intent)).await
    }
}

/// Assemble a signing context for `intent`.
pub async fn assemble_signer(
    backend: &dyn ChainBackend,
    private_key_hex: &str,
    intent: &CallIntent,
) -> BlockchainResult<SignerContext> {
    let chain_id = backend
        .chain_id()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Unable to get chain id"))?;

    let key = parse_private_key(private_key_hex)
        .inspect_err(|e| tracing::warn!(error = %e, "Unable to parse private key"))?;

    let wallet = Wallet::new(key, chain_id);
    let from = wallet.address();

    let gas_price = backend
        .gas_price()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Unable to get suggested gas price"))?;

    let nonce = backend
        .pending_nonce(from)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Unable to get nonce"))?;

    let gas_limit = backend
        .estimate_gas(intent.to_request(from))
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Unable to estimate gas limit"))?;

    tracing::debug!(
        chain_id,
        from = %from,
        nonce,
        gas_price = %gas_price,
        gas_limit,
        "Signer context assembled"
    );

    Ok(SignerContext {
        wallet,
        chain_id,
        from,
        nonce,
        gas_price,
        gas_limit,
        value: U256::ZERO,
    })
}
