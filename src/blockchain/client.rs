//! Chain client seam and its JSON-RPC implementation.
//!
//! # Responsibilities
//! - Define the narrow set of chain calls the token operations need
//! - Connect to a JSON-RPC endpoint over HTTP
//! - Bound every request with a timeout and map failures to `BlockchainError`

use std::fmt::Display;
use std::future::IntoFuture;
use std::time::Duration;

use alloy::network::Ethereum;
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use async_trait::async_trait;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Chain calls used by the signer assembler and the token operations.
///
/// The RPC client implements this against a live node; tests substitute a
/// scripted backend.
#[async_trait]
pub trait ChainBackend: Send + Sync {
    /// Chain ID used for EIP-155 signatures.
    async fn chain_id(&self) -> BlockchainResult<u64>;

    /// Suggested legacy gas price in wei.
    async fn gas_price(&self) -> BlockchainResult<u128>;

    /// Transaction count of `address` including pending transactions.
    async fn pending_nonce(&self, address: Address) -> BlockchainResult<u64>;

    /// Gas units the node expects `tx` to consume.
    async fn estimate_gas(&self, tx: TransactionRequest) -> BlockchainResult<u64>;

    /// Broadcast a signed, EIP-2718 encoded transaction.
    async fn send_raw_transaction(&self, raw: &[u8]) -> BlockchainResult<TxHash>;

    /// Execute a read-only call against the latest state.
    async fn call(&self, tx: TransactionRequest) -> BlockchainResult<Bytes>;

    /// Receipt for `hash`, or `None` if the node does not know it yet.
    async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> BlockchainResult<Option<TransactionReceipt>>;
}

/// JSON-RPC client with a per-request timeout.
#[derive(Clone)]
pub struct RpcClient {
    provider: DynProvider<Ethereum>,
    rpc_url: String,
    timeout_duration: Duration,
}

impl RpcClient {
    /// Create a client for `rpc_url`.
    ///
    /// No request is made here; an unreachable node surfaces on the first call.
    pub fn new(rpc_url: &str, rpc_timeout_secs: u64) -> BlockchainResult<Self> {
        let url: url::Url = rpc_url.parse().map_err(|e| {
            BlockchainError::Connection(format!("Invalid RPC URL '{}': {}", rpc_url, e))
        })?;

        let provider = ProviderBuilder::new().connect_http(url).erased();

        tracing::info!(rpc_url = %rpc_url, "Client connection successful");

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            timeout_duration: Duration::from_secs(rpc_timeout_secs),
        })
    }

    async fn timed<F, T, E>(&self, method: &'static str, fut: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: Display,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                tracing::debug!(method, error = %e, "RPC error");
                Err(BlockchainError::Rpc(format!("{}: {}", method, e)))
            }
            Err(_) => {
                tracing::debug!(method, "RPC timeout");
                Err(BlockchainError::Timeout(self.timeout_duration.as_secs()))
            }
        }
    }
}

#[async_trait]
impl ChainBackend for RpcClient {
    async fn chain_id(&self) -> BlockchainResult<u64> {
        self.timed("eth_chainId", self.provider.get_chain_id()).await
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        self.timed("eth_gasPrice", self.provider.get_gas_price()).await
    }

    async fn pending_nonce(&self, address: Address) -> BlockchainResult<u64> {
        self.timed(
            "eth_getTransactionCount",
            self.provider.get_transaction_count(address).pending(),
        )
        .await
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> BlockchainResult<u64> {
        self.timed("eth_estimateGas", self.provider.estimate_gas(tx)).await
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> BlockchainResult<TxHash> {
        let pending = self
            .timed(
                "eth_sendRawTransaction",
                self.provider.send_raw_transaction(raw),
            )
            .await?;
        Ok(*pending.tx_hash())
    }

    async fn call(&self, tx: TransactionRequest) -> BlockchainResult<Bytes> {
        self.timed("eth_call", self.provider.call(tx)).await
    }

    async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> BlockchainResult<Option<TransactionReceipt>> {
        self.timed(
            "eth_getTransactionReceipt",
            self.provider.get_transaction_receipt(hash),
        )
        .await
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("rpc_url", &self.rpc_url)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
