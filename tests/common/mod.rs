//! Shared test doubles for the token operation tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use alloy::primitives::{keccak256, Address, Bytes, TxHash, U256};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use async_trait::async_trait;

use goldcoin_cli::blockchain::client::ChainBackend;
use goldcoin_cli::blockchain::signer::SignerContext;
use goldcoin_cli::blockchain::types::{BlockchainError, BlockchainResult};
use goldcoin_cli::token::Erc20Token;

/// go-ethereum's well-known test key.
pub const TEST_PRIVATE_KEY: &str =
    "b71c71a67e1177ad4e901695e1b4b9ee17ae16c6668d313eac2f96dbcda3f291";
pub const TEST_ADDRESS: &str = "0x71562b71999873DB5b286dF957af199Ec94617F7";
pub const RECIPIENT: &str = "0x4592d8f8d7b001e72cb26a73e4fa1806a51ac79d";

pub fn rpc_error(message: &str) -> BlockchainError {
    BlockchainError::Rpc(message.to_string())
}

pub fn test_address() -> Address {
    TEST_ADDRESS.parse().unwrap()
}

type Slot<T> = Mutex<Option<BlockchainResult<T>>>;

fn take<T>(slot: &Slot<T>, method: &'static str) -> BlockchainResult<T> {
    slot.lock()
        .unwrap()
        .take()
        .unwrap_or_else(|| Err(BlockchainError::Rpc(format!("unexpected call to {}", method))))
}

/// Chain backend with one-shot scripted responses.
///
/// Each expectation answers a single call; a call without an expectation
/// fails with an RPC error naming the method. Every call is recorded in order.
#[derive(Default)]
pub struct MockBackend {
    chain_id: Slot<u64>,
    gas_price: Slot<u128>,
    nonce: Slot<u64>,
    estimate: Slot<u64>,
    send: Slot<()>,
    call_results: Mutex<VecDeque<BlockchainResult<Bytes>>>,
    receipt: Slot<Option<TransactionReceipt>>,

    pub log: Mutex<Vec<&'static str>>,
    pub estimated: Mutex<Vec<TransactionRequest>>,
    pub sent: Mutex<Vec<Bytes>>,
    pub nonce_queried_for: Mutex<Vec<Address>>,
    pub receipt_queried_for: Mutex<Vec<TxHash>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful responses for every signer assembly step.
    pub fn with_signer_steps(chain_id: u64, gas_price: u128, nonce: u64, gas: u64) -> Self {
        Self::new()
            .expect_chain_id(Ok(chain_id))
            .expect_gas_price(Ok(gas_price))
            .expect_nonce(Ok(nonce))
            .expect_estimate_gas(Ok(gas))
    }

    pub fn expect_chain_id(self, result: BlockchainResult<u64>) -> Self {
        *self.chain_id.lock().unwrap() = Some(result);
        self
    }

    pub fn expect_gas_price(self, result: BlockchainResult<u128>) -> Self {
        *self.gas_price.lock().unwrap() = Some(result);
        self
    }

    pub fn expect_nonce(self, result: BlockchainResult<u64>) -> Self {
        *self.nonce.lock().unwrap() = Some(result);
        self
    }

    pub fn expect_estimate_gas(self, result: BlockchainResult<u64>) -> Self {
        *self.estimate.lock().unwrap() = Some(result);
        self
    }

    pub fn expect_send(self, result: BlockchainResult<()>) -> Self {
        *self.send.lock().unwrap() = Some(result);
        self
    }

    /// Queue an `eth_call` response; calls are answered in order.
    pub fn expect_call(self, result: BlockchainResult<Bytes>) -> Self {
        self.call_results.lock().unwrap().push_back(result);
        self
    }

    pub fn expect_receipt(self, result: BlockchainResult<Option<TransactionReceipt>>) -> Self {
        *self.receipt.lock().unwrap() = Some(result);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.log.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) {
        self.log.lock().unwrap().push(method);
    }
}

#[async_trait]
impl ChainBackend for MockBackend {
    async fn chain_id(&self) -> BlockchainResult<u64> {
        self.record("chain_id");
        take(&self.chain_id, "chain_id")
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        self.record("gas_price");
        take(&self.gas_price, "gas_price")
    }

    async fn pending_nonce(&self, address: Address) -> BlockchainResult<u64> {
        self.record("pending_nonce");
        self.nonce_queried_for.lock().unwrap().push(address);
        take(&self.nonce, "pending_nonce")
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> BlockchainResult<u64> {
        self.record("estimate_gas");
        self.estimated.lock().unwrap().push(tx);
        take(&self.estimate, "estimate_gas")
    }

    async fn send_raw_transaction(&self, raw: &[u8]) -> BlockchainResult<TxHash> {
        self.record("send_raw_transaction");
        take(&self.send, "send_raw_transaction")?;
        self.sent.lock().unwrap().push(Bytes::copy_from_slice(raw));
        Ok(keccak256(raw))
    }

    async fn call(&self, _tx: TransactionRequest) -> BlockchainResult<Bytes> {
        self.record("call");
        self.call_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(rpc_error("unexpected call to call")))
    }

    async fn transaction_receipt(
        &self,
        hash: TxHash,
    ) -> BlockchainResult<Option<TransactionReceipt>> {
        self.record("transaction_receipt");
        self.receipt_queried_for.lock().unwrap().push(hash);
        take(&self.receipt, "transaction_receipt")
    }
}

/// Token binding double with one-shot scripted reads.
pub struct MockToken {
    address: Address,
    symbol: Slot<String>,
    balance: Slot<U256>,
    transfer: Slot<TxHash>,

    pub balance_queried_for: Mutex<Vec<Address>>,
    pub transfers: Mutex<Vec<(Address, U256, u64)>>,
}

impl MockToken {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            symbol: Mutex::new(None),
            balance: Mutex::new(None),
            transfer: Mutex::new(None),
            balance_queried_for: Mutex::new(Vec::new()),
            transfers: Mutex::new(Vec::new()),
        }
    }

    pub fn expect_symbol(self, result: BlockchainResult<String>) -> Self {
        *self.symbol.lock().unwrap() = Some(result);
        self
    }

    pub fn expect_balance(self, result: BlockchainResult<U256>) -> Self {
        *self.balance.lock().unwrap() = Some(result);
        self
    }

    pub fn expect_transfer(self, result: BlockchainResult<TxHash>) -> Self {
        *self.transfer.lock().unwrap() = Some(result);
        self
    }
}

#[async_trait]
impl Erc20Token for MockToken {
    fn address(&self) -> Address {
        self.address
    }

    async fn name(&self) -> BlockchainResult<String> {
        Ok("Goldcoin".to_string())
    }

    async fn symbol(&self) -> BlockchainResult<String> {
        take(&self.symbol, "symbol")
    }

    async fn decimals(&self) -> BlockchainResult<u8> {
        Ok(18)
    }

    async fn total_supply(&self) -> BlockchainResult<U256> {
        Ok(U256::from(1_000_000u64) * U256::from(10u64).pow(U256::from(18u64)))
    }

    async fn balance_of(&self, account: Address) -> BlockchainResult<U256> {
        self.balance_queried_for.lock().unwrap().push(account);
        take(&self.balance, "balance_of")
    }

    async fn transfer(
        &self,
        ctx: &SignerContext,
        to: Address,
        amount: U256,
    ) -> BlockchainResult<TxHash> {
        self.transfers.lock().unwrap().push((to, amount, ctx.nonce));
        take(&self.transfer, "transfer")
    }
}

/// A mined, successful contract-creation receipt as a node returns it.
pub fn creation_receipt(tx_hash: &str) -> TransactionReceipt {
    serde_json::from_value(serde_json::json!({
        "type": "0x0",
        "status": "0x1",
        "cumulativeGasUsed": "0x10d2c7",
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": format!("0x{}", "11".repeat(32)),
        "blockNumber": "0x10",
        "gasUsed": "0x10d2c7",
        "effectiveGasPrice": "0x3e8",
        "from": TEST_ADDRESS.to_lowercase(),
        "to": null,
        "contractAddress": "0xdb7d6ab1f17c6b31909ae466702703daef9269cf"
    }))
    .unwrap()
}

/// ABI encoding of a single `uint256` return value.
pub fn encode_uint(value: u64) -> Bytes {
    let mut out = vec![0u8; 32];
    out[24..].copy_from_slice(&value.to_be_bytes());
    out.into()
}

/// ABI encoding of a single `string` return value.
pub fn encode_string(value: &str) -> Bytes {
    let mut out = vec![0u8; 64];
    out[31] = 0x20;
    out[56..64].copy_from_slice(&(value.len() as u64).to_be_bytes());
    let mut data = value.as_bytes().to_vec();
    data.resize(value.len().div_ceil(32) * 32, 0);
    out.extend_from_slice(&data);
    out.into()
}
