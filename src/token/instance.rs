//! Bound token instances.
//!
//! `Erc20Token` is the seam between the operation facade and the generated
//! bindings; `GoldcoinInstance` drives the bindings over a `ChainBackend`.

use std::sync::Arc;

use alloy::primitives::{Address, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use crate::blockchain::client::ChainBackend;
use crate::blockchain::signer::{CallIntent, SignerContext};
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::token::bindings::Goldcoin;

/// Calls a deployed ERC-20 token answers.
#[async_trait]
pub trait Erc20Token: Send + Sync {
    /// Address the token lives at.
    fn address(&self) -> Address;

    async fn name(&self) -> BlockchainResult<String>;

    async fn symbol(&self) -> BlockchainResult<String>;

    async fn decimals(&self) -> BlockchainResult<u8>;

    async fn total_supply(&self) -> BlockchainResult<U256>;

    async fn balance_of(&self, account: Address) -> BlockchainResult<U256>;

    /// Sign and broadcast `transfer(to, amount)` using `ctx`.
    async fn transfer(
        &self,
        ctx: &SignerContext,
        to: Address,
        amount: U256,
    ) -> BlockchainResult<TxHash>;
}

/// Intent for `transfer(to, amount)` on `token`.
pub fn transfer_intent(token: Address, to: Address, amount: U256) -> CallIntent {
    let input = Goldcoin::transferCall { to, amount }.abi_encode();
    CallIntent::call(token, input.into())
}

/// Goldcoin contract at a fixed address.
#[derive(Clone)]
pub struct GoldcoinInstance {
    address: Address,
    backend: Arc<dyn ChainBackend>,
}

impl GoldcoinInstance {
    pub fn new(address: Address, backend: Arc<dyn ChainBackend>) -> Self {
        Self { address, backend }
    }

    async fn read<C: SolCall + Send>(&self, call: C) -> BlockchainResult<C::Return> {
        let request = TransactionRequest::default()
            .to(self.address)
            .input(call.abi_encode().into());

        let output = self.backend.call(request).await?;

        C::abi_decode_returns(&output).map_err(|e| {
            BlockchainError::ContractCall(format!("{} returned undecodable data: {}", C::SIGNATURE, e))
        })
    }
}

#[async_trait]
impl Erc20Token for GoldcoinInstance {
    fn address(&self) -> Address {
        self.address
    }

    async fn name(&self) -> BlockchainResult<String> {
        self.read(Goldcoin::nameCall {}).await
    }

    async fn symbol(&self) -> BlockchainResult<String> {
        self.read(Goldcoin::symbolCall {}).await
    }

    async fn decimals(&self) -> BlockchainResult<u8> {
        self.read(Goldcoin::decimalsCall {}).await
    }

    async fn total_supply(&self) -> BlockchainResult<U256> {
        self.read(Goldcoin::totalSupplyCall {}).await
    }

    async fn balance_of(&self, account: Address) -> BlockchainResult<U256> {
        self.read(Goldcoin::balanceOfCall { account }).await
    }

    async fn transfer(
        &self,
        ctx: &SignerContext,
        to: Address,
        amount: U256,
    ) -> BlockchainResult<TxHash> {
        let signed = ctx.sign(transfer_intent(self.address, to, amount)).await?;
        let tx_hash = self.backend.send_raw_transaction(&signed.raw).await?;

        tracing::info!(
            token = %self.address,
            to = %to,
            amount = %amount,
            tx_hash = %tx_hash,
            "Transfer submitted"
        );

        Ok(tx_hash)
    }
}

impl std::fmt::Debug for GoldcoinInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoldcoinInstance")
            .field("address", &self.address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::TxKind;

    #[test]
    fn test_transfer_intent() {
        let token = Address::repeat_byte(0xaa);
        let to = Address::repeat_byte(0xbb);
        let intent = transfer_intent(token, to, U256::from(100u64));

        assert_eq!(intent.to, TxKind::Call(token));
        assert_eq!(&intent.input[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(&intent.input[16..36], to.as_slice());
        assert_eq!(intent.input[67], 100);
    }
}
