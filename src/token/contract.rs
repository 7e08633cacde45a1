//! Token operations exposed to the CLI.
//!
//! # Operations
//! - deploy: assemble signer for the init code, hand off to the injected deployer
//! - read / check_balance: symbol and `balanceOf` reads, no signer
//! - receipt: look up the configured transaction hash
//! - transfer_tokens: validate inputs, assemble signer, call `transfer`

use std::sync::Arc;

use alloy::primitives::{Address, TxHash, U256};
use alloy::rpc::types::TransactionReceipt;

use crate::blockchain::client::ChainBackend;
use crate::blockchain::signer::{assemble_signer, CallIntent};
use crate::blockchain::types::{
    BalanceQuery, BlockchainError, BlockchainResult, Deployment, TokenInfo,
};
use crate::blockchain::wallet::{owner_address, PRIVATE_KEY_ENV_VAR};
use crate::config::loader::{CONTRACT_ADDRESS_ENV_VAR, CONTRACT_HASH_ENV_VAR};
use crate::config::AppConfig;
use crate::token::deployer::Deployer;
use crate::token::instance::{transfer_intent, Erc20Token, GoldcoinInstance};
use crate::token::parse::{parse_address, parse_amount, parse_tx_hash};

/// Facade over the chain backend, the deployer and the token bindings.
pub struct TokenContract {
    backend: Arc<dyn ChainBackend>,
    deployer: Box<dyn Deployer>,
    owner_key: Option<String>,
    contract_address: Option<String>,
    contract_hash: Option<String>,
}

impl TokenContract {
    /// Create a facade with no key or contract configured.
    pub fn new(backend: Arc<dyn ChainBackend>, deployer: Box<dyn Deployer>) -> Self {
        Self {
            backend,
            deployer,
            owner_key: None,
            contract_address: None,
            contract_hash: None,
        }
    }

    /// Create a facade using the key, contract address and hash from `config`.
    pub fn from_config(
        backend: Arc<dyn ChainBackend>,
        deployer: Box<dyn Deployer>,
        config: &AppConfig,
    ) -> Self {
        Self {
            backend,
            deployer,
            owner_key: config.owner_private_key.clone(),
            contract_address: config.contract_address.clone(),
            contract_hash: config.contract_hash.clone(),
        }
    }

    pub fn with_owner_key(mut self, key: impl Into<String>) -> Self {
        self.owner_key = Some(key.into());
        self
    }

    pub fn with_contract_address(mut self, address: impl Into<String>) -> Self {
        self.contract_address = Some(address.into());
        self
    }

    pub fn with_contract_hash(mut self, hash: impl Into<String>) -> Self {
        self.contract_hash = Some(hash.into());
        self
    }

    fn owner_key(&self) -> BlockchainResult<&str> {
        self.owner_key
            .as_deref()
            .ok_or(BlockchainError::NotConfigured(PRIVATE_KEY_ENV_VAR))
    }

    /// Deploy the token contract.
    pub async fn deploy(&self) -> BlockchainResult<Deployment> {
        let intent = CallIntent::create(self.deployer.init_code());
        let ctx = assemble_signer(self.backend.as_ref(), self.owner_key()?, &intent).await?;

        let deployment = self
            .deployer
            .deploy(&ctx, self.backend.as_ref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Unable to deploy contract"))?;

        tracing::info!(
            address = %deployment.address,
            tx_hash = %deployment.tx_hash,
            "Contract deployed"
        );
        Ok(deployment)
    }

    /// Bind the token at the configured contract address.
    pub fn load(&self) -> BlockchainResult<GoldcoinInstance> {
        let address = self
            .contract_address
            .as_deref()
            .ok_or(BlockchainError::NotConfigured(CONTRACT_ADDRESS_ENV_VAR))?;
        let address = parse_address(address)?;

        tracing::info!(address = %address, "Contract is loaded");
        Ok(GoldcoinInstance::new(address, self.backend.clone()))
    }

    /// Resolve `account`, falling back to the owner's address.
    fn account_or_owner(&self, account: Option<&str>) -> BlockchainResult<Address> {
        match account {
            Some(account) if !account.trim().is_empty() => parse_address(account),
            _ => owner_address(self.owner_key()?),
        }
    }

    /// Token symbol and the balance of `account` (the owner when `None`).
    pub async fn read(
        &self,
        token: &dyn Erc20Token,
        account: Option<&str>,
    ) -> BlockchainResult<BalanceQuery> {
        let account = self.account_or_owner(account)?;

        let symbol = token
            .symbol()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Unable to get symbol"))?;
        let balance = token
            .balance_of(account)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Unable to get balance"))?;

        Ok(BalanceQuery { symbol, balance })
    }

    /// Balance of `account` (the owner when `None`).
    pub async fn check_balance(
        &self,
        token: &dyn Erc20Token,
        account: Option<&str>,
    ) -> BlockchainResult<U256> {
        let account = self.account_or_owner(account)?;
        token
            .balance_of(account)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Unable to get balance"))
    }

    /// Name, symbol, decimals and total supply.
    pub async fn info(&self, token: &dyn Erc20Token) -> BlockchainResult<TokenInfo> {
        Ok(TokenInfo {
            name: token.name().await?,
            symbol: token.symbol().await?,
            decimals: token.decimals().await?,
            total_supply: token.total_supply().await?,
        })
    }

    /// Receipt of the transaction configured as the contract hash.
    pub async fn receipt(&self) -> BlockchainResult<TransactionReceipt> {
        let hash = self
            .contract_hash
            .as_deref()
            .ok_or(BlockchainError::NotConfigured(CONTRACT_HASH_ENV_VAR))?;
        self.receipt_for(parse_tx_hash(hash)?).await
    }

    /// Receipt of `tx_hash`; an unknown or pending transaction is an error.
    pub async fn receipt_for(&self, tx_hash: TxHash) -> BlockchainResult<TransactionReceipt> {
        match self.backend.transaction_receipt(tx_hash).await {
            Ok(Some(receipt)) => Ok(receipt),
            Ok(None) => Err(BlockchainError::ReceiptNotFound(tx_hash)),
            Err(e) => {
                tracing::warn!(error = %e, "Receipt not received, contract was not deployed");
                Err(e)
            }
        }
    }

    /// Transfer `amount` tokens from the owner to `to`.
    ///
    /// Arguments are validated before the chain is contacted.
    pub async fn transfer_tokens(
        &self,
        token: &dyn Erc20Token,
        to: &str,
        amount: &str,
    ) -> BlockchainResult<TxHash> {
        let amount = parse_amount(amount)?;
        let to = parse_address(to)?;
        let key = self.owner_key()?;

        let intent = transfer_intent(token.address(), to, amount);
        let ctx = assemble_signer(self.backend.as_ref(), key, &intent).await?;

        token.transfer(&ctx, to, amount).await
    }
}

impl std::fmt::Debug for TokenContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenContract")
            .field("owner_key", &self.owner_key.as_ref().map(|_| "<redacted>"))
            .field("contract_address", &self.contract_address)
            .field("contract_hash", &self.contract_hash)
            .finish()
    }
}
