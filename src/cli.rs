//! Command-line interface.
//!
//! Flags select exactly one operation; positional arguments carry its
//! inputs (`--transact <amount> <address>`, `--balanceOf [address]`).

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::token::TokenContract;

#[derive(Parser, Debug)]
#[command(name = "goldcoin-cli")]
#[command(about = "Deploy and interact with the Goldcoin ERC-20 token", long_about = None)]
#[command(group(
    ArgGroup::new("operation")
        .args(["deploy", "reciept", "transact", "balance_of", "info"])
        .multiple(false)
))]
pub struct Cli {
    /// Deploy smart contract
    #[arg(short = 'd', long = "deploy")]
    pub deploy: bool,

    /// Check if smart contract is deployed
    #[arg(short = 'r', long = "reciept")]
    pub reciept: bool,

    /// Transfer tokens from the owner to another address: <amount> <address>
    #[arg(short = 't', long = "transact")]
    pub transact: bool,

    /// Check balance of given address (owner if omitted)
    #[arg(short = 'b', long = "balanceOf")]
    pub balance_of: bool,

    /// Show token name, symbol, decimals and total supply
    #[arg(short = 'i', long = "info")]
    pub info: bool,

    /// Optional TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Operation arguments
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Operation selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Deploy,
    Receipt,
    Transfer { amount: String, to: String },
    Balance { account: Option<String> },
    Info,
    Nothing,
}

impl Cli {
    /// Resolve flags and positional arguments into an [`Action`].
    pub fn action(&self) -> BlockchainResult<Action> {
        if self.deploy {
            Ok(Action::Deploy)
        } else if self.reciept {
            Ok(Action::Receipt)
        } else if self.transact {
            match self.args.as_slice() {
                [amount, to, ..] => Ok(Action::Transfer {
                    amount: amount.clone(),
                    to: to.clone(),
                }),
                _ => Err(BlockchainError::Validation(
                    "need more arguments, in the format: --transact <amount> <address>".to_string(),
                )),
            }
        } else if self.balance_of {
            Ok(Action::Balance {
                account: self.args.first().cloned(),
            })
        } else if self.info {
            Ok(Action::Info)
        } else {
            Ok(Action::Nothing)
        }
    }
}

/// Execute `action` and print its result to stdout.
pub async fn run(action: Action, contract: &TokenContract) -> BlockchainResult<()> {
    match action {
        Action::Deploy => {
            let deployment = contract.deploy().await?;
            println!("Address: {}", deployment.address);
            println!("TXHash: {}", deployment.tx_hash);
        }
        Action::Receipt => {
            let receipt = contract.receipt().await?;
            let rendered = serde_json::to_string_pretty(&receipt)
                .map_err(|e| BlockchainError::ContractCall(format!("receipt encoding: {}", e)))?;
            println!("Reciept: {}", rendered);
        }
        Action::Transfer { amount, to } => {
            let token = contract.load()?;
            let tx_hash = contract.transfer_tokens(&token, &to, &amount).await?;
            println!("TXHash: {}", tx_hash);
        }
        Action::Balance { account } => {
            let token = contract.load()?;
            let balance = contract.check_balance(&token, account.as_deref()).await?;
            println!("Balance: {}", balance);
        }
        Action::Info => {
            let token = contract.load()?;
            let info = contract.info(&token).await?;
            println!("Name: {}", info.name);
            println!("Symbol: {}", info.symbol);
            println!("Decimals: {}", info.decimals);
            println!("Total supply: {}", info.total_supply);
        }
        Action::Nothing => {
            tracing::warn!("No operation selected; see --help");
        }
    }
    Ok(())
}
