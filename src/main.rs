use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use goldcoin_cli::blockchain::RpcClient;
use goldcoin_cli::cli::{run, Cli};
use goldcoin_cli::config::{load_config, loader::load_env_file};
use goldcoin_cli::observability::init_logging;
use goldcoin_cli::token::{GoldcoinDeployer, TokenContract};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env must be in the process environment before the config is built
    let env_file = load_env_file();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            tracing::error!(error = %e, "Error loading configuration");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log_level);

    match env_file {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        None => tracing::warn!("No .env file found, using process environment"),
    }

    let action = match cli.action() {
        Ok(action) => action,
        Err(e) => {
            tracing::error!(error = %e, "Invalid arguments");
            return ExitCode::FAILURE;
        }
    };

    let client = match RpcClient::new(&config.client_url, config.rpc_timeout_secs) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Client connection failed");
            return ExitCode::FAILURE;
        }
    };

    let contract = TokenContract::from_config(Arc::new(client), Box::new(GoldcoinDeployer), &config);

    match run(action, &contract).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Operation failed");
            ExitCode::FAILURE
        }
    }
}
