//! Configuration loading from disk and the environment.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const CLIENT_URL_ENV_VAR: &str = "CLIENT_URL";
pub const CONTRACT_ADDRESS_ENV_VAR: &str = "CONTRACT_ADDRESS";
pub const CONTRACT_HASH_ENV_VAR: &str = "CONTRACT_HASH";
pub const RPC_TIMEOUT_ENV_VAR: &str = "RPC_TIMEOUT_SECS";
pub const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";
pub use crate::blockchain::wallet::PRIVATE_KEY_ENV_VAR;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { var: &'static str, message: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { var, message } => write!(f, "Invalid {}: {}", var, message),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load `.env` from the working directory (or a parent) into the process
/// environment. Variables already set are left alone.
///
/// Returns the path that was loaded, or `None` if there was no usable file.
pub fn load_env_file() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}

/// Read a TOML configuration file without validating it.
pub fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Overlay environment variables onto `config`.
///
/// `lookup` abstracts the environment so callers can supply their own map.
/// Empty values count as unset.
pub fn apply_env<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(CLIENT_URL_ENV_VAR) {
        config.client_url = url;
    }
    if let Some(key) = get(PRIVATE_KEY_ENV_VAR) {
        config.owner_private_key = Some(key);
    }
    if let Some(address) = get(CONTRACT_ADDRESS_ENV_VAR) {
        config.contract_address = Some(address);
    }
    if let Some(hash) = get(CONTRACT_HASH_ENV_VAR) {
        config.contract_hash = Some(hash);
    }
    if let Some(secs) = get(RPC_TIMEOUT_ENV_VAR) {
        config.rpc_timeout_secs = secs.trim().parse().map_err(|e| ConfigError::Env {
            var: RPC_TIMEOUT_ENV_VAR,
            message: format!("{}", e),
        })?;
    }
    if let Some(level) = get(LOG_LEVEL_ENV_VAR) {
        config.log_level = level;
    }

    Ok(())
}

/// Build the effective configuration: defaults, then the optional TOML file,
/// then the process environment. The result is validated.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with(path, |name| std::env::var(name).ok())
}

/// [`load_config`] with the environment supplied by `lookup`.
pub fn load_config_with<F>(path: Option<&Path>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => AppConfig::default(),
    };

    apply_env(&mut config, lookup)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_env_overrides_defaults() {
        let mut config = AppConfig::default();
        apply_env(
            &mut config,
            lookup(&[
                ("CLIENT_URL", "https://eth.bd.evmos.dev:8545"),
                ("OWNER_PRIVATEKEY", "b71c71a67e1177ad4e901695e1b4b9ee17ae16c6668d313eac2f96dbcda3f291"),
                ("CONTRACT_ADDRESS", "0xdB7d6AB1f17c6b31909aE466702703dAEf9269Cf"),
                ("RPC_TIMEOUT_SECS", "25"),
            ]),
        )
        .unwrap();

        assert_eq!(config.client_url, "https://eth.bd.evmos.dev:8545");
        assert!(config.owner_private_key.is_some());
        assert_eq!(
            config.contract_address.as_deref(),
            Some("0xdB7d6AB1f17c6b31909aE466702703dAEf9269Cf")
        );
        assert!(config.contract_hash.is_none());
        assert_eq!(config.rpc_timeout_secs, 25);
    }

    #[test]
    fn test_empty_env_value_is_unset() {
        let mut config = AppConfig::default();
        apply_env(&mut config, lookup(&[("CLIENT_URL", ""), ("CONTRACT_HASH", "  ")])).unwrap();
        assert_eq!(config.client_url, AppConfig::default().client_url);
        assert!(config.contract_hash.is_none());
    }

    #[test]
    fn test_bad_timeout_env() {
        let mut config = AppConfig::default();
        let err = apply_env(&mut config, lookup(&[("RPC_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("RPC_TIMEOUT_SECS"));
    }

    #[test]
    fn test_read_config_file() {
        let path = std::env::temp_dir().join(format!("goldcoin_cli_{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "client_url = \"http://127.0.0.1:8545\"").unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.client_url, "http://127.0.0.1:8545");
        assert_eq!(config.log_level, "debug");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_env_overrides_config_file() {
        let path = std::env::temp_dir().join(format!(
            "goldcoin_cli_layers_{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "client_url = \"http://127.0.0.1:8545\"").unwrap();
        writeln!(file, "rpc_timeout_secs = 30").unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let config = load_config_with(
            Some(&path),
            lookup(&[("CLIENT_URL", "https://rpc.example.org"), ("LOG_LEVEL", "trace")]),
        )
        .unwrap();
        let _ = std::fs::remove_file(&path);

        // Environment wins over the file; the file wins over defaults.
        assert_eq!(config.client_url, "https://rpc.example.org");
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.rpc_timeout_secs, 30);
    }

    #[test]
    fn test_unused_operation_settings_do_not_block_loading() {
        let config = load_config_with(
            None,
            lookup(&[
                ("OWNER_PRIVATEKEY", "invalid_key"),
                ("CONTRACT_ADDRESS", "0xYourDeployedTokenHere"),
                (
                    "CONTRACT_HASH",
                    "0x3a33a98d6eb8d2b0e2a0fd1f4cf9d071992cbb0cc4e0e9887711dde505259e9b",
                ),
            ]),
        )
        .unwrap();

        assert_eq!(config.owner_private_key.as_deref(), Some("invalid_key"));
        assert_eq!(
            config.contract_address.as_deref(),
            Some("0xYourDeployedTokenHere")
        );
    }

    #[test]
    fn test_load_rejects_shared_settings() {
        let err = load_config_with(None, lookup(&[("CLIENT_URL", "ws://localhost:8546")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_missing_config_file() {
        let err = read_config_file(Path::new("/nonexistent/goldcoin.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec![
            ValidationError {
                field: "client_url",
                message: "bad".into(),
            },
            ValidationError {
                field: "rpc_timeout_secs",
                message: "must be greater than 0".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: client_url: bad, rpc_timeout_secs: must be greater than 0"
        );
    }
}
