use crate::utils::nft_utils::NADS_CONTRACT_ADDRESS;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_INSIGHT_BASE_URL: &str = "https://insight.thirdweb.com/v1";
/// Monad testnet.
pub const DEFAULT_CHAIN_ID: &str = "10143";
pub const DEFAULT_PAGE_LIMIT: u32 = 100;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub rust_log: String,
    /// Value expected in the `X-API-Key` header. Every request is rejected when unset.
    pub protection_api_key: Option<String>,
    pub thirdweb_client_id: Option<String>,
    pub insight_base_url: String,
    pub chain_id: String,
    pub page_limit: u32,
    pub request_timeout_secs: u64,
    /// Contract whose NFTs make an address a "1 Million Nads" holder.
    pub nad_contract_address: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            protection_api_key: None,
            thirdweb_client_id: None,
            insight_base_url: DEFAULT_INSIGHT_BASE_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            nad_contract_address: NADS_CONTRACT_ADDRESS.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from defaults, an optional YAML file, then the environment
    /// (`PROTECTION_API_KEY`, `THIRDWEB_CLIENT_ID`, `PORT`, ...), later sources winning.
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, Environment::default())
    }

    fn load_with_env(config_path: Option<&str>, env: Environment) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let mut builder = Config::builder()
            .set_default("port", i64::from(defaults.port))?
            .set_default("rust_log", defaults.rust_log)?
            .set_default("insight_base_url", defaults.insight_base_url)?
            .set_default("chain_id", defaults.chain_id)?
            .set_default("page_limit", i64::from(defaults.page_limit))?
            .set_default("request_timeout_secs", defaults.request_timeout_secs as i64)?
            .set_default("nad_contract_address", defaults.nad_contract_address)?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::new(path, FileFormat::Yaml));
        }

        let settings = builder.add_source(env).build()?;
        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn isolated_env() -> Environment {
        Environment::with_prefix("NADS_TOKEN_API_TEST_UNSET")
    }

    #[test]
    fn test_load_defaults() {
        let config = AppConfig::load_with_env(None, isolated_env()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(config.page_limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(config.nad_contract_address, NADS_CONTRACT_ADDRESS);
        assert!(config.protection_api_key.is_none());
        assert!(config.thirdweb_client_id.is_none());
    }

    #[test]
    fn test_load_from_yaml_file() {
        let path = std::env::temp_dir().join(format!(
            "nads-token-api-config-{}.yaml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "port: 9090\nprotection_api_key: secret\nthirdweb_client_id: client\nchain_id: \"1\"\npage_limit: 50"
        )
        .unwrap();

        let config = AppConfig::load_with_env(path.to_str(), isolated_env()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.port, 9090);
        assert_eq!(config.protection_api_key.as_deref(), Some("secret"));
        assert_eq!(config.thirdweb_client_id.as_deref(), Some("client"));
        assert_eq!(config.chain_id, "1");
        assert_eq!(config.page_limit, 50);
        assert_eq!(config.insight_base_url, DEFAULT_INSIGHT_BASE_URL);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = AppConfig::load_with_env(Some("/nonexistent/nads.yaml"), isolated_env());
        assert!(result.is_err());
    }
}
