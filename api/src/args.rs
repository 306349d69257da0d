use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use nutrilens_core::domain::common::{
    HistoryStoreConfig, LLMConfig, NutrilensConfig, ProductSourcesConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrilens", about = "NutriLens dietary compatibility API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub providers: ProviderArgs,

    #[command(flatten)]
    pub history: HistoryArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8081,http://localhost:19006"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-2.5-flash-lite"
    )]
    pub gemini_model: String,

    /// Seconds before an analysis stops waiting for the model.
    #[arg(id = "llm_timeout_secs", long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ProviderArgs {
    #[arg(
        long = "open-food-facts-url",
        env = "OPEN_FOOD_FACTS_URL",
        default_value = "https://world.openfoodfacts.org"
    )]
    pub open_food_facts_url: String,

    #[arg(
        long = "nutritionix-url",
        env = "NUTRITIONIX_URL",
        default_value = "https://trackapi.nutritionix.com"
    )]
    pub nutritionix_url: String,

    #[arg(long = "nutritionix-app-id", env = "NUTRITIONIX_APP_ID")]
    pub nutritionix_app_id: Option<String>,

    #[arg(long = "nutritionix-app-key", env = "NUTRITIONIX_APP_KEY")]
    pub nutritionix_app_key: Option<String>,

    #[arg(long = "usda-url", env = "USDA_URL", default_value = "https://api.nal.usda.gov")]
    pub usda_url: String,

    #[arg(long = "usda-api-key", env = "USDA_API_KEY")]
    pub usda_api_key: Option<String>,

    #[arg(
        id = "provider_timeout_secs",
        long = "provider-timeout-secs",
        env = "PROVIDER_TIMEOUT_SECS",
        default_value_t = 10
    )]
    pub timeout_secs: u64,

    #[arg(
        long = "provider-user-agent",
        env = "PROVIDER_USER_AGENT",
        default_value = "NutriLens/1.0 (https://nutrilens.app)"
    )]
    pub user_agent: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct HistoryArgs {
    #[arg(
        long = "history-store-url",
        env = "HISTORY_STORE_URL",
        default_value = "http://localhost:5001"
    )]
    pub base_url: String,

    #[arg(
        id = "history_timeout_secs",
        long = "history-timeout-secs",
        env = "HISTORY_TIMEOUT_SECS",
        default_value_t = 5
    )]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Default directives when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl LogArgs {
    pub fn format(&self) -> LogFormat {
        if self.json {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<Args> for NutrilensConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: non_blank(args.llm.gemini_api_key),
                gemini_model: args.llm.gemini_model,
                timeout: Duration::from_secs(args.llm.timeout_secs),
            },
            product_sources: ProductSourcesConfig {
                open_food_facts_url: args.providers.open_food_facts_url,
                nutritionix_url: args.providers.nutritionix_url,
                nutritionix_app_id: non_blank(args.providers.nutritionix_app_id),
                nutritionix_app_key: non_blank(args.providers.nutritionix_app_key),
                usda_url: args.providers.usda_url,
                usda_api_key: non_blank(args.providers.usda_api_key),
                request_timeout: Duration::from_secs(args.providers.timeout_secs),
                user_agent: args.providers.user_agent,
            },
            history_store: HistoryStoreConfig {
                base_url: args.history.base_url,
                request_timeout: Duration::from_secs(args.history.timeout_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from([
            "nutrilens",
            "--gemini-api-key",
            "",
            "--usda-api-key",
            "DEMO_KEY",
        ])
        .unwrap();
        assert_eq!(args.server.port, 3333);
        assert_eq!(args.llm.gemini_model, "gemini-2.5-flash-lite");

        let config = NutrilensConfig::from(args);
        assert!(config.llm.gemini_api_key.is_none());
        assert_eq!(config.llm.timeout, Duration::from_secs(15));
        assert_eq!(config.product_sources.usda_api_key.as_deref(), Some("DEMO_KEY"));
        assert_eq!(
            config.product_sources.request_timeout,
            Duration::from_secs(10)
        );
    }

    #[test]
    fn test_allowed_origins_are_split() {
        let args = Args::try_parse_from([
            "nutrilens",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();
        assert_eq!(args.server.allowed_origins, vec!["http://a.test", "http://b.test"]);
    }
}
