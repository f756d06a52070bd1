use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub ratings_path: String,
    pub recipes_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedbackConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecommendConfig {
    /// Result count used when a request does not specify one
    #[serde(default = "default_result_count")]
    pub default_count: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_count: default_result_count(),
        }
    }
}

fn default_result_count() -> usize {
    smartrecipe_recommend::DEFAULT_RESULT_COUNT
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SMARTRECIPE__CATALOG__RATINGS_PATH, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("catalog.ratings_path", "data/ratings.csv")?
            .set_default("catalog.recipes_path", "data/recipes.csv")?
            .set_default("feedback.path", "data/feedback.csv")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SMARTRECIPE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.catalog.ratings_path.trim().is_empty() {
            return Err("Catalog ratings_path must not be empty".to_string());
        }
        if self.catalog.recipes_path.trim().is_empty() {
            return Err("Catalog recipes_path must not be empty".to_string());
        }
        if self.feedback.path.trim().is_empty() {
            return Err("Feedback path must not be empty".to_string());
        }
        if self.recommend.default_count == 0 {
            return Err("Recommend default_count must be at least 1".to_string());
        }
        Ok(())
    }
}
