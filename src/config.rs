use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub profile_store: ProfileStoreSettings,
    pub collection: CollectionSettings,
    pub cache: CacheSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileStoreSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    pub profiles: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub redis_url: String,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u8>,
    pub max_limit: Option<u8>,
    pub candidate_pool_size: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Per-factor weight overrides. Defaults sum to 1.0.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_fit_weight")]
    pub skill_fit: f64,
    #[serde(default = "default_value_alignment_weight")]
    pub value_alignment: f64,
    #[serde(default = "default_goal_alignment_weight")]
    pub goal_alignment: f64,
    #[serde(default = "default_experience_fit_weight")]
    pub experience_fit: f64,
    #[serde(default = "default_availability_weight")]
    pub availability_match: f64,
    #[serde(default = "default_location_weight")]
    pub location_compatibility: f64,
    #[serde(default = "default_communication_weight")]
    pub communication_style: f64,
    #[serde(default = "default_startup_status_weight")]
    pub startup_status: f64,
    #[serde(default = "default_timing_weight")]
    pub timing: f64,
    #[serde(default = "default_responsibility_weight")]
    pub responsibility: f64,
    #[serde(default = "default_preference_weight")]
    pub preference: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill_fit: default_skill_fit_weight(),
            value_alignment: default_value_alignment_weight(),
            goal_alignment: default_goal_alignment_weight(),
            experience_fit: default_experience_fit_weight(),
            availability_match: default_availability_weight(),
            location_compatibility: default_location_weight(),
            communication_style: default_communication_weight(),
            startup_status: default_startup_status_weight(),
            timing: default_timing_weight(),
            responsibility: default_responsibility_weight(),
            preference: default_preference_weight(),
        }
    }
}

fn default_skill_fit_weight() -> f64 { 0.20 }
fn default_value_alignment_weight() -> f64 { 0.15 }
fn default_goal_alignment_weight() -> f64 { 0.15 }
fn default_experience_fit_weight() -> f64 { 0.12 }
fn default_availability_weight() -> f64 { 0.08 }
fn default_location_weight() -> f64 { 0.05 }
fn default_communication_weight() -> f64 { 0.05 }
fn default_startup_status_weight() -> f64 { 0.10 }
fn default_timing_weight() -> f64 { 0.05 }
fn default_responsibility_weight() -> f64 { 0.03 }
fn default_preference_weight() -> f64 { 0.02 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with COFOUNDR_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with COFOUNDR_)
            // e.g., COFOUNDR_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("COFOUNDR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Substitute environment variables in string values
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("COFOUNDR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Override profile-store credentials from plain environment variables, so
/// deployments can inject secrets without the config-file prefix scheme
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let store_endpoint = env::var("COFOUNDR_PROFILE_STORE__ENDPOINT").ok();
    let store_api_key = env::var("COFOUNDR_PROFILE_STORE__API_KEY").ok();
    let store_project_id = env::var("COFOUNDR_PROFILE_STORE__PROJECT_ID").ok();
    let store_database_id = env::var("COFOUNDR_PROFILE_STORE__DATABASE_ID").ok();

    let redis_url = env::var("REDIS_URL")
        .or_else(|_| env::var("COFOUNDR_CACHE__REDIS_URL"))
        .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

    let mut builder = Config::builder()
        .add_source(settings)
        .set_override("cache.redis_url", redis_url)?;

    if let Some(endpoint) = store_endpoint {
        builder = builder.set_override("profile_store.endpoint", endpoint)?;
    }
    if let Some(api_key) = store_api_key {
        builder = builder.set_override("profile_store.api_key", api_key)?;
    }
    if let Some(project_id) = store_project_id {
        builder = builder.set_override("profile_store.project_id", project_id)?;
    }
    if let Some(database_id) = store_database_id {
        builder = builder.set_override("profile_store.database_id", database_id)?;
    }

    builder.build()
}
