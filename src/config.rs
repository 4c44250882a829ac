use crate::core::ranking::DEFAULT_LIMIT;
use crate::models::RankingWeights;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "SLEEPMITRA";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

fn default_max_sessions() -> u64 { 10_000 }
fn default_idle_timeout_secs() -> u64 { 3600 }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default)]
    pub weights: WeightsConfig,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            weights: WeightsConfig::default(),
        }
    }
}

fn default_limit() -> usize { DEFAULT_LIMIT }
fn default_max_limit() -> usize { 10 }

/// Overridable ranking bonuses; severity bonuses stay fixed
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_language_weight")]
    pub language: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_experience_weight")]
    pub experience_per_year: f64,
    #[serde(default = "default_patient_cap")]
    pub patient_cap: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            rating: default_rating_weight(),
            language: default_language_weight(),
            location: default_location_weight(),
            experience_per_year: default_experience_weight(),
            patient_cap: default_patient_cap(),
        }
    }
}

impl WeightsConfig {
    pub fn to_ranking_weights(&self) -> RankingWeights {
        RankingWeights {
            rating: self.rating,
            language: self.language,
            location: self.location,
            experience_per_year: self.experience_per_year,
            patient_cap: self.patient_cap,
            ..RankingWeights::default()
        }
    }
}

fn default_rating_weight() -> f64 { 10.0 }
fn default_language_weight() -> f64 { 20.0 }
fn default_location_weight() -> f64 { 15.0 }
fn default_experience_weight() -> f64 { 2.0 }
fn default_patient_cap() -> f64 { 20.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SLEEPMITRA__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SLEEPMITRA__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.rating, 10.0);
        assert_eq!(weights.language, 20.0);
        assert_eq!(weights.location, 15.0);
        assert_eq!(weights.experience_per_year, 2.0);
        assert_eq!(weights.patient_cap, 20.0);
    }

    #[test]
    fn test_weights_keep_severity_bonuses() {
        let config = WeightsConfig {
            language: 30.0,
            ..Default::default()
        };
        let weights = config.to_ranking_weights();

        assert_eq!(weights.language, 30.0);
        assert_eq!(weights.severe_cbti, RankingWeights::default().severe_cbti);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("sleepmitra-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nhost = \"0.0.0.0\"\nport = 9090\n\n[ranking]\nmax_limit = 5\n\n[ranking.weights]\nlocation = 25.0"
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.ranking.max_limit, 5);
        assert_eq!(settings.ranking.default_limit, 3);
        assert_eq!(settings.ranking.weights.location, 25.0);
        assert_eq!(settings.ranking.weights.rating, 10.0);
        assert_eq!(settings.session.idle_timeout_secs, 3600);
    }
}
