use crate::models::ScoringWeights;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub lexicon: LexiconSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Threshold used when a request asks for recommended jobs only
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    /// Unfiltered jobs returned when nothing reaches the threshold
    #[serde(default = "default_fallback_count")]
    pub fallback_count: usize,
    /// Results returned when the request gives no limit
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Upper bound on any requested limit
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            fallback_count: default_fallback_count(),
            max_results: default_max_results(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_min_score() -> u8 { 40 }
fn default_fallback_count() -> usize { 5 }
fn default_max_results() -> usize { 10 }
fn default_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_education_weight")]
    pub education: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            experience: default_experience_weight(),
            education: default_education_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(w: &WeightsConfig) -> Self {
        ScoringWeights {
            skills: w.skills,
            experience: w.experience,
            education: w.education,
        }
    }
}

fn default_skills_weight() -> f64 { 60.0 }
fn default_experience_weight() -> f64 { 25.0 }
fn default_education_weight() -> f64 { 15.0 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconSettings {
    /// TOML skill lexicon replacing the built-in one
    pub path: Option<String>,
}

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
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with CAREER_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CAREER__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would break the 0-100 score range or empty results
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.scoring.weights;
        if [w.skills, w.experience, w.education].iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::Message(
                "scoring weights must be finite and non-negative".to_string(),
            ));
        }
        let total = w.skills + w.experience + w.education;
        if (total - 100.0).abs() > 1e-6 {
            return Err(ConfigError::Message(format!(
                "scoring weights must sum to 100, got {}",
                total
            )));
        }
        if self.matching.min_score > 100 {
            return Err(ConfigError::Message(format!(
                "matching.min_score must be at most 100, got {}",
                self.matching.min_score
            )));
        }
        if self.matching.max_results == 0 || self.matching.max_limit == 0 {
            return Err(ConfigError::Message(
                "matching.max_results and matching.max_limit must be positive".to_string(),
            ));
        }
        if self.matching.max_results > self.matching.max_limit {
            return Err(ConfigError::Message(format!(
                "matching.max_results ({}) must not exceed matching.max_limit ({})",
                self.matching.max_results, self.matching.max_limit
            )));
        }
        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("CAREER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
