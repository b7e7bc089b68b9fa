use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;
use truco_bot::{BotParams, ParamsError, PolicyKind};

/// Advisor configuration loaded from YAML. Every block is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub policy: PolicyKind,
    #[serde(default)]
    pub params: BotParams,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AdvisorConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: AdvisorConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.params.validate()?;
        self.logging.normalize();
        if self.logging.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.level".to_string(),
                message: format!("unknown level '{}'", self.logging.level),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            file: None,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.level.trim().is_empty() {
            self.level = default_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
    #[error("params: {0}")]
    Params(#[from] ParamsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_YAML: &str = r#"
policy: cautious
params:
  good_hand: 90
logging:
  level: "debug"
  json: true
"#;

    #[test]
    fn loads_full_config_with_param_defaults() {
        let mut cfg: AdvisorConfig = serde_yaml::from_str(FULL_YAML).expect("parse yaml");
        cfg.validate().expect("validate");
        assert_eq!(cfg.policy, PolicyKind::Cautious);
        assert_eq!(cfg.params.good_hand, 90);
        assert_eq!(cfg.params.bad_hand, BotParams::default().bad_hand);
        assert_eq!(cfg.logging.level(), Some(Level::DEBUG));
        assert!(cfg.logging.json);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let mut cfg: AdvisorConfig = serde_yaml::from_str("{}").expect("parse yaml");
        cfg.validate().expect("validate");
        assert_eq!(cfg, AdvisorConfig::default());
    }

    #[test]
    fn rejects_unordered_thresholds() {
        let yaml = "params:\n  bad_hand: 70\n  average_hand: 60\n";
        let mut cfg: AdvisorConfig = serde_yaml::from_str(yaml).expect("parse yaml");
        let err = cfg.validate().expect_err("thresholds out of order");
        assert!(matches!(err, ValidationError::Params(_)));
    }

    #[test]
    fn rejects_unknown_level() {
        let mut cfg = AdvisorConfig::default();
        cfg.logging.level = "chatty".to_string();
        let err = cfg.validate().expect_err("bad level");
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AdvisorConfig::from_path("does/not/exist.yaml").expect_err("missing");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("exist.yaml"));
    }
}
