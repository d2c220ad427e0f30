use crate::model::model_config::ModelConfig;
use crate::species_classifier::threshold::{ConfidenceThreshold, InvalidThreshold};
use chrono::Offset;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_PREFIX: &str = "FISH_DETECT_";
pub const DEFAULT_CLASS_LIST: &str = "model/class_list.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Console,
    Tracing,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(LogFormat::Console),
            "tracing" => Ok(LogFormat::Tracing),
            other => Err(format!("unknown log format {:?}", other)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
    #[error(transparent)]
    Threshold(#[from] InvalidThreshold),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub model: ModelConfig,
    pub class_list_path: Option<PathBuf>,
    pub confidence_threshold: ConfidenceThreshold,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub log_format: LogFormat,
    pub logger_timezone: chrono::FixedOffset,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 5000)),
            model: ModelConfig::default(),
            class_list_path: Some(PathBuf::from(DEFAULT_CLASS_LIST)),
            confidence_threshold: ConfidenceThreshold::DEFAULT,
            upload_dir: PathBuf::from("static/uploads"),
            static_dir: PathBuf::from("static"),
            max_upload_bytes: 16 * 1024 * 1024,
            log_format: LogFormat::Tracing,
            logger_timezone: utc(),
            verbose: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Overlays `FISH_DETECT_*` values from `lookup` onto the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(value) = get("BIND") {
            config.bind_address = parse("BIND", &value)?;
        }
        if let Some(value) = get("MODEL_PATH") {
            config.model.onnx_model_path = PathBuf::from(value);
        }
        if let Some(value) = get("MODEL_BACKEND") {
            config.model.backend = parse("MODEL_BACKEND", &value)?;
        }
        if let Some(value) = get("TENSOR_LAYOUT") {
            config.model.layout = parse("TENSOR_LAYOUT", &value)?;
        }
        if let Some(value) = get("CLASS_LIST") {
            config.class_list_path =
                Some(PathBuf::from(value)).filter(|p| !p.as_os_str().is_empty());
        }
        if let Some(value) = get("CONFIDENCE_THRESHOLD") {
            config.confidence_threshold =
                ConfidenceThreshold::new(parse("CONFIDENCE_THRESHOLD", &value)?)?;
        }
        if let Some(value) = get("UPLOAD_DIR") {
            config.upload_dir = PathBuf::from(value);
        }
        if let Some(value) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(value);
        }
        if let Some(value) = get("MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = parse("MAX_UPLOAD_BYTES", &value)?;
        }
        if let Some(value) = get("LOG_FORMAT") {
            config.log_format = parse("LOG_FORMAT", &value)?;
        }
        if let Some(value) = get("VERBOSE") {
            config.verbose = parse("VERBOSE", &value)?;
        }

        Ok(config)
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: format!("{}{}", ENV_PREFIX, key),
        reason: e.to_string(),
    })
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
