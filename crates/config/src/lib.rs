//! Configuration models and loaders for the VNAV calculator.
//!
//! A request file describes exactly one calculation. The `type` key selects the
//! calculator; the remaining keys are the input record fields.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use vnav_validation::{ThreeToOneRuleInput, VerticalRateInput};

/// One calculation parsed from a request file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    #[serde(rename = "vertical_rate")]
    VerticalRate(VerticalRateInput),
    #[serde(rename = "three_to_one")]
    ThreeToOne(ThreeToOneRuleInput),
}

impl CalculationRequest {
    /// Short name matching the `type` key.
    pub fn kind(&self) -> &'static str {
        match self {
            CalculationRequest::VerticalRate(_) => "vertical_rate",
            CalculationRequest::ThreeToOne(_) => "three_to_one",
        }
    }
}

/// Supported request file syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Toml,
    Yaml,
}

impl RequestFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(RequestFormat::Toml),
            Some("yaml") | Some("yml") => Some(RequestFormat::Yaml),
            _ => None,
        }
    }
}

/// Errors that can occur while loading request files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read request file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported request file extension: {0}")]
    UnsupportedFormat(String),
}

/// Load a single calculation request from a `.toml`, `.yaml` or `.yml` file.
///
/// Values are not validated here; the calculators do that.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<CalculationRequest, ConfigError> {
    let path = path.as_ref();
    let format = RequestFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
    let contents = std::fs::read_to_string(path)?;
    let request = parse_request(&contents, format)?;
    debug!(path = %path.display(), kind = request.kind(), "loaded request file");
    Ok(request)
}

/// Parse a request from an in-memory document.
pub fn parse_request(
    contents: &str,
    format: RequestFormat,
) -> Result<CalculationRequest, ConfigError> {
    match format {
        RequestFormat::Toml => Ok(toml::from_str(contents)?),
        RequestFormat::Yaml => Ok(serde_yaml::from_str(contents)?),
    }
}
