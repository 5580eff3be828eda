// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::instrument;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub client: ClientSettings,
  pub runner: RunnerSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
  /// Request timeout in seconds; `0` disables it.
  pub timeout_secs: u64,
}

/// Parameters the runner passes to the parameterized endpoints. Unset values
/// fall back to the client's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
  pub station_type: Option<u32>,
  pub station_id: Option<u32>,
  pub flood_report_year: Option<u32>,
  pub seven_day_location_id: Option<u32>,
}

impl Default for ClientSettings {
  fn default() -> Self {
    Self {
      timeout_secs: DEFAULT_TIMEOUT_SECS,
    }
  }
}

impl ClientSettings {
  pub fn timeout(&self) -> Option<Duration> {
    match self.timeout_secs {
      0 => None,
      secs => Some(Duration::from_secs(secs)),
    }
  }
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    let content = fs::read_to_string(path)?;
    let config = Self::parse(&content)?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }

  pub fn parse(content: &str) -> Result<Self, Error> {
    toml::from_str(content).map_err(|e| Error::ConfigError(e.to_string()))
  }
}
