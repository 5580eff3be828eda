// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use config::{Config, RunnerSettings};
use noah::{Endpoint, HttpTransport, NoahClient};
use serde_json::Value;
use std::{env, path::PathBuf};
use tracing::{error, info, instrument, warn};

const DEFAULT_CONFIG_PATH: &str = "noah.toml";

pub struct EndpointRunner {
  client: NoahClient<HttpTransport>,
  endpoints: Vec<Endpoint>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
  pub succeeded: usize,
  pub failed: usize,
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  setup_logging();

  let config = load_config()?;
  let client = NoahClient::builder()
    .from_config(&config.client)
    .build()
    .context("Failed to build NOAH client")?;

  let summary = EndpointRunner::new(client, &config.runner).run().await;
  info!(
    "Finished: {} succeeded, {} failed",
    summary.succeeded, summary.failed
  );

  if summary.succeeded == 0 {
    error!("Every NOAH endpoint failed");
    std::process::exit(1);
  }

  Ok(())
}

fn load_config() -> Result<Config> {
  match env::args().nth(1).map(PathBuf::from) {
    Some(path) => Config::from_file(&path)
      .with_context(|| format!("Failed to load config from {}", path.display())),
    None if PathBuf::from(DEFAULT_CONFIG_PATH).exists() => {
      Config::from_file(DEFAULT_CONFIG_PATH).context("Failed to load noah.toml")
    }
    None => Ok(Config::default()),
  }
}

impl EndpointRunner {
  pub fn new(client: NoahClient<HttpTransport>, settings: &RunnerSettings) -> Self {
    let endpoints = vec![
      Endpoint::Doppler,
      Endpoint::station(settings.station_type, settings.station_id),
      Endpoint::Stations,
      Endpoint::FloodMaps,
      Endpoint::flood_report(settings.flood_report_year),
      Endpoint::LandslideMaps,
      Endpoint::StormSurgeMaps,
      Endpoint::FourHourForecast,
      Endpoint::seven_day_forecast(settings.seven_day_location_id),
      Endpoint::LatestContour,
      Endpoint::MtSat,
    ];

    Self { client, endpoints }
  }

  #[instrument(skip(self))]
  pub async fn run(&self) -> RunSummary {
    let mut summary = RunSummary::default();

    for endpoint in &self.endpoints {
      match self.client.fetch(endpoint).await {
        Ok(payload) => {
          info!("{:<28} {}", endpoint.to_string(), describe(&payload));
          summary.succeeded += 1;
        }
        Err(e) => {
          warn!("{:<28} failed: {}", endpoint.to_string(), e);
          summary.failed += 1;
        }
      }
    }

    summary
  }
}

fn describe(payload: &Value) -> String {
  match payload {
    Value::Null => "empty".to_string(),
    Value::Object(map) => format!("object with {} keys", map.len()),
    Value::Array(items) => format!("array of {} items", items.len()),
    Value::String(_) => "string".to_string(),
    Value::Number(n) => format!("number {}", n),
    Value::Bool(b) => format!("bool {}", b),
  }
}
