// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod builders;
pub mod client;
pub mod endpoint;
pub mod payload;
pub mod transport;

pub use builders::NoahClientBuilder;
pub use client::NoahClient;
pub use endpoint::{
  Endpoint, DEFAULT_FLOOD_REPORT_YEAR, DEFAULT_LOCATION_ID, DEFAULT_STATION_ID,
  DEFAULT_STATION_TYPE,
};
pub use error::Error;
pub use payload::OrNull;
pub use transport::{HttpTransport, RawResponse, Transport};

pub const API_BASE_URL: &str = "http://noah.up.edu.ph/api/";
pub const DEFAULT_TIMEOUT: std::time::Duration =
  std::time::Duration::from_secs(config::DEFAULT_TIMEOUT_SECS);
