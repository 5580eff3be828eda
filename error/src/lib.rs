// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("Transport error: {0}")]
  Transport(#[source] BoxError),
  #[error("Timeout error")]
  Timeout,
  #[error("Failed to decode response body as JSON: {0}")]
  Decode(#[from] serde_json::Error),
  #[error("Invalid base URL: {0}")]
  InvalidBaseUrl(String),
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      Error::Timeout
    } else {
      Error::Transport(Box::new(err))
    }
  }
}

impl Error {
  pub fn transport(err: impl Into<BoxError>) -> Self {
    Error::Transport(err.into())
  }

  pub fn is_transport(&self) -> bool {
    matches!(self, Error::Transport(_) | Error::Timeout)
  }

  pub fn is_decode(&self) -> bool {
    matches!(self, Error::Decode(_))
  }
}
