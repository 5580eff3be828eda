// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::NoahClient,
  transport::{HttpTransport, Transport},
  API_BASE_URL, DEFAULT_TIMEOUT,
};
use config::ClientSettings;
use error::Error;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct NoahClientBuilder {
  pub(crate) base_url: String,
  pub(crate) timeout: Option<Duration>,
}

impl Default for NoahClientBuilder {
  fn default() -> Self {
    Self {
      base_url: API_BASE_URL.to_string(),
      timeout: Some(DEFAULT_TIMEOUT),
    }
  }
}

impl NoahClientBuilder {
  /// Overrides the API base, e.g. to point at a local mock server.
  pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  pub fn no_timeout(mut self) -> Self {
    self.timeout = None;
    self
  }

  pub fn from_config(mut self, settings: &ClientSettings) -> Self {
    self.timeout = settings.timeout();
    self
  }

  pub fn build(self) -> Result<NoahClient<HttpTransport>, Error> {
    let transport = HttpTransport::new(self.timeout)?;
    self.build_with(transport)
  }

  pub fn build_with<T: Transport>(self, transport: T) -> Result<NoahClient<T>, Error> {
    let base_url = Url::parse(&self.base_url)
      .map_err(|e| Error::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;

    if base_url.cannot_be_a_base() {
      return Err(Error::InvalidBaseUrl(self.base_url));
    }

    Ok(NoahClient {
      base_url,
      transport,
    })
  }
}
