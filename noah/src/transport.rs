// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use async_trait::async_trait;
use error::Error;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, instrument};
use url::Url;

/// Status and body of a completed GET, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
  pub status: u16,
  pub body: String,
}

impl RawResponse {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

#[async_trait]
pub trait Transport: Send + Sync {
  async fn get(&self, url: &Url) -> Result<RawResponse, Error>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
  client: reqwest::Client,
  timeout: Option<Duration>,
}

impl HttpTransport {
  pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
    let client = reqwest::Client::builder().build()?;
    Ok(Self { client, timeout })
  }

  pub fn timeout(&self) -> Option<Duration> {
    self.timeout
  }

  async fn send(&self, url: &Url) -> Result<RawResponse, Error> {
    let response = self.client.get(url.clone()).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    debug!(status, bytes = body.len(), "Received response");
    Ok(RawResponse { status, body })
  }
}

#[async_trait]
impl Transport for HttpTransport {
  #[instrument(skip(self, url), fields(url = %url))]
  async fn get(&self, url: &Url) -> Result<RawResponse, Error> {
    match self.timeout {
      Some(limit) => timeout(limit, self.send(url))
        .await
        .map_err(|_| Error::Timeout)?,
      None => self.send(url).await,
    }
  }
}
