// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::NoahClientBuilder,
  endpoint::Endpoint,
  payload::decode,
  transport::{HttpTransport, Transport},
};
use error::Error;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

/// Client for the Project NOAH API. Holds only the base URL and a
/// transport; every call is an independent GET.
#[derive(Debug, Clone)]
pub struct NoahClient<T: Transport = HttpTransport> {
  pub(crate) base_url: Url,
  pub(crate) transport: T,
}

impl NoahClient {
  pub fn new() -> Result<Self, Error> {
    Self::builder().build()
  }

  pub fn builder() -> NoahClientBuilder {
    NoahClientBuilder::default()
  }
}

impl<T: Transport> NoahClient<T> {
  pub fn with_transport(transport: T) -> Result<Self, Error> {
    NoahClientBuilder::default().build_with(transport)
  }

  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }

  #[instrument(skip(self, endpoint), fields(endpoint = %endpoint))]
  pub async fn fetch(&self, endpoint: &Endpoint) -> Result<Value, Error> {
    let url = endpoint.resolve(&self.base_url)?;
    debug!(%url, "Requesting NOAH endpoint");

    let response = self.transport.get(&url).await?;
    if !response.is_success() {
      warn!(
        "NOAH API returned status {} for {}, decoding body anyway",
        response.status, endpoint
      );
    }

    decode(&response.body)
  }

  /// Doppler radar cloud cover datasets.
  pub async fn get_doppler(&self) -> Result<Value, Error> {
    self.fetch(&Endpoint::Doppler).await
  }

  /// Readings of one weather station. Defaults: type `0`, id `0`.
  pub async fn get_station_by_type_and_id(
    &self,
    station_type: Option<u32>,
    station_id: Option<u32>,
  ) -> Result<Value, Error> {
    self
      .fetch(&Endpoint::station(station_type, station_id))
      .await
  }

  pub async fn get_stations(&self) -> Result<Value, Error> {
    self.fetch(&Endpoint::Stations).await
  }

  /// Flood extent contour maps by recurrence interval.
  pub async fn get_flood_maps(&self) -> Result<Value, Error> {
    self.fetch(&Endpoint::FloodMaps).await
  }

  /// Flood reports for a year, `2000` when unset.
  pub async fn get_flood_report(&self, year: Option<u32>) -> Result<Value, Error> {
    self.fetch(&Endpoint::flood_report(year)).await
  }

  pub async fn get_landslide_maps(&self) -> Result<Value, Error> {
    self.fetch(&Endpoint::LandslideMaps).await
  }

  pub async fn get_storm_surge_maps(&self) -> Result<Value, Error> {
    self.fetch(&Endpoint::StormSurgeMaps).await
  }

  /// Rain forecast for the next four hours in 10 minute steps.
  pub async fn get_four_hour_forecast(&self) -> Result<Value, Error> {
    self.fetch(&Endpoint::FourHourForecast).await
  }

  /// Seven day forecast in 3 hour steps. Location `1` when unset.
  pub async fn get_seven_day_forecast(&self, location_id: Option<u32>) -> Result<Value, Error> {
    self
      .fetch(&Endpoint::seven_day_forecast(location_id))
      .await
  }

  pub async fn get_latest_contour(&self) -> Result<Value, Error> {
    self.fetch(&Endpoint::LatestContour).await
  }

  /// HIMAWARI8 and GSMAP satellite imagery. Use of these images is limited
  /// to non-profit purposes such as research and education.
  pub async fn get_mtsat(&self) -> Result<Value, Error> {
    self.fetch(&Endpoint::MtSat).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{payload::OrNull, transport::RawResponse, API_BASE_URL};
  use async_trait::async_trait;
  use serde_json::json;
  use std::sync::Mutex;

  enum Reply {
    Body(u16, &'static str),
    ConnectionRefused,
  }

  struct CannedTransport {
    reply: Reply,
    seen: Mutex<Vec<String>>,
  }

  impl CannedTransport {
    fn new(reply: Reply) -> Self {
      Self {
        reply,
        seen: Mutex::new(Vec::new()),
      }
    }

    fn seen(&self) -> Vec<String> {
      self.seen.lock().unwrap().clone()
    }
  }

  #[async_trait]
  impl Transport for CannedTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, Error> {
      self.seen.lock().unwrap().push(url.to_string());
      match self.reply {
        Reply::Body(status, body) => Ok(RawResponse {
          status,
          body: body.to_string(),
        }),
        Reply::ConnectionRefused => Err(Error::transport(std::io::Error::new(
          std::io::ErrorKind::ConnectionRefused,
          "connection refused",
        ))),
      }
    }
  }

  fn client(reply: Reply) -> NoahClient<CannedTransport> {
    NoahClient::with_transport(CannedTransport::new(reply)).unwrap()
  }

  async fn call_every_endpoint<T: Transport>(client: &NoahClient<T>) -> Vec<Result<Value, Error>> {
    vec![
      client.get_doppler().await,
      client.get_station_by_type_and_id(None, None).await,
      client.get_stations().await,
      client.get_flood_maps().await,
      client.get_flood_report(None).await,
      client.get_landslide_maps().await,
      client.get_storm_surge_maps().await,
      client.get_four_hour_forecast().await,
      client.get_seven_day_forecast(None).await,
      client.get_latest_contour().await,
      client.get_mtsat().await,
    ]
  }

  #[tokio::test]
  async fn every_endpoint_returns_the_decoded_payload() {
    let client = client(Reply::Body(200, r#"{"status":"ok"}"#));
    let results = call_every_endpoint(&client).await;

    assert_eq!(results.len(), 11);
    for result in results {
      assert_eq!(result.unwrap(), json!({"status": "ok"}));
    }
  }

  #[tokio::test]
  async fn every_endpoint_requests_its_own_path() {
    let client = client(Reply::Body(200, "[]"));
    call_every_endpoint(&client).await;

    let expected: Vec<String> = [
      "doppler",
      "station/0/0",
      "stations",
      "flood_maps",
      "reports/flood/2000",
      "landslide_maps",
      "storm_surge_maps",
      "four_hour_forecast",
      "seven_day_forecast/1",
      "latest_contour",
      "mtsat",
    ]
    .iter()
    .map(|path| format!("http://noah.up.edu.ph/api/{}", path))
    .collect();

    assert_eq!(client.transport().seen(), expected);
  }

  #[tokio::test]
  async fn every_request_starts_with_the_api_base() {
    let client = client(Reply::Body(200, "{}"));
    call_every_endpoint(&client).await;
    client.get_station_by_type_and_id(Some(2), Some(15)).await.unwrap();

    let seen = client.transport().seen();
    assert_eq!(seen.len(), 12);
    assert!(seen.iter().all(|url| url.starts_with(API_BASE_URL)));
  }

  #[tokio::test]
  async fn explicit_parameters_replace_defaults() {
    let client = client(Reply::Body(200, "{}"));
    client.get_station_by_type_and_id(Some(2), Some(15)).await.unwrap();
    client.get_flood_report(Some(2015)).await.unwrap();
    client.get_seven_day_forecast(Some(7)).await.unwrap();

    assert_eq!(
      client.transport().seen(),
      vec![
        "http://noah.up.edu.ph/api/station/2/15",
        "http://noah.up.edu.ph/api/reports/flood/2015",
        "http://noah.up.edu.ph/api/seven_day_forecast/7",
      ]
    );
  }

  #[tokio::test]
  async fn malformed_body_is_a_decode_error_everywhere() {
    let client = client(Reply::Body(200, "<html>oops</html>"));

    for result in call_every_endpoint(&client).await {
      let err = result.unwrap_err();
      assert!(err.is_decode(), "unexpected error: {err}");
    }
  }

  #[tokio::test]
  async fn malformed_body_flattens_to_null() {
    let client = client(Reply::Body(200, "not json"));

    for result in call_every_endpoint(&client).await {
      assert_eq!(result.or_null(), Value::Null);
    }
  }

  #[tokio::test]
  async fn connection_failure_is_a_transport_error_everywhere() {
    let client = client(Reply::ConnectionRefused);
    let results = call_every_endpoint(&client).await;

    assert_eq!(results.len(), 11);
    for result in results {
      let err = result.unwrap_err();
      assert!(matches!(err, Error::Transport(_)), "unexpected error: {err}");
      assert_eq!(Err::<Value, _>(err).or_null(), Value::Null);
    }
  }

  #[tokio::test]
  async fn error_status_body_is_still_decoded() {
    let client = client(Reply::Body(404, r#"{"detail":"Not found."}"#));
    let value = client.get_flood_report(Some(1999)).await.unwrap();
    assert_eq!(value["detail"], "Not found.");
  }

  #[tokio::test]
  async fn empty_body_is_null() {
    let client = client(Reply::Body(200, ""));
    assert_eq!(client.get_mtsat().await.unwrap(), Value::Null);
  }

  #[tokio::test]
  async fn fetch_accepts_any_endpoint() {
    let client = client(Reply::Body(200, "[1,2]"));
    for endpoint in Endpoint::all() {
      assert_eq!(client.fetch(&endpoint).await.unwrap(), json!([1, 2]));
    }
    assert_eq!(client.transport().seen().len(), 11);
  }
}
