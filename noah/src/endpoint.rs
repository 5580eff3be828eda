// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use std::fmt;
use url::Url;

pub const DEFAULT_STATION_TYPE: u32 = 0;
pub const DEFAULT_STATION_ID: u32 = 0;
pub const DEFAULT_FLOOD_REPORT_YEAR: u32 = 2000;
pub const DEFAULT_LOCATION_ID: u32 = 1;

/// One upstream NOAH resource. Parameterized variants carry their path
/// parameters in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  Doppler,
  Station { station_type: u32, station_id: u32 },
  Stations,
  FloodMaps,
  FloodReport { year: u32 },
  LandslideMaps,
  StormSurgeMaps,
  FourHourForecast,
  SevenDayForecast { location_id: u32 },
  LatestContour,
  MtSat,
}

impl Endpoint {
  pub fn station(station_type: Option<u32>, station_id: Option<u32>) -> Self {
    Endpoint::Station {
      station_type: station_type.unwrap_or(DEFAULT_STATION_TYPE),
      station_id: station_id.unwrap_or(DEFAULT_STATION_ID),
    }
  }

  pub fn flood_report(year: Option<u32>) -> Self {
    Endpoint::FloodReport {
      year: year.unwrap_or(DEFAULT_FLOOD_REPORT_YEAR),
    }
  }

  pub fn seven_day_forecast(location_id: Option<u32>) -> Self {
    Endpoint::SevenDayForecast {
      location_id: location_id.unwrap_or(DEFAULT_LOCATION_ID),
    }
  }

  /// Every endpoint, parameterized ones with their default parameters.
  pub fn all() -> [Endpoint; 11] {
    [
      Endpoint::Doppler,
      Endpoint::station(None, None),
      Endpoint::Stations,
      Endpoint::FloodMaps,
      Endpoint::flood_report(None),
      Endpoint::LandslideMaps,
      Endpoint::StormSurgeMaps,
      Endpoint::FourHourForecast,
      Endpoint::seven_day_forecast(None),
      Endpoint::LatestContour,
      Endpoint::MtSat,
    ]
  }

  pub fn name(&self) -> &'static str {
    match self {
      Endpoint::Doppler => "doppler",
      Endpoint::Station { .. } => "station",
      Endpoint::Stations => "stations",
      Endpoint::FloodMaps => "flood_maps",
      Endpoint::FloodReport { .. } => "flood_report",
      Endpoint::LandslideMaps => "landslide_maps",
      Endpoint::StormSurgeMaps => "storm_surge_maps",
      Endpoint::FourHourForecast => "four_hour_forecast",
      Endpoint::SevenDayForecast { .. } => "seven_day_forecast",
      Endpoint::LatestContour => "latest_contour",
      Endpoint::MtSat => "mtsat",
    }
  }

  pub fn segments(&self) -> Vec<String> {
    match *self {
      Endpoint::Doppler => vec!["doppler".into()],
      Endpoint::Station {
        station_type,
        station_id,
      } => vec![
        "station".into(),
        station_type.to_string(),
        station_id.to_string(),
      ],
      Endpoint::Stations => vec!["stations".into()],
      Endpoint::FloodMaps => vec!["flood_maps".into()],
      Endpoint::FloodReport { year } => vec!["reports".into(), "flood".into(), year.to_string()],
      Endpoint::LandslideMaps => vec!["landslide_maps".into()],
      Endpoint::StormSurgeMaps => vec!["storm_surge_maps".into()],
      Endpoint::FourHourForecast => vec!["four_hour_forecast".into()],
      Endpoint::SevenDayForecast { location_id } => {
        vec!["seven_day_forecast".into(), location_id.to_string()]
      }
      Endpoint::LatestContour => vec!["latest_contour".into()],
      Endpoint::MtSat => vec!["mtsat".into()],
    }
  }

  /// Relative path below the API base, e.g. `station/2/15`.
  pub fn path(&self) -> String {
    self.segments().join("/")
  }

  /// Appends the endpoint's segments to `base`, percent-encoding each one.
  pub fn resolve(&self, base: &Url) -> Result<Url, Error> {
    let mut url = base.clone();
    url
      .path_segments_mut()
      .map_err(|_| Error::InvalidBaseUrl(base.to_string()))?
      .pop_if_empty()
      .extend(self.segments());
    Ok(url)
  }
}

impl fmt::Display for Endpoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.path())
  }
}
