use serde::{Deserialize, Serialize};

/// Caller-supplied location: a place name, or an explicit coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Look up by city name, e.g. `"Paris"` or `"Tokyo,JP"`.
    Place(String),
    /// Look up by geographic coordinates, in decimal degrees.
    Coordinates { latitude: f64, longitude: f64 },
}

/// Current-weather payload returned by the OpenWeather `weather` endpoint.
///
/// The upstream only guarantees `name` and `main`; every other section may
/// be missing depending on location and conditions, so absent fields
/// deserialize to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub name: String,
    pub main: MainMetrics,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub sys: Sys,
    /// Visibility in metres, capped at 10 km by the API.
    pub visibility: Option<u32>,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
}

impl CurrentWeather {
    /// Description of the leading weather condition, if any.
    pub fn condition(&self) -> Option<&str> {
        self.weather.first().map(|c| c.description.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainMetrics {
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    /// Atmospheric pressure at sea level, hPa.
    pub pressure: Option<u32>,
    /// Relative humidity, percent.
    pub humidity: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s under metric units.
    pub speed: Option<f64>,
    /// Direction in meteorological degrees.
    pub deg: Option<f64>,
    pub gust: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sys {
    pub country: Option<String>,
    /// Sunrise as a unix timestamp, UTC.
    pub sunrise: Option<i64>,
    /// Sunset as a unix timestamp, UTC.
    pub sunset: Option<i64>,
}

/// Rain or snow volume; the API keys entries by time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}
