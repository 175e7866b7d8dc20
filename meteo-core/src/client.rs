use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    error::WeatherError,
    model::{CurrentWeather, LocationQuery},
    query::{QueryParams, build_url},
};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const DEFAULT_UNITS: &str = "metric";
const DEFAULT_LANG: &str = "fr";

/// Shown when a non-success response carries no `message` field.
const GENERIC_API_ERROR: &str = "API error.";

/// Client for the OpenWeather current-weather endpoint.
///
/// Holds the HTTP client, the optional API key, and the endpoint URL. Use
/// [`WeatherClient::new`] for production or [`WeatherClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl WeatherClient {
    /// Create a client pointed at the production OpenWeather endpoint.
    pub fn new(api_key: Option<String>) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom endpoint URL.
    pub fn with_base_url(api_key: Option<String>, base_url: &str) -> Result<Self, WeatherError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| WeatherError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self { http: Client::new(), api_key, base_url })
    }

    /// Fetch the current weather for `query`.
    ///
    /// Makes exactly one GET request per call, and none at all when no API
    /// key is configured. Single attempt: no retries, no timeout beyond
    /// what the transport imposes.
    pub async fn get_current(&self, query: &LocationQuery) -> Result<CurrentWeather, WeatherError> {
        let Some(api_key) = self.api_key.as_deref().filter(|key| !key.is_empty()) else {
            return Err(WeatherError::MissingApiKey);
        };

        let params = self.request_params(query, api_key);
        let url = build_url(&self.base_url, &params);

        tracing::debug!(endpoint = %self.base_url, ?query, "requesting current weather");

        let res = self.http.get(url).send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            // The upstream returns a JSON body with a `message` field on
            // failure too; anything unreadable falls back to the generic text.
            let parsed: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();
            let message = parsed.message.unwrap_or_else(|| GENERIC_API_ERROR.to_string());
            return Err(WeatherError::Api { message });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Merge fixed defaults, the caller's location, and the API key, in
    /// that order. A later source overwrites earlier keys on collision.
    fn request_params(&self, query: &LocationQuery, api_key: &str) -> QueryParams {
        let mut params = QueryParams::new();
        params.set("units", DEFAULT_UNITS);
        params.set("lang", DEFAULT_LANG);

        match query {
            LocationQuery::Place(name) => params.set("q", name.as_str()),
            LocationQuery::Coordinates { latitude, longitude } => {
                params.set("lat", latitude.to_string());
                params.set("lon", longitude.to_string());
            }
        }

        params.set("appid", api_key);
        params
    }
}

/// Error body returned by OpenWeather on non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}
