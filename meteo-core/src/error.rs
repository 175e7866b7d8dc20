use thiserror::Error;

/// Failures surfaced by [`WeatherClient`](crate::client::WeatherClient).
///
/// Every failure mode of a lookup collapses into one of these variants;
/// nothing propagates past the client boundary as a panic.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key configured; detected before any network activity.
    #[error("no API key configured. Set OPENWEATHER_API_KEY or run `meteo configure`.")]
    MissingApiKey,

    /// Transport failure: the request could not be sent or the response
    /// body could not be read.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// A success response body did not match the expected payload shape.
    #[error("failed to decode OpenWeather response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a non-success status. Carries the upstream
    /// `message` field, or a generic fallback when the body had none.
    #[error("{message}")]
    Api { message: String },

    /// The configured endpoint URL could not be parsed.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
