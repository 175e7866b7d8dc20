use clap::{Parser, Subcommand};
use meteo_core::{Config, LocationQuery, WeatherClient};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Current weather by city or coordinates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show the current weather for a location.
    Show {
        /// City name, e.g. "Tokyo". Omit to search by coordinates.
        city: Option<String>,

        /// Latitude in decimal degrees (-90 to 90).
        #[arg(long, allow_hyphen_values = true, requires = "lon", conflicts_with = "city")]
        lat: Option<f64>,

        /// Longitude in decimal degrees (-180 to 180).
        #[arg(long, allow_hyphen_values = true, requires = "lat", conflicts_with = "city")]
        lon: Option<f64>,

        /// OpenWeather API key; overrides the configured one.
        #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, lat, lon, api_key } => show(city, lat, lon, api_key).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    api_key: Option<String>,
) -> anyhow::Result<()> {
    let query = match (city, lat, lon) {
        (Some(name), None, None) => LocationQuery::Place(name),
        (None, Some(latitude), Some(longitude)) => LocationQuery::Coordinates { latitude, longitude },
        _ => anyhow::bail!("Provide a city name, or both --lat and --lon."),
    };

    // Flag and environment win over the stored configuration.
    let api_key = match api_key {
        Some(key) => Some(key),
        None => Config::load()?.api_key,
    };

    let client = WeatherClient::new(api_key)?;
    match client.get_current(&query).await {
        Ok(weather) => {
            print!("{}", render::current_weather(&weather));
            Ok(())
        }
        Err(err) => anyhow::bail!(render::error_message(&err)),
    }
}
