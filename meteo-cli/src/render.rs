//! Human-friendly output formatting for weather results.

use chrono::{Local, TimeZone};
use meteo_core::{CurrentWeather, WeatherError};
use std::fmt::Write;

/// Placeholder for values the API did not report.
const MISSING: &str = "-";

/// Render a full weather report as a printable block.
pub fn current_weather(weather: &CurrentWeather) -> String {
    let mut out = String::new();

    let mut header = weather.name.clone();
    if header.is_empty() {
        header.push_str("Unknown location");
    }
    if let Some(country) = weather.sys.country.as_deref() {
        let _ = write!(header, ", {country}");
    }
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", weather.condition().unwrap_or(MISSING));

    let _ = writeln!(
        out,
        "Temp: {}  Feels like: {}  Humidity: {}  Pressure: {}",
        format_temperature(Some(weather.main.temp)),
        format_temperature(weather.main.feels_like),
        weather
            .main
            .humidity
            .map_or_else(|| MISSING.to_string(), |h| format!("{h}%")),
        weather
            .main
            .pressure
            .map_or_else(|| MISSING.to_string(), |p| format!("{p} hPa")),
    );
    let _ = writeln!(
        out,
        "Min: {} / Max: {}",
        format_temperature(weather.main.temp_min),
        format_temperature(weather.main.temp_max),
    );
    let _ = writeln!(
        out,
        "Wind: {} {}  Gusts: {}",
        format_wind_speed(weather.wind.speed),
        direction_from_degrees(weather.wind.deg),
        format_wind_speed(weather.wind.gust),
    );
    let _ = writeln!(out, "Visibility: {}", format_visibility(weather.visibility));
    let _ = writeln!(
        out,
        "Sunrise: {}  Sunset: {}",
        format_time(weather.sys.sunrise),
        format_time(weather.sys.sunset),
    );

    // Precipitation only shows up when the API reported a one-hour volume.
    let rain = weather.rain.as_ref().and_then(|r| r.one_hour);
    let snow = weather.snow.as_ref().and_then(|s| s.one_hour);
    match (rain, snow) {
        (Some(mm), _) => {
            let _ = writeln!(out, "Rain (1h): {mm} mm");
        }
        (None, Some(mm)) => {
            let _ = writeln!(out, "Snow (1h): {mm} mm");
        }
        (None, None) => {}
    }

    out
}

/// User-facing message for a failed lookup. The known upstream "city not
/// found" text gets a friendlier wording; everything else is surfaced
/// verbatim.
pub fn error_message(err: &WeatherError) -> String {
    match err {
        WeatherError::Api { message } if message == "city not found" => {
            "City not found.".to_string()
        }
        other => other.to_string(),
    }
}

fn format_temperature(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{}°C", v.round() as i64))
}

/// The API reports m/s under metric units; humans read km/h.
fn format_wind_speed(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{} km/h", (v * 3.6).round() as i64))
}

fn format_visibility(metres: Option<u32>) -> String {
    metres.map_or_else(|| MISSING.to_string(), |m| format!("{} km", f64::from(m) / 1000.0))
}

/// Unix timestamp to local wall-clock `HH:MM`.
fn format_time(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(|ts| Local.timestamp_opt(ts, 0).single())
        .map_or_else(|| MISSING.to_string(), |dt| dt.format("%H:%M").to_string())
}

/// Meteorological degrees (0-360) to a cardinal direction.
fn direction_from_degrees(deg: Option<f64>) -> &'static str {
    const DIRECTIONS: [&str; 9] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW", "N"];

    match deg {
        Some(d) => {
            let index = (d.rem_euclid(360.0) / 45.0).round() as usize;
            DIRECTIONS[index]
        }
        None => MISSING,
    }
}
