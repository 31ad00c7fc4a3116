use std::env;
use crate::errors::ConfigError;

/// Validated configuration bundle read once at startup
pub struct Config {
    pub api_key: String,
    pub lat: f64,
    pub long: f64,
    pub webhook_url: String,
}

/// Reads the configuration from the process environment.
///
/// All four variables are required and must be non empty; the latitude and
/// longitude must parse as decimal degrees. Validation happens before any
/// HTTP client is created, so a bad environment never causes a network call.
pub fn config() -> Result<Config, ConfigError> {
    let api_key = required("OWM_API_KEY")?;
    let lat = required("LATITUDE")?;
    let long = required("LONGITUDE")?;
    let webhook_url = required("DISCORD_WEBHOOK_URL")?;

    Ok(Config {
        api_key,
        lat: parse_coordinate("LATITUDE", &lat)?,
        long: parse_coordinate("LONGITUDE", &long)?,
        webhook_url,
    })
}

/// Returns the value of an environment variable
///
/// # Arguments
///
/// * 'name' - name of the variable
fn required(name: &str) -> Result<String, ConfigError> {
    non_empty(name, env::var(name).ok())
}

/// Rejects absent or blank configuration values
///
/// # Arguments
///
/// * 'name' - name of the variable, used in the error message
/// * 'value' - raw value as found in the environment
fn non_empty(name: &str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError(format!("required configuration missing: {}", name))),
    }
}

/// Parses a latitude or longitude given as a decimal degree string
///
/// # Arguments
///
/// * 'name' - name of the variable, used in the error message
/// * 'value' - raw value as found in the environment
fn parse_coordinate(name: &str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse::<f64>()
        .map_err(|_| ConfigError(format!("{} is not a valid coordinate: {}", name, value)))
}
