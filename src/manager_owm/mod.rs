pub mod errors;
mod models;

use std::time::Duration;
use chrono::DateTime;
use reqwest::Client;
use crate::manager_owm::errors::OWMError;
use crate::manager_owm::models::FullForecast;

pub use models::ForecastSample;

/// Struct for managing weather forecasts produced by OpenWeather
pub struct OWM {
    client: Client,
    lat: f64,
    long: f64,
    api_key: String,
}

impl OWM {
    /// Returns an OWM struct ready for fetching and processing weather forecasts
    /// from OpenWeather
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    /// * 'api_key' - OpenWeather API key
    pub fn new(lat: f64, long: f64, api_key: &str) -> Result<OWM, OWMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            lat,
            long,
            api_key: api_key.to_string(),
        })
    }

    /// Retrieves the 5 day weather forecast from OpenWeather in 3 hour resolution.
    /// Each raw entry is flattened into a ForecastSample; the samples are returned
    /// in upstream order together with the name of the location.
    ///
    /// Units are metric and descriptions are requested in Japanese.
    pub async fn new_forecast(&self) -> Result<(Vec<ForecastSample>, String), OWMError> {
        let owm_domain = "https://api.openweathermap.org";
        let url = format!("{}/data/2.5/forecast?lat={}&lon={}&appid={}&units=metric&lang=ja",
                          owm_domain, self.lat, self.long, self.api_key);

        let req = self.client
            .get(url)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(OWMError::OWM(format!("Error while fetching forecast from OpenWeather: {}", status)));
        }

        let json = req.text().await?;
        let full_forecast: FullForecast = serde_json::from_str(&json)?;

        let mut samples: Vec<ForecastSample> = Vec::new();

        for item in full_forecast.list {
            let weather = item.weather.into_iter().next()
                .ok_or_else(|| OWMError::Document("forecast entry without weather data".to_string()))?;
            let dt = DateTime::from_timestamp(item.dt, 0)
                .ok_or_else(|| OWMError::Document(format!("forecast entry with invalid timestamp: {}", item.dt)))?;

            samples.push(ForecastSample {
                dt,
                temp: item.main.temp,
                humidity: item.main.humidity,
                wind_speed: item.wind.speed,
                weather_id: weather.id,
                weather: weather.description,
            });
        }

        Ok((samples, full_forecast.city.name))
    }
}
