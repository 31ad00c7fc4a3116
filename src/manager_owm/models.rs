use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Main {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Deserialize)]
pub struct Weather {
    pub id: u16,
    pub description: String,
}

#[derive(Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Deserialize)]
pub struct FullEntry {
    pub dt: i64,
    pub main: Main,
    pub weather: Vec<Weather>,
    pub wind: Wind,
}

#[derive(Deserialize)]
pub struct City {
    pub name: String,
}

#[derive(Deserialize)]
pub struct FullForecast {
    pub list: Vec<FullEntry>,
    pub city: City,
}

/// One 3 hour forecast sample, flattened from the raw document
#[derive(Debug, Clone)]
pub struct ForecastSample {
    pub dt: DateTime<Utc>,
    pub temp: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub weather_id: u16,
    pub weather: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_document_decodes() {
        let json = r#"{
            "cod": "200",
            "cnt": 1,
            "list": [
                {
                    "dt": 1722895200,
                    "main": {"temp": 31.25, "feels_like": 35.1, "humidity": 62},
                    "weather": [{"id": 801, "main": "Clouds", "description": "薄い雲", "icon": "02d"}],
                    "clouds": {"all": 20},
                    "wind": {"speed": 3.6, "deg": 140}
                }
            ],
            "city": {"id": 1850144, "name": "東京都", "country": "JP"}
        }"#;

        let full: FullForecast = serde_json::from_str(json).unwrap();

        assert_eq!(full.city.name, "東京都");
        assert_eq!(full.list.len(), 1);
        assert_eq!(full.list[0].dt, 1722895200);
        assert_eq!(full.list[0].main.temp, 31.25);
        assert_eq!(full.list[0].main.humidity, 62);
        assert_eq!(full.list[0].weather[0].id, 801);
        assert_eq!(full.list[0].weather[0].description, "薄い雲");
        assert_eq!(full.list[0].wind.speed, 3.6);
    }
}
