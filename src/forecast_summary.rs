use std::collections::BTreeMap;
use chrono::{FixedOffset, NaiveDate};
use crate::manager_owm::ForecastSample;

/// Returns the fixed UTC+9 offset all forecast timestamps are presented in.
/// Japan has no daylight saving, so a fixed offset is exact.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

/// One 3 hour forecast entry of a single day, ready for rendering
pub struct HourlyForecast {
    pub time: String,
    pub temp: f64,
    pub weather: String,
    pub weather_id: u16,
    pub humidity: u8,
    pub wind_speed: f64,
}

/// Temperature range and dominant weather of one calendar day
pub struct DailySummary {
    pub date: String,
    pub temp_min: f64,
    pub temp_max: f64,
    pub weather: String,
    pub weather_id: u16,
}

struct DayBucket {
    temps: Vec<f64>,
    weather_ids: Vec<u16>,
    weathers: Vec<String>,
}

/// Extracts the forecast entries falling on one calendar day.
///
/// Samples are compared by their JST date and kept in the order they were
/// received, so entries come out chronologically within the day.
///
/// # Arguments
///
/// * 'samples' - forecast samples as received from OpenWeather
/// * 'target_date' - the JST date to extract entries for
pub fn hourly_forecast(samples: &[ForecastSample], target_date: NaiveDate) -> Vec<HourlyForecast> {
    let mut hourly: Vec<HourlyForecast> = Vec::new();

    for sample in samples {
        let local = sample.dt.with_timezone(&jst());

        if local.date_naive() == target_date {
            hourly.push(HourlyForecast {
                time: local.format("%H:%M").to_string(),
                temp: round1(sample.temp),
                weather: sample.weather.clone(),
                weather_id: sample.weather_id,
                humidity: sample.humidity,
                wind_speed: round1(sample.wind_speed),
            });
        }
    }

    hourly
}

/// Summarises the sample window per calendar day.
///
/// Samples are grouped by their JST date; for each of the first five days in
/// ascending date order the summary holds the min/max temperature and the
/// most frequent weather of that day. Windows spanning fewer than five days
/// yield fewer summaries.
///
/// # Arguments
///
/// * 'samples' - forecast samples as received from OpenWeather
pub fn daily_summaries(samples: &[ForecastSample]) -> Vec<DailySummary> {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for sample in samples {
        let date = sample.dt.with_timezone(&jst()).date_naive();
        let bucket = buckets.entry(date).or_insert_with(|| DayBucket {
            temps: Vec::new(),
            weather_ids: Vec::new(),
            weathers: Vec::new(),
        });

        bucket.temps.push(sample.temp);
        bucket.weather_ids.push(sample.weather_id);
        bucket.weathers.push(sample.weather.clone());
    }

    let mut summary: Vec<DailySummary> = Vec::new();

    for (date, bucket) in buckets.iter().take(5) {
        let (weather_id, weather) = dominant_weather(bucket);
        let temp_min = bucket.temps.iter().copied().fold(f64::INFINITY, f64::min);
        let temp_max = bucket.temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        summary.push(DailySummary {
            date: date.format("%m/%d (%a)").to_string(),
            temp_min: round1(temp_min),
            temp_max: round1(temp_max),
            weather: weather.to_string(),
            weather_id,
        });
    }

    summary
}

/// Picks the most frequent weather id in the bucket together with the
/// description recorded at its first occurrence. Ties fall to the id
/// encountered first.
fn dominant_weather(bucket: &DayBucket) -> (u16, &str) {
    let mut best_pos = 0;
    let mut best_count = 0;

    for (pos, &id) in bucket.weather_ids.iter().enumerate() {
        let count = bucket.weather_ids.iter().filter(|&&other| other == id).count();

        if count > best_count {
            best_pos = pos;
            best_count = count;
        }
    }

    (bucket.weather_ids[best_pos], &bucket.weathers[best_pos])
}

/// Rounds to one decimal, half away from zero
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
