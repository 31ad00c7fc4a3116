use chrono::{DateTime, Days, FixedOffset};
use crate::forecast_summary::{DailySummary, HourlyForecast};
use crate::manager_discord::models::{Embed, EmbedField, EmbedFooter};

const EMBED_COLOR: u32 = 3447003;
const HOURLY_LIMIT: usize = 6;
const NO_DATA: &str = "データなし";

/// Maps an OpenWeather condition code to a representative emoji
///
/// # Arguments
///
/// * 'weather_id' - OpenWeather condition code
pub fn weather_emoji(weather_id: u16) -> &'static str {
    match weather_id {
        200..=299 => "⛈️",
        300..=399 => "🌦️",
        500..=599 => "🌧️",
        600..=699 => "❄️",
        700..=799 => "🌫️",
        800 => "☀️",
        801 => "🌤️",
        802 => "⛅",
        803 | 804 => "☁️",
        _ => "🌡️",
    }
}

/// Builds the forecast embed with up to three sections in fixed order:
/// today's hours, tomorrow's hours and the five day outlook. The five day
/// section is left out when the window held no samples at all.
///
/// # Arguments
///
/// * 'city' - name of the forecast location
/// * 'today_hourly' - today's 3 hour entries
/// * 'tomorrow_hourly' - tomorrow's 3 hour entries
/// * 'daily' - per day summaries, at most five
/// * 'now' - current time in JST
pub fn build_embed(
    city: &str,
    today_hourly: &[HourlyForecast],
    tomorrow_hourly: &[HourlyForecast],
    daily: &[DailySummary],
    now: DateTime<FixedOffset>,
) -> Embed {
    let today = now.date_naive();
    let tomorrow = today + Days::new(1);

    let mut fields: Vec<EmbedField> = vec![
        EmbedField {
            name: "📅 今日の天気（時間ごと）".to_string(),
            value: hourly_section(today_hourly),
            inline: false,
        },
        EmbedField {
            name: format!("📅 明日の天気（時間ごと）- {}", tomorrow.format("%m/%d")),
            value: hourly_section(tomorrow_hourly),
            inline: false,
        },
    ];

    if !daily.is_empty() {
        fields.push(EmbedField {
            name: "📊 5日間の天気予報".to_string(),
            value: daily_section(daily),
            inline: false,
        });
    }

    Embed {
        title: "🌤️ 今日の天気予報".to_string(),
        description: format!("**{}** {} の天気情報", today.format("%Y年%m月%d日 (%A)"), city),
        color: EMBED_COLOR,
        fields,
        footer: EmbedFooter {
            text: "OpenWeather API | 毎朝5時更新".to_string(),
        },
        timestamp: now.to_rfc3339(),
    }
}

/// One line per 3 hour entry, capped at the first HOURLY_LIMIT entries.
/// An empty day renders a placeholder body since Discord rejects empty
/// field values.
fn hourly_section(hourly: &[HourlyForecast]) -> String {
    if hourly.is_empty() {
        return NO_DATA.to_string();
    }

    hourly.iter()
        .take(HOURLY_LIMIT)
        .map(|hour| format!("**{}** {} {:.1}°C | 💧 {}% | 💨 {:.1}m/s | {}",
                            hour.time, weather_emoji(hour.weather_id), hour.temp,
                            hour.humidity, hour.wind_speed, hour.weather))
        .collect::<Vec<String>>()
        .join("\n")
}

/// One line per day with date, temperature range and dominant weather
fn daily_section(daily: &[DailySummary]) -> String {
    daily.iter()
        .map(|day| format!("**{}** {} {:.1}°C ~ {:.1}°C | {}",
                           day.date, weather_emoji(day.weather_id), day.temp_min,
                           day.temp_max, day.weather))
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::forecast_summary::{daily_summaries, hourly_forecast, jst};
    use crate::manager_owm::ForecastSample;

    fn sample(day: u32, hour: u32, weather_id: u16, weather: &str) -> ForecastSample {
        ForecastSample {
            dt: jst().with_ymd_and_hms(2024, 8, day, hour, 0, 0)
                .unwrap()
                .with_timezone(&Utc),
            temp: 26.45,
            humidity: 61,
            wind_speed: 3.0,
            weather_id,
            weather: weather.to_string(),
        }
    }

    fn five_day_window() -> Vec<ForecastSample> {
        let mut samples: Vec<ForecastSample> = Vec::new();

        // eight entries each for today and tomorrow
        for day in [6, 7] {
            for hour in [0, 3, 6, 9, 12, 15, 18, 21] {
                samples.push(sample(day, hour, 800, "晴天"));
            }
        }
        // trailing days to complete a five day window
        for day in [8, 9, 10] {
            samples.push(sample(day, 12, 500, "小雨"));
        }

        samples
    }

    #[test]
    fn test_weather_emoji_buckets() {
        assert_eq!(weather_emoji(200), "⛈️");
        assert_eq!(weather_emoji(301), "🌦️");
        assert_eq!(weather_emoji(500), "🌧️");
        assert_eq!(weather_emoji(600), "❄️");
        assert_eq!(weather_emoji(741), "🌫️");
        assert_eq!(weather_emoji(800), "☀️");
        assert_eq!(weather_emoji(801), "🌤️");
        assert_eq!(weather_emoji(802), "⛅");
        assert_eq!(weather_emoji(803), "☁️");
        assert_eq!(weather_emoji(804), "☁️");
        assert_eq!(weather_emoji(999), "🌡️");
    }

    #[test]
    fn test_build_embed_sections() {
        let samples = five_day_window();
        let now = jst().with_ymd_and_hms(2024, 8, 6, 5, 0, 0).unwrap();
        let today = now.date_naive();
        let tomorrow = today + Days::new(1);

        let embed = build_embed(
            "東京都",
            &hourly_forecast(&samples, today),
            &hourly_forecast(&samples, tomorrow),
            &daily_summaries(&samples),
            now,
        );

        assert_eq!(embed.title, "🌤️ 今日の天気予報");
        assert_eq!(embed.description, "**2024年08月06日 (Tuesday)** 東京都 の天気情報");
        assert_eq!(embed.timestamp, "2024-08-06T05:00:00+09:00");

        assert_eq!(embed.fields.len(), 3);
        assert_eq!(embed.fields[0].name, "📅 今日の天気（時間ごと）");
        assert_eq!(embed.fields[1].name, "📅 明日の天気（時間ごと）- 08/07");
        assert_eq!(embed.fields[2].name, "📊 5日間の天気予報");

        // eight entries available but the sections cap at six lines
        assert_eq!(embed.fields[0].value.lines().count(), 6);
        assert_eq!(embed.fields[1].value.lines().count(), 6);
        assert_eq!(embed.fields[2].value.lines().count(), 5);
        assert!(embed.fields.iter().all(|f| !f.inline));
    }

    #[test]
    fn test_hourly_line_format() {
        let hour = HourlyForecast {
            time: "06:00".to_string(),
            temp: 21.2,
            weather: "晴天".to_string(),
            weather_id: 800,
            humidity: 55,
            wind_speed: 3.0,
        };

        let line = hourly_section(std::slice::from_ref(&hour));

        assert_eq!(line, "**06:00** ☀️ 21.2°C | 💧 55% | 💨 3.0m/s | 晴天");
    }

    #[test]
    fn test_daily_line_format() {
        let day = DailySummary {
            date: "08/06 (Tue)".to_string(),
            temp_min: 18.2,
            temp_max: 25.6,
            weather: "小雨".to_string(),
            weather_id: 500,
        };

        let line = daily_section(std::slice::from_ref(&day));

        assert_eq!(line, "**08/06 (Tue)** 🌧️ 18.2°C ~ 25.6°C | 小雨");
    }

    #[test]
    fn test_empty_hourly_renders_placeholder() {
        let now = jst().with_ymd_and_hms(2024, 8, 6, 5, 0, 0).unwrap();

        let embed = build_embed("東京都", &[], &[], &[], now);

        assert_eq!(embed.fields.len(), 2);
        assert_eq!(embed.fields[0].value, "データなし");
        assert_eq!(embed.fields[1].value, "データなし");
    }
}
