mod errors;
mod logging;
mod initialization;
mod forecast_summary;
mod embed;
mod manager_owm;
mod manager_discord;

use chrono::{Days, Utc};
use log::{error, info};
use crate::embed::build_embed;
use crate::errors::UnrecoverableError;
use crate::forecast_summary::{daily_summaries, hourly_forecast, jst};
use crate::initialization::{config, Config};
use crate::manager_discord::Discord;
use crate::manager_owm::OWM;

/// Runs one full forecast delivery: fetch from OpenWeather, aggregate,
/// render the embed and post it to the Discord webhook
///
/// # Arguments
///
/// * 'config' - validated configuration bundle
async fn run(config: Config) -> Result<(), UnrecoverableError> {
    info!("fetching forecast from OpenWeather");
    let owm = OWM::new(config.lat, config.long, &config.api_key)?;
    let (samples, city) = owm.new_forecast().await?;

    info!("building forecast message for {}", city);
    let now = Utc::now().with_timezone(&jst());
    let today = now.date_naive();
    let tomorrow = today + Days::new(1);

    let today_hourly = hourly_forecast(&samples, today);
    let tomorrow_hourly = hourly_forecast(&samples, tomorrow);
    let daily = daily_summaries(&samples);

    let message = build_embed(&city, &today_hourly, &tomorrow_hourly, &daily, now);

    info!("posting forecast to Discord");
    let discord = Discord::new(&config.webhook_url)?;
    discord.post_embed(message).await?;

    info!("forecast delivered");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), UnrecoverableError> {
    logging::setup_logger()?;

    let config = config()?;

    if let Err(e) = run(config).await {
        error!("run failed: {}", e);
        return Err(e);
    }

    Ok(())
}
