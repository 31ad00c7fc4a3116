pub mod errors;
pub mod models;

use std::time::Duration;
use reqwest::Client;
use crate::manager_discord::errors::DiscordError;
use crate::manager_discord::models::{Embed, WebhookPayload};

const BOT_USERNAME: &str = "お天気ボット";

/// Struct for delivering forecast messages to a Discord webhook
pub struct Discord {
    client: Client,
    webhook_url: String,
}

impl Discord {
    /// Returns a Discord struct ready for posting messages to the given webhook
    ///
    /// # Arguments
    ///
    /// * 'webhook_url' - full url of the Discord webhook
    pub fn new(webhook_url: &str) -> Result<Discord, DiscordError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            webhook_url: webhook_url.to_string(),
        })
    }

    /// Posts a single embed to the webhook under the fixed bot name
    ///
    /// # Arguments
    ///
    /// * 'embed' - the rendered forecast embed
    pub async fn post_embed(&self, embed: Embed) -> Result<(), DiscordError> {
        let payload = WebhookPayload {
            embeds: vec![embed],
            username: BOT_USERNAME.to_string(),
        };

        let req = self.client
            .post(&self.webhook_url)
            .json(&payload)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(DiscordError(format!("Error while posting to Discord webhook: {}", status)));
        }

        Ok(())
    }
}
