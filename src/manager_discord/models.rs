use serde::Serialize;

#[derive(Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
    pub username: String,
}

#[derive(Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Serialize)]
pub struct EmbedFooter {
    pub text: String,
}
