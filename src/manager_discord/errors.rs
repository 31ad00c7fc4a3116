use std::fmt;
use std::fmt::Formatter;

pub struct DiscordError(pub String);

impl fmt::Display for DiscordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "DiscordError: {}", self.0)
    }
}
impl From<reqwest::Error> for DiscordError {
    fn from(e: reqwest::Error) -> Self { DiscordError(e.to_string()) }
}
