use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_NHL_API_URL: &str = "https://api-web.nhle.com/v1";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STATE_FILE: &str = "rotation_state.json";
/// Every five minutes.
const DEFAULT_POLL_SCHEDULE: &str = "0 */5 * * * *";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Three-letter NHL abbreviation of the pool team, e.g. "TOR".
    pub pool_team: String,
    pub nhl_api_url: String,

    /// Path of the JSON file holding the last-seen opponent and game date.
    pub state_file: PathBuf,
    /// Cron expression controlling how often the rotation check runs.
    pub poll_schedule: String,

    /// SMS credentials; None disables SMS notifications.
    pub twilio: Option<TwilioConfig>,
    /// SMTP credentials; None disables email notifications.
    pub smtp: Option<SmtpConfig>,
}

pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let pool_team = std::env::var("POOL_TEAM")
            .map_err(|_| ConfigError::MissingEnvVar("POOL_TEAM".to_string()))?;
        if pool_team.len() != 3 || !pool_team.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidEnvVar {
                name: "POOL_TEAM".to_string(),
                value: pool_team,
            }
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            pool_team,
            nhl_api_url: std::env::var("NHL_API_URL")
                .unwrap_or_else(|_| DEFAULT_NHL_API_URL.to_string()),
            state_file: std::env::var("STATE_FILE")
                .unwrap_or_else(|_| DEFAULT_STATE_FILE.to_string())
                .into(),
            poll_schedule: std::env::var("POLL_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_POLL_SCHEDULE.to_string()),
            twilio: TwilioConfig::from_env(),
            smtp: SmtpConfig::from_env(),
        })
    }
}

impl TwilioConfig {
    /// Present only when all three Twilio variables are set.
    fn from_env() -> Option<Self> {
        Some(Self {
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").ok()?,
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").ok()?,
            from_number: std::env::var("TWILIO_FROM_NUMBER").ok()?,
        })
    }
}

impl SmtpConfig {
    /// Present only when all four SMTP variables are set.
    fn from_env() -> Option<Self> {
        Some(Self {
            host: std::env::var("SMTP_HOST").ok()?,
            username: std::env::var("SMTP_USERNAME").ok()?,
            password: std::env::var("SMTP_PASSWORD").ok()?,
            from_address: std::env::var("SMTP_FROM_ADDRESS").ok()?,
        })
    }
}
