//! SMS delivery through the Twilio REST API.

use tracing::info;

use crate::{config::TwilioConfig, error::AppError};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

pub struct TwilioSms {
    http: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioSms {
    pub fn new(http: reqwest::Client, config: &TwilioConfig) -> Self {
        Self {
            http,
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.from_number.clone(),
        }
    }

    pub async fn send(&self, to: &str, body: &str) -> Result<(), AppError> {
        let url = format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.account_sid
        );

        self.http
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("From", self.from_number.as_str()), ("To", to), ("Body", body)])
            .send()
            .await?
            .error_for_status()?;

        info!(to, "Sent pick-turn SMS");

        Ok(())
    }
}
