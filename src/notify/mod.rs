//! Pick-turn notifications.
//!
//! When the draft order rotates, the next picker gets a message over
//! their preferred channel. SMS needs a phone number on file; anyone
//! without one falls back to email. Channels with missing credentials
//! are skipped with a warning so the poller keeps running.

pub mod email;
pub mod sms;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::warn;

use crate::{
    config::Config,
    error::AppError,
    model::user::{NotificationPreference, User},
    notify::{email::SmtpMailer, sms::TwilioSms},
};

/// Delivery channel resolved for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Sms,
    Email,
}

/// Picks the channel for a user: SMS when preferred and a phone number
/// is on file, email otherwise.
pub fn channel_for(user: &User) -> Channel {
    match user.notification_preference {
        NotificationPreference::Sms if user.phone.is_some() => Channel::Sms,
        _ => Channel::Email,
    }
}

fn pick_turn_message(user: &User, game_time: DateTime<Utc>) -> String {
    format!(
        "Hey {}, you're up! It's your turn to pick for the next game on {}.",
        user.username,
        game_time.format("%Y-%m-%d %H:%M UTC")
    )
}

/// Sends pick-turn notifications. Implemented over real channels in
/// production and recorded in tests.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_pick_turn(&self, user: &User, game_time: DateTime<Utc>)
        -> Result<(), AppError>;
}

/// Routes notifications to SMS or email based on the user's preference.
pub struct PreferenceNotifier {
    sms: Option<TwilioSms>,
    mail: Option<SmtpMailer>,
}

impl PreferenceNotifier {
    /// Builds the notifier from whatever credentials the config carries.
    /// Either channel may be absent.
    pub fn from_config(http: reqwest::Client, config: &Config) -> Result<Self, AppError> {
        let sms = config
            .twilio
            .as_ref()
            .map(|twilio| TwilioSms::new(http, twilio));
        let mail = config
            .smtp
            .as_ref()
            .map(SmtpMailer::new)
            .transpose()?;

        Ok(Self { sms, mail })
    }
}

#[async_trait]
impl Notifier for PreferenceNotifier {
    async fn notify_pick_turn(
        &self,
        user: &User,
        game_time: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let body = pick_turn_message(user, game_time);

        match channel_for(user) {
            Channel::Sms => {
                // channel_for only returns Sms when a phone is on file
                let Some(phone) = user.phone.as_deref() else {
                    return Ok(());
                };
                match &self.sms {
                    Some(sms) => sms.send(phone, &body).await,
                    None => {
                        warn!(
                            user_id = user.id,
                            "SMS preferred but Twilio is not configured, skipping notification"
                        );
                        Ok(())
                    }
                }
            }
            Channel::Email => match &self.mail {
                Some(mail) => mail.send(&user.email, "Your pick is up", &body).await,
                None => {
                    warn!(
                        user_id = user.id,
                        "SMTP is not configured, skipping notification"
                    );
                    Ok(())
                }
            },
        }
    }
}
