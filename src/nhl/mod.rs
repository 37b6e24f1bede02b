//! NHL schedule lookups.
//!
//! Wraps the public NHL web API's club schedule endpoint to answer one
//! question: what is the pool team's next game, and against whom?

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AppError;

/// The pool team's next scheduled game.
#[derive(Debug, Clone, PartialEq)]
pub struct NextGame {
    /// Opposing team abbreviation, e.g. "BOS".
    pub opponent: String,
    pub game_time: DateTime<Utc>,
}

/// Source of upcoming game information. Implemented by [`NhlClient`] in
/// production and by stubs in tests.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Returns the next game at or after now, or None when the schedule
    /// has no upcoming games this week.
    async fn next_game(&self) -> Result<Option<NextGame>, AppError>;
}

#[derive(Debug, Clone)]
pub struct NhlClient {
    http: reqwest::Client,
    base_url: String,
    team: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClubScheduleResponse {
    games: Vec<ScheduledGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduledGame {
    #[serde(rename = "startTimeUTC")]
    start_time_utc: DateTime<Utc>,
    away_team: ScheduleTeam,
    home_team: ScheduleTeam,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleTeam {
    abbrev: String,
}

impl NhlClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            team: team.into(),
        }
    }

    fn opponent_of(&self, game: &ScheduledGame) -> String {
        if game.home_team.abbrev == self.team {
            game.away_team.abbrev.clone()
        } else {
            game.home_team.abbrev.clone()
        }
    }
}

#[async_trait]
impl ScheduleSource for NhlClient {
    async fn next_game(&self) -> Result<Option<NextGame>, AppError> {
        let url = format!("{}/club-schedule/{}/week/now", self.base_url, self.team);

        let response = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<ClubScheduleResponse>()
            .await?;

        let now = Utc::now();
        let next = response
            .games
            .iter()
            .filter(|g| g.start_time_utc >= now)
            .min_by_key(|g| g.start_time_utc);

        Ok(next.map(|game| NextGame {
            opponent: self.opponent_of(game),
            game_time: game.start_time_utc,
        }))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Duration;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn schedule_body(games: Vec<serde_json::Value>) -> serde_json::Value {
        json!({ "games": games })
    }

    fn game(start: DateTime<Utc>, away: &str, home: &str) -> serde_json::Value {
        json!({
            "startTimeUTC": start.to_rfc3339(),
            "awayTeam": { "abbrev": away },
            "homeTeam": { "abbrev": home },
        })
    }

    /// Tests that the earliest upcoming game wins and the opponent is
    /// taken from the other side of the matchup.
    ///
    /// Expected: Ok(Some) with the away opponent of the home game
    #[tokio::test]
    async fn returns_earliest_upcoming_game() {
        let server = MockServer::start().await;
        let soon = Utc::now() + Duration::hours(2);
        let later = Utc::now() + Duration::days(2);

        Mock::given(method("GET"))
            .and(path("/club-schedule/TOR/week/now"))
            .respond_with(ResponseTemplate::new(200).set_body_json(schedule_body(vec![
                game(later, "TOR", "MTL"),
                game(soon, "BOS", "TOR"),
            ])))
            .mount(&server)
            .await;

        let client = NhlClient::new(reqwest::Client::new(), server.uri(), "TOR");
        let next = client.next_game().await.unwrap();

        assert_eq!(
            next,
            Some(NextGame {
                opponent: "BOS".to_string(),
                game_time: soon,
            })
        );
    }

    /// Tests that games already started are skipped.
    ///
    /// Expected: Ok(None) when only past games remain this week
    #[tokio::test]
    async fn ignores_past_games() {
        let server = MockServer::start().await;
        let yesterday = Utc::now() - Duration::days(1);

        Mock::given(method("GET"))
            .and(path("/club-schedule/TOR/week/now"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(schedule_body(vec![game(yesterday, "TOR", "NYR")])),
            )
            .mount(&server)
            .await;

        let client = NhlClient::new(reqwest::Client::new(), server.uri(), "TOR");
        let next = client.next_game().await.unwrap();

        assert_eq!(next, None);
    }

    /// Tests that the opponent is the home side when the pool team plays
    /// away.
    ///
    /// Expected: opponent "MTL" for a TOR @ MTL game
    #[tokio::test]
    async fn picks_home_opponent_for_away_game() {
        let server = MockServer::start().await;
        let soon = Utc::now() + Duration::hours(6);

        Mock::given(method("GET"))
            .and(path("/club-schedule/TOR/week/now"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(schedule_body(vec![game(soon, "TOR", "MTL")])),
            )
            .mount(&server)
            .await;

        let client = NhlClient::new(reqwest::Client::new(), server.uri(), "TOR");
        let next = client.next_game().await.unwrap();

        assert_eq!(next.map(|g| g.opponent), Some("MTL".to_string()));
    }

    /// Tests that an upstream error status surfaces as an error rather
    /// than an empty schedule.
    ///
    /// Expected: Err
    #[tokio::test]
    async fn propagates_upstream_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/club-schedule/TOR/week/now"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = NhlClient::new(reqwest::Client::new(), server.uri(), "TOR");
        let result = client.next_game().await;

        assert!(result.is_err());
    }
}
