use super::*;
use crate::{
    error::AppError,
    model::user::User,
    nhl::{NextGame, ScheduleSource},
    notify::Notifier,
    service::{
        draft::DraftService,
        rotation::{RotationService, RotationState},
    },
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::{
    path::PathBuf,
    sync::Mutex,
};
use test_utils::factory::helpers::next_id;

/// Schedule source returning a fixed answer.
struct StubSchedule {
    next: Option<NextGame>,
}

#[async_trait]
impl ScheduleSource for StubSchedule {
    async fn next_game(&self) -> Result<Option<NextGame>, AppError> {
        Ok(self.next.clone())
    }
}

/// Notifier that records who would have been notified.
#[derive(Default)]
struct RecordingNotifier {
    notified: Mutex<Vec<(i32, DateTime<Utc>)>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_pick_turn(
        &self,
        user: &User,
        game_time: DateTime<Utc>,
    ) -> Result<(), AppError> {
        self.notified
            .lock()
            .unwrap()
            .push((user.id, game_time));
        Ok(())
    }
}

fn temp_state_path() -> PathBuf {
    std::env::temp_dir().join(format!("puckpool_rotation_test_{}.json", next_id()))
}

fn game(opponent: &str, year: i32, month: u32, day: u32) -> NextGame {
    NextGame {
        opponent: opponent.to_string(),
        game_time: Utc.with_ymd_and_hms(year, month, day, 19, 0, 0).unwrap(),
    }
}

struct StateFileGuard(PathBuf);

impl Drop for StateFileGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

/// Tests that the first poller pass only seeds the state file.
///
/// Expected: Ok(false) with the observed opponent persisted
#[tokio::test]
async fn first_run_seeds_state_without_rotating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_positioned_user(db, 1).await?;
    factory::user::create_positioned_user(db, 2).await?;

    let state_path = temp_state_path();
    let _guard = StateFileGuard(state_path.clone());
    let schedule = StubSchedule {
        next: Some(game("BOS", 2026, 1, 10)),
    };
    let notifier = RecordingNotifier::default();

    let service = RotationService::new(db, &schedule, &notifier, state_path.clone());
    assert!(!service.check_and_rotate().await?);

    let state = RotationState::load(&state_path)?.unwrap();
    assert_eq!(state.last_opponent.as_deref(), Some("BOS"));
    assert!(notifier.notified.lock().unwrap().is_empty());

    Ok(())
}

/// Tests a regular season opponent change: rotation happens, the state
/// file updates, and the new first picker is notified.
///
/// Expected: Ok(true) with the order rotated and one notification sent
#[tokio::test]
async fn opponent_change_rotates_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alice")
        .draft_position(1)
        .build()
        .await?;
    let bob = factory::user::UserFactory::new(db)
        .username("bob")
        .draft_position(2)
        .build()
        .await?;

    let state_path = temp_state_path();
    let _guard = StateFileGuard(state_path.clone());
    RotationState {
        last_opponent: Some("MTL".to_string()),
        last_game_date: Some("2026-01-08".to_string()),
    }
    .store(&state_path)?;

    let next = game("BOS", 2026, 1, 10);
    let schedule = StubSchedule {
        next: Some(next.clone()),
    };
    let notifier = RecordingNotifier::default();

    let service = RotationService::new(db, &schedule, &notifier, state_path.clone());
    assert!(service.check_and_rotate().await?);

    let state = RotationState::load(&state_path)?.unwrap();
    assert_eq!(state.last_opponent.as_deref(), Some("BOS"));

    let order = DraftService::new(db).participants().await?;
    let names: Vec<&str> = order.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["bob", "alice"]);

    let notified = notifier.notified.lock().unwrap();
    assert_eq!(notified.as_slice(), &[(bob.id, next.game_time)]);

    Ok(())
}

/// Tests that an unchanged opponent leaves everything alone.
///
/// Expected: Ok(false) with no rotation or notification
#[tokio::test]
async fn same_opponent_is_a_no_op() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alice")
        .draft_position(1)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("bob")
        .draft_position(2)
        .build()
        .await?;

    let state_path = temp_state_path();
    let _guard = StateFileGuard(state_path.clone());
    RotationState {
        last_opponent: Some("BOS".to_string()),
        last_game_date: None,
    }
    .store(&state_path)?;

    let schedule = StubSchedule {
        next: Some(game("BOS", 2026, 1, 10)),
    };
    let notifier = RecordingNotifier::default();

    let service = RotationService::new(db, &schedule, &notifier, state_path);
    assert!(!service.check_and_rotate().await?);

    let order = DraftService::new(db).participants().await?;
    assert_eq!(order[0].name(), "alice");
    assert!(notifier.notified.lock().unwrap().is_empty());

    Ok(())
}

/// Tests playoff mode: the opponent repeats but the game date moves, so
/// the order still rotates.
///
/// Expected: Ok(true) on a date change with an unchanged opponent
#[tokio::test]
async fn playoff_mode_rotates_on_date_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::setting::create_setting(db, "playoff_mode", "true").await?;
    factory::user::UserFactory::new(db)
        .username("alice")
        .draft_position(1)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("bob")
        .draft_position(2)
        .build()
        .await?;

    let state_path = temp_state_path();
    let _guard = StateFileGuard(state_path.clone());
    RotationState {
        last_opponent: Some("BOS".to_string()),
        last_game_date: Some("2026-05-01".to_string()),
    }
    .store(&state_path)?;

    let schedule = StubSchedule {
        next: Some(game("BOS", 2026, 5, 3)),
    };
    let notifier = RecordingNotifier::default();

    let service = RotationService::new(db, &schedule, &notifier, state_path.clone());
    assert!(service.check_and_rotate().await?);

    let state = RotationState::load(&state_path)?.unwrap();
    assert_eq!(state.last_game_date.as_deref(), Some("2026-05-03"));

    let order = DraftService::new(db).participants().await?;
    assert_eq!(order[0].name(), "bob");

    Ok(())
}

/// Tests that a missing schedule skips the check entirely.
///
/// Expected: Ok(false) with no state file written
#[tokio::test]
async fn missing_schedule_skips_check() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let state_path = temp_state_path();
    let _guard = StateFileGuard(state_path.clone());
    let schedule = StubSchedule { next: None };
    let notifier = RecordingNotifier::default();

    let service = RotationService::new(db, &schedule, &notifier, state_path.clone());
    assert!(!service.check_and_rotate().await?);
    assert!(!state_path.exists());

    Ok(())
}
