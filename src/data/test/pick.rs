use super::*;
use crate::{data::pick::PickRepository, model::pick::CreatePickParam};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

/// Tests that pick numbers count up per game across all users.
///
/// Expected: Ok with pick numbers 1, 2 for the same game and 1 for a
/// different game date
#[tokio::test]
async fn assigns_sequential_pick_numbers_per_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user_a = factory::user::create_user(db).await?;
    let user_b = factory::user::create_user(db).await?;

    let game_one = Utc.with_ymd_and_hms(2026, 1, 10, 19, 0, 0).unwrap();
    let game_two = Utc.with_ymd_and_hms(2026, 1, 12, 19, 0, 0).unwrap();

    let repo = PickRepository::new(db);
    let first = repo
        .create(CreatePickParam {
            user_id: user_a.id,
            player_name: "Matthews".to_string(),
            player_team: "TOR".to_string(),
            game_date: game_one,
        })
        .await?;
    let second = repo
        .create(CreatePickParam {
            user_id: user_b.id,
            player_name: "Nylander".to_string(),
            player_team: "TOR".to_string(),
            game_date: game_one,
        })
        .await?;
    let other_game = repo
        .create(CreatePickParam {
            user_id: user_a.id,
            player_name: "Marner".to_string(),
            player_team: "TOR".to_string(),
            game_date: game_two,
        })
        .await?;

    assert_eq!(first.pick_number, Some(1));
    assert_eq!(second.pick_number, Some(2));
    assert_eq!(other_game.pick_number, Some(1));

    Ok(())
}

/// Tests listing a user's picks with the most recent game first.
///
/// Expected: Ok with picks in descending game date order
#[tokio::test]
async fn get_by_user_orders_recent_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let older = Utc.with_ymd_and_hms(2026, 1, 5, 19, 0, 0).unwrap();
    let newer = Utc.with_ymd_and_hms(2026, 1, 20, 19, 0, 0).unwrap();

    factory::pick::PickFactory::new(db, user.id)
        .player_name("Early")
        .game_date(older)
        .build()
        .await?;
    factory::pick::PickFactory::new(db, user.id)
        .player_name("Late")
        .game_date(newer)
        .build()
        .await?;

    let repo = PickRepository::new(db);
    let picks = repo.get_by_user(user.id).await?;

    let names: Vec<&str> = picks.iter().map(|p| p.player_name.as_str()).collect();
    assert_eq!(names, vec!["Late", "Early"]);

    Ok(())
}

/// Tests summing pick points per user.
///
/// Expected: Ok with only the target user's points counted
#[tokio::test]
async fn total_points_sums_only_own_picks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let rival = factory::user::create_user(db).await?;

    factory::pick::PickFactory::new(db, user.id).points(2).build().await?;
    factory::pick::PickFactory::new(db, user.id).points(3).build().await?;
    factory::pick::PickFactory::new(db, rival.id).points(7).build().await?;

    let repo = PickRepository::new(db);
    assert_eq!(repo.total_points_for_user(user.id).await?, 5);
    assert_eq!(repo.total_points_for_user(rival.id).await?, 7);

    Ok(())
}

/// Tests updating the points on a single pick.
///
/// Expected: Ok with the new value visible in the user's total
#[tokio::test]
async fn set_points_updates_one_pick() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let pick = factory::pick::create_pick(db, user.id).await?;

    let repo = PickRepository::new(db);
    repo.set_points(pick.id, 4).await?;

    assert_eq!(repo.total_points_for_user(user.id).await?, 4);

    Ok(())
}

/// Tests the per-game pick check against UTC day boundaries.
///
/// A pick just before midnight belongs to that calendar date; one at
/// midnight belongs to the next.
///
/// Expected: true only for the date containing the pick's start time
#[tokio::test]
async fn has_pick_for_game_respects_day_boundary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let jan_10 = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
    let jan_11 = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();

    let late_jan_10 = jan_10
        .and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap())
        .and_utc();
    factory::pick::PickFactory::new(db, user.id)
        .game_date(late_jan_10)
        .build()
        .await?;

    let repo = PickRepository::new(db);
    assert!(repo.has_pick_for_game(user.id, jan_10).await?);
    assert!(!repo.has_pick_for_game(user.id, jan_11).await?);

    Ok(())
}
