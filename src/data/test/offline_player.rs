use super::*;
use crate::{
    data::offline_player::OfflinePlayerRepository,
    model::offline_player::PastPick,
};
use chrono::NaiveDate;
use serde_json::json;

/// Tests creating an offline player with empty ledgers.
///
/// Expected: Ok with zero points and no past picks
#[tokio::test]
async fn creates_offline_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OfflinePlayerRepository::new(db);
    let player = repo
        .create("Uncle Bob".to_string(), Some(4))
        .await
        .unwrap();

    assert_eq!(player.name, "Uncle Bob");
    assert_eq!(player.total_points, 0);
    assert!(player.past_picks.is_empty());
    assert_eq!(player.draft_position, Some(4));

    Ok(())
}

/// Tests appending to the past-picks ledger across two calls.
///
/// Expected: Ok with both entries present in insertion order
#[tokio::test]
async fn add_pick_appends_to_ledger() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::offline_player::create_offline_player(db).await?;

    let repo = OfflinePlayerRepository::new(db);
    repo.add_pick(
        created.id,
        PastPick {
            game_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            player_name: "Matthews".to_string(),
            player_team: "TOR".to_string(),
        },
    )
    .await
    .unwrap();
    repo.add_pick(
        created.id,
        PastPick {
            game_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            player_name: "Crosby".to_string(),
            player_team: "PIT".to_string(),
        },
    )
    .await
    .unwrap();

    let player = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(player.past_picks.len(), 2);
    assert_eq!(player.past_picks[0].player_name, "Matthews");
    assert_eq!(player.past_picks[1].player_team, "PIT");

    Ok(())
}

/// Tests recording per-game points and the separate running total.
///
/// Expected: Ok with the ledger entry and total both readable
#[tokio::test]
async fn records_game_points_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::offline_player::create_offline_player(db).await?;
    let game_date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();

    let repo = OfflinePlayerRepository::new(db);
    repo.set_game_points(created.id, game_date, 3).await.unwrap();
    repo.set_total_points(created.id, 3).await?;

    let player = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(player.past_game_points.get(&game_date), Some(&3));
    assert_eq!(player.total_points, 3);

    Ok(())
}

/// Tests that positioned() skips players without a draft slot and sorts
/// the rest by position.
///
/// Expected: Ok with slot holders in ascending order
#[tokio::test]
async fn positioned_returns_slot_holders_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let second = factory::offline_player::OfflinePlayerFactory::new(db)
        .draft_position(2)
        .build()
        .await?;
    let first = factory::offline_player::OfflinePlayerFactory::new(db)
        .draft_position(1)
        .build()
        .await?;
    factory::offline_player::create_offline_player(db).await?;

    let repo = OfflinePlayerRepository::new(db);
    let positioned = repo.positioned().await.unwrap();

    let ids: Vec<i32> = positioned.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that a pre-existing ledger stored as JSON parses into the
/// domain model.
///
/// Expected: Ok with typed ledger entries
#[tokio::test]
async fn parses_stored_json_ledgers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::offline_player::OfflinePlayerFactory::new(db)
        .past_picks(json!([
            { "game_date": "2026-01-10", "player_name": "Matthews", "player_team": "TOR" }
        ]))
        .past_game_points(json!({ "2026-01-10": 2 }))
        .total_points(2)
        .build()
        .await?;

    let repo = OfflinePlayerRepository::new(db);
    let player = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(player.past_picks.len(), 1);
    assert_eq!(
        player
            .past_game_points
            .get(&NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()),
        Some(&2)
    );
    assert_eq!(player.total_points, 2);

    Ok(())
}
