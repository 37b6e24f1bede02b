use super::*;
use crate::{error::AppError, service::standings::StandingsService};

/// Tests that a user's total combines pick points with a linked offline
/// player's running total, and that the linked player gets no row of
/// their own.
///
/// Expected: one row per user plus unlinked offline players, sorted by
/// total descending
#[tokio::test]
async fn standings_fold_linked_offline_points_into_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let linked_player = factory::offline_player::OfflinePlayerFactory::new(db)
        .name("grandpa")
        .total_points(10)
        .build()
        .await?;
    let user = factory::user::UserFactory::new(db)
        .username("wayne")
        .offline_player_id(linked_player.id)
        .build()
        .await?;
    factory::pick::PickFactory::new(db, user.id).points(3).build().await?;

    factory::offline_player::OfflinePlayerFactory::new(db)
        .name("uncle")
        .total_points(5)
        .build()
        .await?;

    let service = StandingsService::new(db);
    let standings = service.standings().await?;

    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].name, "wayne");
    assert_eq!(standings[0].total_points, 13);
    assert!(!standings[0].offline);
    assert_eq!(standings[1].name, "uncle");
    assert_eq!(standings[1].total_points, 5);
    assert!(standings[1].offline);

    Ok(())
}

/// Tests the ordering: highest total first, name breaking ties.
///
/// Expected: stable, deterministic order
#[tokio::test]
async fn standings_sort_by_total_then_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::UserFactory::new(db).username("anna").build().await?;
    let b = factory::user::UserFactory::new(db).username("zoe").build().await?;
    factory::pick::PickFactory::new(db, a.id).points(4).build().await?;
    factory::pick::PickFactory::new(db, b.id).points(4).build().await?;

    let service = StandingsService::new(db);
    let standings = service.standings().await?;

    let names: Vec<&str> = standings.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["anna", "zoe"]);

    Ok(())
}
