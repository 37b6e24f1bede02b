use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};
use test_utils::{builder::TestBuilder, factory};

/// Tests resolving a logged-in user with no extra permissions.
///
/// Expected: Ok(User) matching the session's user id
#[tokio::test]
async fn resolves_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests that an empty session is rejected.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn rejects_missing_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests a session pointing at a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_stale_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(9999).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9999)))
    ));

    Ok(())
}

/// Tests the admin permission for an admin user.
///
/// Expected: Ok(User) with is_admin set
#[tokio::test]
async fn allows_admin_for_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db).admin(true).build().await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_admin);

    Ok(())
}

/// Tests the admin permission for a regular user.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_for_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that clearing the session logs the user out.
///
/// Expected: get_user_id returns None after clear
#[tokio::test]
async fn clear_removes_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_pool_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(user.id));

    auth_session.clear().await;
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
