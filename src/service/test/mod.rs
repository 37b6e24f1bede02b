use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod rotation;
mod standings;
