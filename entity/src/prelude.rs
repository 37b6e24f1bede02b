pub use super::offline_player::Entity as OfflinePlayer;
pub use super::pick::Entity as Pick;
pub use super::setting::Entity as Setting;
pub use super::user::Entity as User;
