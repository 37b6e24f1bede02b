//! Setting domain model.

/// A single key/value configuration entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

impl Setting {
    pub fn from_entity(entity: entity::setting::Model) -> Self {
        Self {
            key: entity.key,
            value: entity.value,
        }
    }
}
