//! Student profile entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use tecla_core::domain::{PianoLevel, User};
use tecla_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: String,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub piano_level: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
///
/// Rows written by something other than this service can hold values the
/// domain rejects, so this is fallible.
impl TryFrom<Model> for User {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let piano_level: PianoLevel = model.piano_level.parse().map_err(|_| {
            RepoError::Mapping(format!(
                "student {} has unknown piano level '{}'",
                model.uid, model.piano_level
            ))
        })?;

        User::new(model.uid, model.email, model.name, piano_level)
            .map_err(|e| RepoError::Mapping(e.to_string()))
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        Self {
            uid: Set(user.uid().to_string()),
            email: Set(user.email().to_string()),
            name: Set(user.name().to_string()),
            piano_level: Set(user.piano_level().to_string()),
        }
    }
}
