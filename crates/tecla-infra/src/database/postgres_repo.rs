//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};

use tecla_core::domain::User;
use tecla_core::error::{RepoError, UniqueField};
use tecla_core::ports::UserRepository;

use super::entity::student::{self, Entity as StudentEntity};
use crate::mask_email;

/// PostgreSQL student profile repository.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn connection_err(err: DbErr) -> RepoError {
    tracing::error!(error = %err, "Database error");
    RepoError::Connection(err.to_string())
}

const PG_UNIQUE_VIOLATION: &str = "duplicate key value violates unique constraint";

/// Classify a failed insert/update. Unique violations name the column from
/// the constraint in the driver message.
fn write_err(err: DbErr, user: &User) -> RepoError {
    let unique_detail = match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => Some(detail),
        _ => {
            let msg = err.to_string();
            msg.contains(PG_UNIQUE_VIOLATION).then_some(msg)
        }
    };

    match unique_detail {
        Some(detail) if detail.contains("email") => RepoError::Duplicate {
            field: UniqueField::Email,
            value: user.email().to_string(),
        },
        Some(_) => RepoError::Duplicate {
            field: UniqueField::Uid,
            value: user.uid().to_string(),
        },
        None if matches!(err, DbErr::RecordNotUpdated) => {
            RepoError::NotFound(format!("User with UID {} not found", user.uid()))
        }
        None => connection_err(err),
    }
}

fn to_domain(model: Option<student::Model>) -> Result<Option<User>, RepoError> {
    model.map(User::try_from).transpose()
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, RepoError> {
        let active: student::ActiveModel = user.clone().into();
        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, &user))?;

        tracing::info!(uid = %model.uid, "Student created");
        User::try_from(model)
    }

    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, RepoError> {
        let model = StudentEntity::find_by_id(uid.to_string())
            .one(&self.db)
            .await
            .map_err(connection_err)?;

        to_domain(model)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding student by email");

        let model = StudentEntity::find()
            .filter(student::Column::Email.eq(email.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(connection_err)?;

        to_domain(model)
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        StudentEntity::find()
            .order_by_asc(student::Column::Uid)
            .all(&self.db)
            .await
            .map_err(connection_err)?
            .into_iter()
            .map(User::try_from)
            .collect()
    }

    async fn exists_by_uid(&self, uid: &str) -> Result<bool, RepoError> {
        let found = StudentEntity::find_by_id(uid.to_string())
            .one(&self.db)
            .await
            .map_err(connection_err)?;

        Ok(found.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        let found = StudentEntity::find()
            .filter(student::Column::Email.eq(email.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(connection_err)?;

        Ok(found.is_some())
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let active: student::ActiveModel = user.clone().into();
        let model = active
            .update(&self.db)
            .await
            .map_err(|e| write_err(e, &user))?;

        tracing::info!(uid = %model.uid, "Student updated");
        User::try_from(model)
    }

    async fn delete(&self, uid: &str) -> Result<bool, RepoError> {
        let result = StudentEntity::delete_by_id(uid.to_string())
            .exec(&self.db)
            .await
            .map_err(connection_err)?;

        Ok(result.rows_affected > 0)
    }
}
