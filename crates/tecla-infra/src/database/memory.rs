//! In-memory profile repository - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tecla_core::domain::User;
use tecla_core::error::{RepoError, UniqueField};
use tecla_core::ports::UserRepository;

/// Profile store backed by a HashMap with an async RwLock.
///
/// Uniqueness of uid and email is enforced under the write lock, so it
/// behaves like the database constraints. Data is lost on process restart.
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn email_owner<'a>(store: &'a HashMap<String, User>, email: &str) -> Option<&'a User> {
        let email = email.to_lowercase();
        store.values().find(|u| u.email() == email)
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;

        if store.contains_key(user.uid()) {
            return Err(RepoError::Duplicate {
                field: UniqueField::Uid,
                value: user.uid().to_string(),
            });
        }
        if Self::email_owner(&store, user.email()).is_some() {
            return Err(RepoError::Duplicate {
                field: UniqueField::Email,
                value: user.email().to_string(),
            });
        }

        store.insert(user.uid().to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(uid).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(Self::email_owner(&store, email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let store = self.store.read().await;
        let mut users: Vec<User> = store.values().cloned().collect();
        users.sort_by(|a, b| a.uid().cmp(b.uid()));
        Ok(users)
    }

    async fn exists_by_uid(&self, uid: &str) -> Result<bool, RepoError> {
        Ok(self.store.read().await.contains_key(uid))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        let store = self.store.read().await;
        Ok(Self::email_owner(&store, email).is_some())
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;

        if !store.contains_key(user.uid()) {
            return Err(RepoError::NotFound(format!(
                "User with UID {} not found",
                user.uid()
            )));
        }
        if Self::email_owner(&store, user.email()).is_some_and(|owner| owner.uid() != user.uid()) {
            return Err(RepoError::Duplicate {
                field: UniqueField::Email,
                value: user.email().to_string(),
            });
        }

        store.insert(user.uid().to_string(), user.clone());
        Ok(user)
    }

    async fn delete(&self, uid: &str) -> Result<bool, RepoError> {
        Ok(self.store.write().await.remove(uid).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tecla_core::domain::PianoLevel;

    fn user(uid: &str, email: &str) -> User {
        User::new(uid, email, "Jo", PianoLevel::TierI).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("u1", "a@b.com")).await.unwrap();

        assert!(repo.exists_by_uid("u1").await.unwrap());
        assert!(repo.exists_by_email("A@B.com").await.unwrap());
        assert_eq!(
            repo.find_by_email("a@b.com").await.unwrap().unwrap().uid(),
            "u1"
        );
    }

    #[tokio::test]
    async fn test_create_rejects_duplicates() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("u1", "a@b.com")).await.unwrap();

        let err = repo.create(user("u1", "c@d.com")).await.unwrap_err();
        assert!(matches!(
            err,
            RepoError::Duplicate {
                field: UniqueField::Uid,
                ..
            }
        ));

        let err = repo.create(user("u2", "a@b.com")).await.unwrap_err();
        assert!(matches!(
            err,
            RepoError::Duplicate {
                field: UniqueField::Email,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_and_taken_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("u1", "a@b.com")).await.unwrap();
        repo.create(user("u2", "c@d.com")).await.unwrap();

        let err = repo.update(user("u3", "e@f.com")).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));

        let err = repo.update(user("u2", "a@b.com")).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate { .. }));

        // Keeping one's own email is not a conflict.
        assert!(repo.update(user("u1", "a@b.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_find_all_sorted_and_delete() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("u2", "c@d.com")).await.unwrap();
        repo.create(user("u1", "a@b.com")).await.unwrap();

        let uids: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|u| u.uid().to_string())
            .collect();
        assert_eq!(uids, vec!["u1", "u2"]);

        assert!(repo.delete("u1").await.unwrap());
        assert!(!repo.delete("u1").await.unwrap());
    }
}
