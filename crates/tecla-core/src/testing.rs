//! Recording fakes for the ports, shared by the service and use-case tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{AuthCredential, LoginSession, PianoLevel, TokenPair, User};
use crate::error::{IdentityError, RepoError, UniqueField};
use crate::ports::{IdentityProvider, UserRepository};

pub fn user(uid: &str, email: &str, name: &str, level: PianoLevel) -> User {
    User::new(uid, email, name, level).unwrap()
}

/// Profile store that records every port call by name.
#[derive(Default)]
pub struct FakeUserRepository {
    rows: Mutex<BTreeMap<String, User>>,
    calls: Mutex<Vec<&'static str>>,
    fail_on: Mutex<Option<(&'static str, RepoError)>>,
}

impl FakeUserRepository {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::default();
        {
            let mut rows = repo.rows.lock().unwrap();
            for user in users {
                rows.insert(user.uid().to_string(), user);
            }
        }
        repo
    }

    /// Make the first call to the port method `call` fail with `err`.
    pub fn fail_on(&self, call: &'static str, err: RepoError) {
        *self.fail_on.lock().unwrap() = Some((call, err));
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls().iter().any(|c| *c == name)
    }

    fn record(&self, name: &'static str) -> Result<(), RepoError> {
        self.calls.lock().unwrap().push(name);
        let mut fail_on = self.fail_on.lock().unwrap();
        match fail_on.take() {
            Some((call, err)) if call == name => Err(err),
            other => {
                *fail_on = other;
                Ok(())
            }
        }
    }

    fn email_taken_by_other(rows: &BTreeMap<String, User>, user: &User) -> bool {
        rows.values()
            .any(|u| u.email() == user.email() && u.uid() != user.uid())
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn create(&self, user: User) -> Result<User, RepoError> {
        self.record("create")?;
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(user.uid()) {
            return Err(RepoError::Duplicate {
                field: UniqueField::Uid,
                value: user.uid().to_string(),
            });
        }
        if Self::email_taken_by_other(&rows, &user) {
            return Err(RepoError::Duplicate {
                field: UniqueField::Email,
                value: user.email().to_string(),
            });
        }
        rows.insert(user.uid().to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, RepoError> {
        self.record("find_by_uid")?;
        Ok(self.rows.lock().unwrap().get(uid).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        self.record("find_by_email")?;
        let email = email.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email() == email)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        self.record("find_all")?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn exists_by_uid(&self, uid: &str) -> Result<bool, RepoError> {
        self.record("exists_by_uid")?;
        Ok(self.rows.lock().unwrap().contains_key(uid))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        self.record("exists_by_email")?;
        let email = email.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .any(|u| u.email() == email))
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        self.record("update")?;
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(user.uid()) {
            return Err(RepoError::NotFound(format!(
                "User with UID {} not found",
                user.uid()
            )));
        }
        if Self::email_taken_by_other(&rows, &user) {
            return Err(RepoError::Duplicate {
                field: UniqueField::Email,
                value: user.email().to_string(),
            });
        }
        rows.insert(user.uid().to_string(), user.clone());
        Ok(user)
    }

    async fn delete(&self, uid: &str) -> Result<bool, RepoError> {
        self.record("delete")?;
        Ok(self.rows.lock().unwrap().remove(uid).is_some())
    }
}

/// Identity provider answering from a script and counting calls.
#[derive(Default)]
pub struct FakeIdentityProvider {
    calls: Mutex<usize>,
    fail_with: Mutex<Option<IdentityError>>,
}

impl FakeIdentityProvider {
    pub fn failing(err: IdentityError) -> Self {
        Self {
            calls: Mutex::new(0),
            fail_with: Mutex::new(Some(err)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn record(&self) -> Result<(), IdentityError> {
        *self.calls.lock().unwrap() += 1;
        match self.fail_with.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn register_credentials(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<AuthCredential, IdentityError> {
        self.record()?;
        AuthCredential::new("fake-uid", email).map_err(|e| IdentityError::Provider(e.to_string()))
    }

    async fn login(&self, email: &str, _password: &str) -> Result<LoginSession, IdentityError> {
        self.record()?;
        LoginSession::new("fake-uid", email, "id-token", "refresh-token")
            .map_err(|e| IdentityError::Provider(e.to_string()))
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, IdentityError> {
        self.record()?;
        TokenPair::new(format!("id-for-{refresh_token}"), "rotated")
            .map_err(|e| IdentityError::Provider(e.to_string()))
    }
}
