use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// In-memory user store.
///
/// Enforces the same username uniqueness constraint as the Postgres adapter.
/// Backs the integration tests; contents do not survive the process.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| UserError::Unknown("user store lock poisoned".to_string()))?;

        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self
            .users
            .read()
            .map_err(|_| UserError::Unknown("user store lock poisoned".to_string()))?;

        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let users = self
            .users
            .read()
            .map_err(|_| UserError::Unknown("user store lock poisoned".to_string()))?;

        // Insertion order, mirroring the Postgres adapter's created_at order
        Ok(users.clone())
    }
}
