//! Membership service

use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{CreateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Register a new member
    pub async fn create(&self, user: CreateUser) -> AppResult<User> {
        user.validate()?;

        let created = self.repository.users.create(&user).await?;
        tracing::info!("Created user id={}", created.id);
        Ok(created)
    }
}
