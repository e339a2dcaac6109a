//! User service for listing accounts and managing admin rights.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::{PageRequest, Paginated},
        user::User,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves one page of users ordered by ID.
    pub async fn get_all_users(&self, page: PageRequest) -> Result<Paginated<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all_paginated(page).await?)
    }

    /// Grants or revokes admin rights.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn set_admin(&self, id: i32, admin: bool) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .set_admin(id, admin)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!("Set admin={} for user {}", admin, user.id);

        Ok(user)
    }
}
