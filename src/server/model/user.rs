//! User domain models and parameters.
//!
//! Provides domain models for marketplace accounts. A user can act as a host (owning
//! listings) and as a guest (booking other listings); the admin flag grants moderation
//! rights over every resource.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Registered marketplace account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lowercased login email.
    pub email: String,
    /// Display name of the user.
    pub name: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            admin: self.admin,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is deliberately dropped; use `UserCredentials` when it is needed.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }
}

/// User together with the stored password digest, used only during login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for inserting a new user.
///
/// The email is expected to be normalised and the password already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub admin: bool,
}

/// Raw registration input before validation and hashing.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub name: String,
    pub password: String,
}
