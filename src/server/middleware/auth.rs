use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{accommodation::AccommodationRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Access requirement checked against the logged-in user.
///
/// Admins satisfy every permission.
pub enum Permission {
    Admin,
    /// User owns the accommodation with this ID.
    AccommodationOwner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every permission.
    ///
    /// An empty permission list only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - User is logged in and holds all permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    /// - `Err(AppError::NotFound)` - Accommodation named by a permission does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if user.admin {
            return Ok(user);
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    return Err(AuthError::AccessDenied(
                        user_id,
                        "User attempted an admin-only action without admin permissions"
                            .to_string(),
                    )
                    .into());
                }
                Permission::AccommodationOwner(accommodation_id) => {
                    let owner_id = AccommodationRepository::new(self.db)
                        .find_owner_id(*accommodation_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound("Accommodation not found".to_string())
                        })?;

                    if owner_id != user.id {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!(
                                "User attempted to manage accommodation {} owned by user {}",
                                accommodation_id, owner_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
