//! Account registration and password login.
//!
//! Sessions are handled by the controller through `AuthSession`; this service only
//! validates input and checks credentials.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterParams, User},
    util::password::{hash_password, verify_password},
};

const MIN_PASSWORD_LEN: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The email is trimmed and lowercased before the uniqueness check. The first
    /// account ever registered is granted admin rights.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::BadRequest)` - Malformed email, empty name or short password
    /// - `Err(AuthError::EmailTaken)` - Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let email = params.email.trim().to_lowercase();
        let name = params.name.trim().to_string();

        if !email.contains('@') {
            return Err(AppError::BadRequest("Email address is invalid".to_string()));
        }
        if name.is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }
        if params.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&email).await? {
            return Err(AuthError::EmailTaken(email).into());
        }

        let admin = user_repo.count().await? == 0;

        let user = user_repo
            .create(CreateUserParams {
                email,
                name,
                password_hash: hash_password(&params.password),
                admin,
            })
            .await?;

        if admin {
            tracing::info!("Granted admin to first registered user {}", user.id);
        }

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();

        let credentials = UserRepository::new(self.db)
            .find_credentials_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credentials.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn params(email: &str, password: &str) -> RegisterParams {
        RegisterParams {
            email: email.to_string(),
            name: "Ada".to_string(),
            password: password.to_string(),
        }
    }

    /// Tests that the first account becomes admin and later ones don't.
    ///
    /// Expected: first user admin, second user not admin, emails lowercased
    #[tokio::test]
    async fn first_user_becomes_admin() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
        let db = &test.db;
        let service = AuthService::new(db);

        let first = service
            .register(params("  Ada@Example.com ", "password123"))
            .await?;
        let second = service
            .register(params("bob@example.com", "password123"))
            .await?;

        assert!(first.admin);
        assert_eq!(first.email, "ada@example.com");
        assert!(!second.admin);

        Ok(())
    }

    /// Tests that an email can't be registered twice regardless of case.
    ///
    /// Expected: Err(AuthError::EmailTaken)
    #[tokio::test]
    async fn rejects_duplicate_email() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
        let db = &test.db;
        let service = AuthService::new(db);

        service.register(params("ada@example.com", "password123")).await?;
        let result = service.register(params("ADA@example.com", "password123")).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::EmailTaken(_)))
        ));

        Ok(())
    }

    /// Tests input validation during registration.
    ///
    /// Expected: Err(AppError::BadRequest) for a missing '@' and a short password
    #[tokio::test]
    async fn rejects_invalid_registration() {
        let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
        let db = &test.db;
        let service = AuthService::new(db);

        assert!(matches!(
            service.register(params("not-an-email", "password123")).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.register(params("ada@example.com", "short")).await,
            Err(AppError::BadRequest(_))
        ));
    }

    /// Tests login with correct and incorrect credentials.
    ///
    /// Expected: Ok for the right password, InvalidCredentials otherwise
    #[tokio::test]
    async fn login_checks_credentials() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
        let db = &test.db;
        let service = AuthService::new(db);

        let user = service
            .register(params("ada@example.com", "password123"))
            .await?;

        let logged_in = service.login("ADA@example.com", "password123").await?;
        assert_eq!(logged_in.id, user.id);

        for (email, password) in [
            ("ada@example.com", "wrong-password"),
            ("nobody@example.com", "password123"),
        ] {
            assert!(matches!(
                service.login(email, password).await,
                Err(AppError::AuthErr(AuthError::InvalidCredentials))
            ));
        }

        Ok(())
    }
}
