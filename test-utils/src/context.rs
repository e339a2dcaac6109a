use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Inactivity expiry of test sessions, matching the server's `SESSION_EXPIRY_DAYS` default.
pub const SESSION_EXPIRY_DAYS: i64 = 7;

/// In-memory marketplace database plus an optional session stored in it.
///
/// Built by `TestBuilder::build`. The session table is only created when a test asks
/// for a session.
pub struct TestContext {
    pub db: DatabaseConnection,
    session: Option<Session>,
}

impl TestContext {
    /// Opens a fresh in-memory SQLite database and creates `tables` in order.
    pub(crate) async fn connect(tables: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for table in tables {
            db.execute(&table).await?;
        }

        Ok(Self { db, session: None })
    }

    /// Gets the test session, creating the session store on first use.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Session backed by the test database
    /// - `Err(TestError::Database)` - Session table could not be migrated
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = SqliteStore::new(self.db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(SESSION_EXPIRY_DAYS))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("session not initialized".to_string()).into())
    }

    /// Gets the database and the session together, for auth guard tests.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        let session = self
            .session
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("session not initialized".to_string()))?;

        Ok((&self.db, session))
    }
}
