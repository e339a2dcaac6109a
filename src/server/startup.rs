use axum::http::{header, HeaderValue, Method};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::payment::gateway::{HttpPaymentGateway, PaymentGateway, SimulatedPaymentGateway},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in the same SQLite file as the application data. The store table is
/// created on first start. Sessions expire after `SESSION_EXPIRY_DAYS` of inactivity and
/// the cookie is marked secure when the application is served over HTTPS.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.app_url.scheme() == "https")
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            config.session_expiry_days,
        )));

    Ok(session)
}

/// Builds the HTTP client used for outbound provider calls.
///
/// Redirects are disabled so a misconfigured gateway URL can't bounce requests
/// to other hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(15))
        .build()?;

    Ok(client)
}

/// Selects the payment gateway from configuration.
///
/// With `PAYMENT_GATEWAY_URL` set, charges go to the HTTP provider; otherwise every
/// charge is approved by the simulated gateway.
pub fn setup_payment_gateway(
    config: &Config,
    client: reqwest::Client,
) -> Result<Arc<dyn PaymentGateway>, AppError> {
    let (Some(url), Some(key)) = (&config.payment.gateway_url, &config.payment.gateway_key) else {
        tracing::warn!("PAYMENT_GATEWAY_URL not set, using simulated payment gateway");
        return Ok(Arc::new(SimulatedPaymentGateway));
    };

    let gateway = HttpPaymentGateway::new(client, url, key.clone()).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "PAYMENT_GATEWAY_URL".to_string(),
            value: url.to_string(),
        }
    })?;

    Ok(Arc::new(gateway))
}

/// Allows credentialed requests from the application's own origin.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config.app_url.origin().ascii_serialization();
    let origin = HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "APP_URL".to_string(),
        value: origin.clone(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
