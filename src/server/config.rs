use std::str::FromStr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_PAGE_SIZE: u64 = 10;
const DEFAULT_MAX_PAGE_SIZE: u64 = 100;
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;
const DEFAULT_PENDING_BOOKING_TTL_MINUTES: i64 = 30;
const DEFAULT_PAYMENT_CURRENCY: &str = "usd";

/// Page size limits applied to every paginated endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationConfig {
    /// Entries per page when the client doesn't ask for a size.
    pub default_page_size: u64,
    /// Upper bound for client-requested page sizes.
    pub max_page_size: u64,
}

impl PaginationConfig {
    /// Resolves a client-requested page size against the configured limits.
    ///
    /// Missing or zero sizes fall back to the default; larger sizes are clamped.
    pub fn resolve(&self, requested: Option<u64>) -> u64 {
        match requested {
            Some(0) | None => self.default_page_size,
            Some(size) => size.min(self.max_page_size),
        }
    }
}

/// Settings for the payment provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentConfig {
    /// Base URL of the provider's HTTP API. `None` selects the simulated gateway.
    pub gateway_url: Option<Url>,
    /// Bearer key sent to the provider.
    pub gateway_key: Option<String>,
    /// ISO currency code charged for every booking.
    pub currency: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub app_url: Url,

    pub pagination: PaginationConfig,
    pub session_expiry_days: i64,
    pub pending_booking_ttl: chrono::Duration,

    pub payment: PaymentConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value for a variable name, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(AppError::ConfigErr(_))` - Missing required variable or invalid value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;
        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let app_url = match parse_optional::<_, Url>(&lookup, "APP_URL")? {
            Some(url) => url,
            None => Url::parse(DEFAULT_APP_URL).map_err(|_| ConfigError::InvalidEnvVar {
                name: "APP_URL".to_string(),
                value: DEFAULT_APP_URL.to_string(),
            })?,
        };

        let pagination = PaginationConfig {
            default_page_size: parse_or(&lookup, "PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            max_page_size: parse_or(&lookup, "MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE)?,
        };
        if pagination.default_page_size == 0
            || pagination.default_page_size > pagination.max_page_size
        {
            return Err(ConfigError::InvalidEnvVar {
                name: "PAGE_SIZE".to_string(),
                value: pagination.default_page_size.to_string(),
            }
            .into());
        }

        let session_expiry_days = parse_or(
            &lookup,
            "SESSION_EXPIRY_DAYS",
            DEFAULT_SESSION_EXPIRY_DAYS,
        )?;
        let pending_booking_ttl_minutes: i64 = parse_or(
            &lookup,
            "PENDING_BOOKING_TTL_MINUTES",
            DEFAULT_PENDING_BOOKING_TTL_MINUTES,
        )?;

        let gateway_url: Option<Url> = parse_optional(&lookup, "PAYMENT_GATEWAY_URL")?;
        let gateway_key = match gateway_url {
            Some(_) => Some(required(&lookup, "PAYMENT_GATEWAY_KEY")?),
            None => lookup("PAYMENT_GATEWAY_KEY"),
        };

        Ok(Self {
            database_url,
            bind_address,
            app_url,
            pagination,
            session_expiry_days,
            pending_booking_ttl: chrono::Duration::minutes(pending_booking_ttl_minutes),
            payment: PaymentConfig {
                gateway_url,
                gateway_key,
                currency: lookup("PAYMENT_CURRENCY")
                    .unwrap_or_else(|| DEFAULT_PAYMENT_CURRENCY.to_string())
                    .to_lowercase(),
            },
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    Ok(parse_optional(lookup, name)?.unwrap_or(default))
}

fn parse_optional<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(name)
        .map(|value| {
            value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            })
        })
        .transpose()
}
