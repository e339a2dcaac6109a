//! Accommodation factory for creating test listings.

use crate::factory::helpers::{days_from_today, next_id};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test listings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let listing = AccommodationFactory::new(&db, host.id)
///     .city("Porto")
///     .max_guests(6)
///     .build()
///     .await?;
/// ```
pub struct AccommodationFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    title: String,
    city: String,
    price_per_night: i64,
    max_guests: i32,
    available_from: NaiveDate,
    available_to: NaiveDate,
    created_at: DateTime<Utc>,
}

impl<'a> AccommodationFactory<'a> {
    /// Creates a new AccommodationFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Listing {id}"`
    /// - city: `"Springfield"`
    /// - price_per_night: `10_000`
    /// - max_guests: `4`
    /// - window: today until 365 days from today
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            title: format!("Listing {}", id),
            city: "Springfield".to_string(),
            price_per_night: 10_000,
            max_guests: 4,
            available_from: days_from_today(0),
            available_to: days_from_today(365),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn price_per_night(mut self, price_per_night: i64) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    pub fn max_guests(mut self, max_guests: i32) -> Self {
        self.max_guests = max_guests;
        self
    }

    /// Sets the availability window.
    pub fn window(mut self, available_from: NaiveDate, available_to: NaiveDate) -> Self {
        self.available_from = available_from;
        self.available_to = available_to;
        self
    }

    /// Overrides the creation timestamp, used to control newest-first ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the listing.
    ///
    /// # Returns
    /// - `Ok(entity::accommodation::Model)` - Created listing
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::accommodation::Model, DbErr> {
        entity::accommodation::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(String::new()),
            city_key: ActiveValue::Set(self.city.trim().to_lowercase()),
            city: ActiveValue::Set(self.city),
            address: ActiveValue::Set(String::new()),
            price_per_night: ActiveValue::Set(self.price_per_night),
            max_guests: ActiveValue::Set(self.max_guests),
            available_from: ActiveValue::Set(self.available_from),
            available_to: ActiveValue::Set(self.available_to),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a listing with default values owned by `owner_id`.
pub async fn create_accommodation(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::accommodation::Model, DbErr> {
    AccommodationFactory::new(db, owner_id).build().await
}
