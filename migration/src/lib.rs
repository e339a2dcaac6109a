pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_accommodation_table;
mod m20260301_000003_create_amenity_table;
mod m20260301_000004_create_accommodation_amenity_table;
mod m20260302_000005_create_booking_table;
mod m20260302_000006_create_payment_table;
mod m20260303_000007_create_review_table;
mod m20260303_000008_create_wishlist_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_accommodation_table::Migration),
            Box::new(m20260301_000003_create_amenity_table::Migration),
            Box::new(m20260301_000004_create_accommodation_amenity_table::Migration),
            Box::new(m20260302_000005_create_booking_table::Migration),
            Box::new(m20260302_000006_create_payment_table::Migration),
            Box::new(m20260303_000007_create_review_table::Migration),
            Box::new(m20260303_000008_create_wishlist_item_table::Migration),
        ]
    }
}
