use crate::server::{
    data::accommodation::AccommodationRepository,
    model::{
        accommodation::{
            AccommodationFields, AccommodationFilter, CreateAccommodationParams,
            UpdateAccommodationParams,
        },
        pagination::PageRequest,
    },
};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, accommodation::AccommodationFactory},
};

mod create;
mod delete;
mod search;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fields(title: &str, amenity_ids: Vec<i32>) -> AccommodationFields {
    AccommodationFields {
        title: title.to_string(),
        description: "Quiet flat".to_string(),
        city: "Lisbon".to_string(),
        address: "Rua 1".to_string(),
        price_per_night: 12_000,
        max_guests: 3,
        available_from: date(2030, 1, 1),
        available_to: date(2030, 12, 31),
        amenity_ids,
    }
}

const FIRST_PAGE: PageRequest = PageRequest {
    page: 0,
    per_page: 10,
};
