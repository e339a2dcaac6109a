//! Query parameters shared by several endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::server::{
    config::PaginationConfig,
    error::AppError,
    model::{accommodation::AccommodationFilter, pagination::PageRequest},
    util::parse::parse_id_list,
};

#[derive(Deserialize, Debug, Default)]
pub struct PaginationParam {
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    /// Requested page size; missing or zero uses the configured default.
    pub entries: Option<u64>,
}

impl PaginationParam {
    pub fn resolve(&self, config: &PaginationConfig) -> PageRequest {
        PageRequest {
            page: self.page,
            per_page: config.resolve(self.entries),
        }
    }
}

/// Browse filters for `GET /api/accommodations`.
#[derive(Deserialize, Debug, Default)]
pub struct AccommodationQuery {
    #[serde(default)]
    pub page: u64,
    pub entries: Option<u64>,
    pub city: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub guests: Option<i32>,
    /// Comma-separated amenity IDs, e.g. `1,4,7`.
    pub amenity: Option<String>,
    pub available_from: Option<NaiveDate>,
    pub available_to: Option<NaiveDate>,
}

impl AccommodationQuery {
    pub fn pagination(&self) -> PaginationParam {
        PaginationParam {
            page: self.page,
            entries: self.entries,
        }
    }

    /// Converts the query into a repository filter.
    ///
    /// # Returns
    /// - `Ok(AccommodationFilter)` - Parsed filter with blank values dropped
    /// - `Err(AppError::BadRequest)` - Malformed amenity list or only one stay date given
    pub fn into_filter(self) -> Result<AccommodationFilter, AppError> {
        let amenity_ids = match &self.amenity {
            Some(list) => parse_id_list(list)?,
            None => Vec::new(),
        };

        let stay = match (self.available_from, self.available_to) {
            (Some(from), Some(to)) => Some((from, to)),
            (None, None) => None,
            _ => {
                return Err(AppError::BadRequest(
                    "available_from and available_to must be given together".to_string(),
                ))
            }
        };

        let city = self
            .city
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(AccommodationFilter {
            city,
            min_price: self.min_price,
            max_price: self.max_price,
            guests: self.guests,
            amenity_ids,
            stay,
        })
    }
}
