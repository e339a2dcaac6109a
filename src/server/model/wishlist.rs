use chrono::{DateTime, Utc};

use crate::{model::wishlist::WishlistEntryDto, server::model::accommodation::Accommodation};

/// Accommodation saved by a user, with the time it was saved.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub accommodation: Accommodation,
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    pub fn into_dto(self) -> WishlistEntryDto {
        WishlistEntryDto {
            accommodation: self.accommodation.into_dto(),
            added_at: self.added_at,
        }
    }
}
