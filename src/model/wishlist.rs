use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::accommodation::AccommodationDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WishlistEntryDto {
    pub accommodation: AccommodationDto,
    pub added_at: DateTime<Utc>,
}
