use crate::model::amenity::AmenityDto;

/// Named feature a listing can offer (wifi, parking, pool, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amenity {
    pub id: i32,
    pub name: String,
}

impl Amenity {
    pub fn into_dto(self) -> AmenityDto {
        AmenityDto {
            id: self.id,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::amenity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
