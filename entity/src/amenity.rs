use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "amenity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::accommodation_amenity::Entity")]
    AccommodationAmenity,
}

impl Related<super::accommodation::Entity> for Entity {
    fn to() -> RelationDef {
        super::accommodation_amenity::Relation::Accommodation.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::accommodation_amenity::Relation::Amenity.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
