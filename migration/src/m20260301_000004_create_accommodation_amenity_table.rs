use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_accommodation_table::Accommodation,
    m20260301_000003_create_amenity_table::Amenity,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccommodationAmenity::Table)
                    .if_not_exists()
                    .col(integer(AccommodationAmenity::AccommodationId))
                    .col(integer(AccommodationAmenity::AmenityId))
                    .primary_key(
                        Index::create()
                            .col(AccommodationAmenity::AccommodationId)
                            .col(AccommodationAmenity::AmenityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accommodation_amenity_accommodation_id")
                            .from(
                                AccommodationAmenity::Table,
                                AccommodationAmenity::AccommodationId,
                            )
                            .to(Accommodation::Table, Accommodation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accommodation_amenity_amenity_id")
                            .from(AccommodationAmenity::Table, AccommodationAmenity::AmenityId)
                            .to(Amenity::Table, Amenity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccommodationAmenity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccommodationAmenity {
    Table,
    AccommodationId,
    AmenityId,
}
