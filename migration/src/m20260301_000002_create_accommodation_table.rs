use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accommodation::Table)
                    .if_not_exists()
                    .col(pk_auto(Accommodation::Id))
                    .col(integer(Accommodation::OwnerId))
                    .col(string(Accommodation::Title))
                    .col(text(Accommodation::Description))
                    .col(string(Accommodation::City))
                    .col(string(Accommodation::CityKey))
                    .col(string(Accommodation::Address))
                    .col(big_integer(Accommodation::PricePerNight))
                    .col(integer(Accommodation::MaxGuests))
                    .col(date(Accommodation::AvailableFrom))
                    .col(date(Accommodation::AvailableTo))
                    .col(
                        timestamp_with_time_zone(Accommodation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Accommodation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accommodation_owner_id")
                            .from(Accommodation::Table, Accommodation::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_accommodation_city")
                    .table(Accommodation::Table)
                    .col(Accommodation::CityKey)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accommodation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Accommodation {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    City,
    CityKey,
    Address,
    PricePerNight,
    MaxGuests,
    AvailableFrom,
    AvailableTo,
    CreatedAt,
    UpdatedAt,
}
