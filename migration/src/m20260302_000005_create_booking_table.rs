use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000002_create_accommodation_table::Accommodation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::AccommodationId))
                    .col(integer(Booking::GuestId))
                    .col(date(Booking::StartDate))
                    .col(date(Booking::EndDate))
                    .col(integer(Booking::Guests))
                    .col(big_integer(Booking::TotalPrice))
                    .col(string(Booking::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Booking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_accommodation_id")
                            .from(Booking::Table, Booking::AccommodationId)
                            .to(Accommodation::Table, Accommodation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_guest_id")
                            .from(Booking::Table, Booking::GuestId)
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
                    .name("idx_booking_accommodation_start")
                    .table(Booking::Table)
                    .col(Booking::AccommodationId)
                    .col(Booking::StartDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    AccommodationId,
    GuestId,
    StartDate,
    EndDate,
    Guests,
    TotalPrice,
    Status,
    CreatedAt,
    UpdatedAt,
}
