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
                    .table(WishlistItem::Table)
                    .if_not_exists()
                    .col(integer(WishlistItem::UserId))
                    .col(integer(WishlistItem::AccommodationId))
                    .col(
                        timestamp_with_time_zone(WishlistItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(WishlistItem::UserId)
                            .col(WishlistItem::AccommodationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_item_user_id")
                            .from(WishlistItem::Table, WishlistItem::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_item_accommodation_id")
                            .from(WishlistItem::Table, WishlistItem::AccommodationId)
                            .to(Accommodation::Table, Accommodation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WishlistItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WishlistItem {
    Table,
    UserId,
    AccommodationId,
    CreatedAt,
}
