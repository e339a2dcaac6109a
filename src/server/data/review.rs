//! Review data repository, including per-listing rating aggregates.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    pagination::{PageRequest, Paginated},
    review::{CreateReviewParams, RatingSummary, Review},
};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review for a booking of the given listing.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review with the author's display name
    /// - `Err(DbErr)` - Database error, including the unique violation on `booking_id`
    pub async fn create(
        &self,
        accommodation_id: i32,
        params: CreateReviewParams,
    ) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            accommodation_id: ActiveValue::Set(accommodation_id),
            booking_id: ActiveValue::Set(params.booking_id),
            author_id: ActiveValue::Set(params.author_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(entity.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Review with id {} not found after creation",
                entity.id
            )))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let result = entity::prelude::Review::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(review, author)| with_author(review, author)))
    }

    /// Checks whether the booking already has a review.
    pub async fn exists_for_booking(&self, booking_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::BookingId.eq(booking_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets reviews of a listing, newest first.
    pub async fn get_by_accommodation_paginated(
        &self,
        accommodation_id: i32,
        page: PageRequest,
    ) -> Result<Paginated<Review>, DbErr> {
        let paginator = entity::prelude::Review::find()
            .filter(entity::review::Column::AccommodationId.eq(accommodation_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .find_also_related(entity::prelude::User)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let reviews = paginator
            .fetch_page(page.page)
            .await?
            .into_iter()
            .map(|(review, author)| with_author(review, author))
            .collect();

        Ok(Paginated::new(reviews, total, page))
    }

    /// Deletes a review. Returns whether a row was deleted.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Aggregates rating sum and count per listing with a single grouped query.
    ///
    /// Listings without reviews are absent from the returned map.
    pub async fn rating_summaries(
        &self,
        accommodation_ids: &[i32],
    ) -> Result<HashMap<i32, RatingSummary>, DbErr> {
        if accommodation_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64, i64)> = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::AccommodationId)
            .column_as(entity::review::Column::Rating.sum(), "rating_sum")
            .column_as(entity::review::Column::Id.count(), "review_count")
            .filter(entity::review::Column::AccommodationId.is_in(accommodation_ids.to_vec()))
            .group_by(entity::review::Column::AccommodationId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(accommodation_id, sum, count)| {
                (
                    accommodation_id,
                    RatingSummary::from_totals(sum, count.max(0) as u64),
                )
            })
            .collect())
    }
}

fn with_author(review: entity::review::Model, author: Option<entity::user::Model>) -> Review {
    let author_name = author.map(|u| u.name).unwrap_or_default();
    Review::from_entity(review, author_name)
}
