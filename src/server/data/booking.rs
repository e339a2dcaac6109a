//! Booking data repository.
//!
//! Statuses are stored as lowercase strings and parsed into `BookingStatus` at this
//! boundary, which is why reads return `AppError` rather than `DbErr`: a corrupted
//! status column surfaces as `InternalError::UnknownStatus`.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::{
    data::payment::{insert_payment, refund_payments},
    error::AppError,
    model::{
        booking::{Booking, BookingStatus, CreateBookingParams},
        pagination::{PageRequest, Paginated},
        payment::{CreatePaymentParams, Payment},
    },
    util::availability::BookingInterval,
};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending booking unless the dates collide with an active one.
    ///
    /// The overlap check and the insert share a transaction. Overlap uses half-open
    /// ranges, so a stay may start on the day another one ends.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking created with status `pending`
    /// - `Ok(None)` - A pending or confirmed booking already holds some of the nights
    /// - `Err(AppError)` - Database error
    pub async fn create_if_available(
        &self,
        params: CreateBookingParams,
    ) -> Result<Option<Booking>, AppError> {
        let txn = self.db.begin().await?;

        if overlap_exists(&txn, params.accommodation_id, params.start_date, params.end_date)
            .await?
        {
            txn.rollback().await?;
            return Ok(None);
        }

        let now = Utc::now();
        let entity = entity::booking::ActiveModel {
            accommodation_id: ActiveValue::Set(params.accommodation_id),
            guest_id: ActiveValue::Set(params.guest_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            guests: ActiveValue::Set(params.guests),
            total_price: ActiveValue::Set(params.total_price),
            status: ActiveValue::Set(BookingStatus::Pending.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(Booking::from_entity(entity)?))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, AppError> {
        entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Gets a guest's bookings, newest first.
    pub async fn get_by_guest_paginated(
        &self,
        guest_id: i32,
        page: PageRequest,
    ) -> Result<Paginated<Booking>, AppError> {
        let paginator = entity::prelude::Booking::find()
            .filter(entity::booking::Column::GuestId.eq(guest_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let bookings = paginator
            .fetch_page(page.page)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::new(bookings, total, page))
    }

    /// Gets every booking of a listing in stay order.
    pub async fn get_by_accommodation(
        &self,
        accommodation_id: i32,
    ) -> Result<Vec<Booking>, AppError> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::AccommodationId.eq(accommodation_id))
            .order_by_asc(entity::booking::Column::StartDate)
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect()
    }

    /// Gets the date spans held by confirmed bookings, ascending by start date.
    ///
    /// This is the input of the availability calculator; pending bookings are not
    /// included.
    pub async fn get_confirmed_intervals(
        &self,
        accommodation_id: i32,
    ) -> Result<Vec<BookingInterval>, DbErr> {
        let bookings = entity::prelude::Booking::find()
            .filter(entity::booking::Column::AccommodationId.eq(accommodation_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed.as_str()))
            .order_by_asc(entity::booking::Column::StartDate)
            .order_by_asc(entity::booking::Column::EndDate)
            .all(self.db)
            .await?;

        Ok(bookings
            .into_iter()
            .map(|b| BookingInterval::new(b.start_date, b.end_date))
            .collect())
    }

    /// Confirms a pending booking and records its succeeded payment.
    ///
    /// The status change only applies while the booking is still pending; it and the
    /// payment insert share a transaction.
    ///
    /// # Returns
    /// - `Ok(Some((Booking, Payment)))` - Booking confirmed and payment recorded
    /// - `Ok(None)` - Booking missing or no longer pending; nothing written
    pub async fn confirm_with_payment(
        &self,
        id: i32,
        payment: CreatePaymentParams,
    ) -> Result<Option<(Booking, Payment)>, AppError> {
        let txn = self.db.begin().await?;

        if !set_status_if(&txn, id, BookingStatus::Pending, BookingStatus::Confirmed).await? {
            txn.rollback().await?;
            return Ok(None);
        }

        let payment = insert_payment(&txn, payment).await?;
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Booking {} not found", id)))?;

        txn.commit().await?;

        Ok(Some((Booking::from_entity(booking)?, payment)))
    }

    /// Cancels a booking still in `expected` status and refunds its succeeded payments.
    ///
    /// # Returns
    /// - `Ok(Some((Booking, refunded)))` - Cancelled booking and number of refunded payments
    /// - `Ok(None)` - Booking missing or its status changed since it was read
    pub async fn cancel_if_status(
        &self,
        id: i32,
        expected: BookingStatus,
    ) -> Result<Option<(Booking, u64)>, AppError> {
        let txn = self.db.begin().await?;

        if !set_status_if(&txn, id, expected, BookingStatus::Cancelled).await? {
            txn.rollback().await?;
            return Ok(None);
        }

        let refunded = refund_payments(&txn, id).await?;
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Booking {} not found", id)))?;

        txn.commit().await?;

        Ok(Some((Booking::from_entity(booking)?, refunded)))
    }

    /// Cancels pending bookings created before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of bookings cancelled
    pub async fn expire_pending(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Cancelled.as_str()),
            )
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Pending.as_str()))
            .filter(entity::booking::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Completes confirmed bookings whose check-out day is before `today`.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of bookings completed
    pub async fn complete_past(&self, today: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Completed.as_str()),
            )
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed.as_str()))
            .filter(entity::booking::Column::EndDate.lt(today))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Moves a booking from `from` to `to`, returning false when its status was not `from`.
async fn set_status_if<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    from: BookingStatus,
    to: BookingStatus,
) -> Result<bool, DbErr> {
    let result = entity::prelude::Booking::update_many()
        .col_expr(entity::booking::Column::Status, Expr::value(to.as_str()))
        .col_expr(entity::booking::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(entity::booking::Column::Id.eq(id))
        .filter(entity::booking::Column::Status.eq(from.as_str()))
        .exec(conn)
        .await?;

    Ok(result.rows_affected == 1)
}

async fn overlap_exists<C: ConnectionTrait>(
    conn: &C,
    accommodation_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<bool, DbErr> {
    let count = entity::prelude::Booking::find()
        .filter(entity::booking::Column::AccommodationId.eq(accommodation_id))
        .filter(entity::booking::Column::Status.is_in([
            BookingStatus::Pending.as_str(),
            BookingStatus::Confirmed.as_str(),
        ]))
        .filter(entity::booking::Column::StartDate.lt(end_date))
        .filter(entity::booking::Column::EndDate.gt(start_date))
        .count(conn)
        .await?;

    Ok(count > 0)
}
