use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::payment::{CreatePaymentParams, Payment, PaymentStatus},
};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a charge attempt
    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, AppError> {
        insert_payment(self.db, params).await
    }

    /// Gets the payment history of a booking, oldest attempt first
    pub async fn get_by_booking(&self, booking_id: i32) -> Result<Vec<Payment>, AppError> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::BookingId.eq(booking_id))
            .order_by_asc(entity::payment::Column::CreatedAt)
            .order_by_asc(entity::payment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Payment::from_entity)
            .collect()
    }

    /// Marks every succeeded payment of a booking as refunded.
    ///
    /// Returns the number of payments refunded.
    pub async fn refund_succeeded(&self, booking_id: i32) -> Result<u64, DbErr> {
        refund_payments(self.db, booking_id).await
    }
}

/// Inserts a payment row on any connection, so booking transitions can record the
/// payment in their own transaction.
pub(super) async fn insert_payment<C: ConnectionTrait>(
    conn: &C,
    params: CreatePaymentParams,
) -> Result<Payment, AppError> {
    let entity = entity::payment::ActiveModel {
        booking_id: ActiveValue::Set(params.booking_id),
        amount: ActiveValue::Set(params.amount),
        currency: ActiveValue::Set(params.currency),
        provider_reference: ActiveValue::Set(params.provider_reference),
        status: ActiveValue::Set(params.status.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Payment::from_entity(entity)
}

pub(super) async fn refund_payments<C: ConnectionTrait>(
    conn: &C,
    booking_id: i32,
) -> Result<u64, DbErr> {
    let result = entity::prelude::Payment::update_many()
        .col_expr(
            entity::payment::Column::Status,
            Expr::value(PaymentStatus::Refunded.as_str()),
        )
        .filter(entity::payment::Column::BookingId.eq(booking_id))
        .filter(entity::payment::Column::Status.eq(PaymentStatus::Succeeded.as_str()))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}
