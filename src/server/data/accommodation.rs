//! Accommodation data repository.
//!
//! Listings are stored in the `accommodation` table with amenity links in
//! `accommodation_amenity`. Reads return fully enriched `Accommodation` domain models
//! (amenities plus review summary) so callers never see the link table.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::{
    data::review::ReviewRepository,
    model::{
        accommodation::{
            Accommodation, AccommodationFields, AccommodationFilter, CreateAccommodationParams,
            UpdateAccommodationParams,
        },
        amenity::Amenity,
        pagination::{PageRequest, Paginated},
    },
};

pub struct AccommodationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccommodationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a listing and links its amenities in one transaction.
    ///
    /// # Arguments
    /// - `params` - Owner ID and validated listing fields; amenity IDs must exist
    ///
    /// # Returns
    /// - `Ok(Accommodation)` - The created listing with amenities
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create(&self, params: CreateAccommodationParams) -> Result<Accommodation, DbErr> {
        let now = Utc::now();
        let AccommodationFields {
            title,
            description,
            city,
            address,
            price_per_night,
            max_guests,
            available_from,
            available_to,
            amenity_ids,
        } = params.fields;

        let txn = self.db.begin().await?;

        let entity = entity::accommodation::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            city_key: ActiveValue::Set(city_key(&city)),
            city: ActiveValue::Set(city),
            address: ActiveValue::Set(address),
            price_per_night: ActiveValue::Set(price_per_night),
            max_guests: ActiveValue::Set(max_guests),
            available_from: ActiveValue::Set(available_from),
            available_to: ActiveValue::Set(available_to),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        link_amenities(&txn, entity.id, &amenity_ids).await?;
        txn.commit().await?;

        self.get_by_id(entity.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Accommodation with id {} not found after creation",
            entity.id
        )))
    }

    /// Gets a listing by ID with amenities and review summary.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Accommodation>, DbErr> {
        let Some(entity) = entity::prelude::Accommodation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_details(vec![entity]).await?.pop())
    }

    /// Gets the owner of a listing without loading its details.
    ///
    /// # Returns
    /// - `Ok(Some(owner_id))` - Listing exists
    /// - `Ok(None)` - No listing with that ID
    pub async fn find_owner_id(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Accommodation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(|a| a.owner_id))
    }

    /// Searches listings matching every set filter, newest first.
    ///
    /// - `city` matches by substring against the lowercased `city_key` column
    /// - each amenity ID adds an `IN (subquery)` condition so all must be present
    /// - `stay` requires the availability window to cover the whole span
    ///
    /// # Returns
    /// - `Ok(Paginated<Accommodation>)` - Requested page with total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(
        &self,
        filter: &AccommodationFilter,
        page: PageRequest,
    ) -> Result<Paginated<Accommodation>, DbErr> {
        use entity::accommodation::Column;

        let mut query = entity::prelude::Accommodation::find();

        if let Some(city) = &filter.city {
            query = query.filter(Column::CityKey.contains(city_key(city)));
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(Column::PricePerNight.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(Column::PricePerNight.lte(max_price));
        }
        if let Some(guests) = filter.guests {
            query = query.filter(Column::MaxGuests.gte(guests));
        }
        if let Some((start, end)) = filter.stay {
            query = query
                .filter(Column::AvailableFrom.lte(start))
                .filter(Column::AvailableTo.gte(end));
        }
        for amenity_id in &filter.amenity_ids {
            query = query.filter(
                Column::Id.in_subquery(
                    Query::select()
                        .column(entity::accommodation_amenity::Column::AccommodationId)
                        .from(entity::prelude::AccommodationAmenity)
                        .and_where(entity::accommodation_amenity::Column::AmenityId.eq(*amenity_id))
                        .to_owned(),
                ),
            );
        }

        let paginator = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.page).await?;
        let accommodations = self.with_details(entities).await?;

        Ok(Paginated::new(accommodations, total, page))
    }

    /// Replaces the editable fields and amenity links of a listing.
    ///
    /// # Returns
    /// - `Ok(Some(Accommodation))` - Updated listing
    /// - `Ok(None)` - No listing with that ID
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn update(
        &self,
        params: UpdateAccommodationParams,
    ) -> Result<Option<Accommodation>, DbErr> {
        let Some(existing) = entity::prelude::Accommodation::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let fields = params.fields;
        let txn = self.db.begin().await?;

        let mut active: entity::accommodation::ActiveModel = existing.into();
        active.title = ActiveValue::Set(fields.title);
        active.description = ActiveValue::Set(fields.description);
        active.city_key = ActiveValue::Set(city_key(&fields.city));
        active.city = ActiveValue::Set(fields.city);
        active.address = ActiveValue::Set(fields.address);
        active.price_per_night = ActiveValue::Set(fields.price_per_night);
        active.max_guests = ActiveValue::Set(fields.max_guests);
        active.available_from = ActiveValue::Set(fields.available_from);
        active.available_to = ActiveValue::Set(fields.available_to);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(&txn).await?;

        entity::prelude::AccommodationAmenity::delete_many()
            .filter(entity::accommodation_amenity::Column::AccommodationId.eq(params.id))
            .exec(&txn)
            .await?;
        link_amenities(&txn, params.id, &fields.amenity_ids).await?;

        txn.commit().await?;

        self.get_by_id(params.id).await
    }

    /// Deletes a listing and every row that references it.
    ///
    /// Payments of the listing's bookings, reviews, bookings, wishlist entries and
    /// amenity links are removed in the same transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing deleted
    /// - `Ok(false)` - No listing with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Payment::delete_many()
            .filter(
                entity::payment::Column::BookingId.in_subquery(
                    Query::select()
                        .column(entity::booking::Column::Id)
                        .from(entity::prelude::Booking)
                        .and_where(entity::booking::Column::AccommodationId.eq(id))
                        .to_owned(),
                ),
            )
            .exec(&txn)
            .await?;
        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::AccommodationId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::AccommodationId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::WishlistItem::delete_many()
            .filter(entity::wishlist_item::Column::AccommodationId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::AccommodationAmenity::delete_many()
            .filter(entity::accommodation_amenity::Column::AccommodationId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Accommodation::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Converts listing rows to domain models, loading amenities and review summaries
    /// for all of them with one query each. Input order is preserved.
    pub async fn with_details(
        &self,
        entities: Vec<entity::accommodation::Model>,
    ) -> Result<Vec<Accommodation>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = entities.iter().map(|a| a.id).collect();

        let mut amenities: HashMap<i32, Vec<Amenity>> = HashMap::new();
        let links = entity::prelude::AccommodationAmenity::find()
            .filter(entity::accommodation_amenity::Column::AccommodationId.is_in(ids.clone()))
            .find_also_related(entity::prelude::Amenity)
            .all(self.db)
            .await?;
        for (link, amenity) in links {
            if let Some(amenity) = amenity {
                amenities
                    .entry(link.accommodation_id)
                    .or_default()
                    .push(Amenity::from_entity(amenity));
            }
        }
        for list in amenities.values_mut() {
            list.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let ratings = ReviewRepository::new(self.db).rating_summaries(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let listing_amenities = amenities.remove(&entity.id).unwrap_or_default();
                let rating = ratings.get(&entity.id).copied().unwrap_or_default();
                Accommodation::from_entity(entity, listing_amenities, rating)
            })
            .collect())
    }
}

async fn link_amenities<C: ConnectionTrait>(
    conn: &C,
    accommodation_id: i32,
    amenity_ids: &[i32],
) -> Result<(), DbErr> {
    if amenity_ids.is_empty() {
        return Ok(());
    }

    entity::prelude::AccommodationAmenity::insert_many(amenity_ids.iter().map(|&amenity_id| {
        entity::accommodation_amenity::ActiveModel {
            accommodation_id: ActiveValue::Set(accommodation_id),
            amenity_id: ActiveValue::Set(amenity_id),
        }
    }))
    .exec_without_returning(conn)
    .await?;

    Ok(())
}

/// Search key for a city name.
///
/// SQLite only folds ASCII case in `LIKE`, so both the stored key and the query are
/// lowercased here instead.
fn city_key(city: &str) -> String {
    city.trim().to_lowercase()
}
