use super::*;

/// Tests that unfiltered search returns newest listings first.
///
/// Expected: Ok with listings ordered by creation time descending
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let host = factory::create_user(db).await?;
    let now = Utc::now();
    let old = AccommodationFactory::new(db, host.id)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let new = AccommodationFactory::new(db, host.id)
        .created_at(now)
        .build()
        .await?;

    let repo = AccommodationRepository::new(db);
    let page = repo
        .search(&AccommodationFilter::default(), FIRST_PAGE)
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![new.id, old.id]);
    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests city, price and guest filters together.
///
/// City matches by case-insensitive substring.
///
/// Expected: Ok with only the matching listing
#[tokio::test]
async fn filters_by_city_price_and_guests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let host = factory::create_user(db).await?;
    let matching = AccommodationFactory::new(db, host.id)
        .city("Lisbon")
        .price_per_night(8_000)
        .max_guests(4)
        .build()
        .await?;
    AccommodationFactory::new(db, host.id)
        .city("Lisbon")
        .price_per_night(20_000)
        .max_guests(4)
        .build()
        .await?;
    AccommodationFactory::new(db, host.id)
        .city("Lisbon")
        .price_per_night(8_000)
        .max_guests(2)
        .build()
        .await?;
    AccommodationFactory::new(db, host.id)
        .city("Porto")
        .price_per_night(8_000)
        .max_guests(4)
        .build()
        .await?;

    let repo = AccommodationRepository::new(db);
    let filter = AccommodationFilter {
        city: Some("lisb".to_string()),
        min_price: Some(5_000),
        max_price: Some(10_000),
        guests: Some(3),
        ..Default::default()
    };
    let page = repo.search(&filter, FIRST_PAGE).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, matching.id);

    Ok(())
}

/// Tests city matching on non-ASCII names.
///
/// Expected: Ok with the listing found regardless of letter case
#[tokio::test]
async fn matches_city_ignoring_unicode_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let host = factory::create_user(db).await?;
    let repo = AccommodationRepository::new(db);
    let aarhus = repo
        .create(CreateAccommodationParams {
            owner_id: host.id,
            fields: AccommodationFields {
                city: "ÅRHUS".to_string(),
                ..fields("Harbour flat", vec![])
            },
        })
        .await?;
    AccommodationFactory::new(db, host.id)
        .city("Lisbon")
        .build()
        .await?;

    let filter = AccommodationFilter {
        city: Some("århus".to_string()),
        ..Default::default()
    };
    let page = repo.search(&filter, FIRST_PAGE).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, aarhus.id);

    Ok(())
}

/// Tests that every requested amenity must be present.
///
/// Expected: Ok with only the listing having both amenities
#[tokio::test]
async fn requires_all_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let host = factory::create_user(db).await?;
    let wifi = factory::create_amenity(db).await?;
    let pool = factory::create_amenity(db).await?;

    let both = factory::create_accommodation(db, host.id).await?;
    factory::link_amenity(db, both.id, wifi.id).await?;
    factory::link_amenity(db, both.id, pool.id).await?;

    let only_wifi = factory::create_accommodation(db, host.id).await?;
    factory::link_amenity(db, only_wifi.id, wifi.id).await?;

    let repo = AccommodationRepository::new(db);
    let filter = AccommodationFilter {
        amenity_ids: vec![wifi.id, pool.id],
        ..Default::default()
    };
    let page = repo.search(&filter, FIRST_PAGE).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, both.id);
    assert_eq!(page.items[0].amenities.len(), 2);

    Ok(())
}

/// Tests that a requested stay must lie inside the availability window.
///
/// Expected: Ok with only the listing whose window covers the stay
#[tokio::test]
async fn filters_by_window_coverage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let host = factory::create_user(db).await?;
    let covering = AccommodationFactory::new(db, host.id)
        .window(date(2030, 6, 1), date(2030, 8, 31))
        .build()
        .await?;
    AccommodationFactory::new(db, host.id)
        .window(date(2030, 7, 1), date(2030, 8, 31))
        .build()
        .await?;

    let repo = AccommodationRepository::new(db);
    let filter = AccommodationFilter {
        stay: Some((date(2030, 6, 10), date(2030, 6, 15))),
        ..Default::default()
    };
    let page = repo.search(&filter, FIRST_PAGE).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, covering.id);

    Ok(())
}
