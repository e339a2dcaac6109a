use super::*;

/// Tests creating amenities and listing them alphabetically.
///
/// Expected: Ok with names in ascending order
#[tokio::test]
async fn lists_created_amenities_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Amenity)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let repo = AmenityRepository::new(db);
    repo.create("Wifi".to_string()).await?;
    repo.create("Balcony".to_string()).await?;

    let names: Vec<String> = repo.get_all().await?.into_iter().map(|a| a.name).collect();

    assert_eq!(names, vec!["Balcony", "Wifi"]);
    assert!(repo.name_exists("Wifi").await?);
    assert!(!repo.name_exists("Sauna").await?);

    Ok(())
}
