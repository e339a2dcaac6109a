use super::*;

/// Tests paginating users in registration order.
///
/// Creates 5 users and requests the second page of size 2.
///
/// Expected: Ok with users 3 and 4, total 5, 3 pages
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = &test.db;

    let mut created = Vec::new();
    for _ in 0..5 {
        created.push(factory::create_user(db).await?);
    }

    let repo = UserRepository::new(db);
    let page = repo
        .get_all_paginated(PageRequest {
            page: 1,
            per_page: 2,
        })
        .await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    let ids: Vec<i32> = page.items.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![created[2].id, created[3].id]);

    Ok(())
}
