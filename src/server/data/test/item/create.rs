use super::*;

/// Tests creating an item stamps both timestamps with the supplied time.
///
/// Verifies that the repository inserts every field and that `created_at` and
/// `updated_at` both equal the time passed in.
///
/// Expected: Ok with item created
#[tokio::test]
async fn creates_item_with_stamped_timestamps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppItemRepository::new(db);
    let item = repo.create(create_params("pixel-dungeon"), base_time()).await?;

    assert_eq!(item.slug, "pixel-dungeon");
    assert_eq!(item.kind, ItemKind::Game);
    assert_eq!(item.download_type, DownloadType::Xapk);
    assert_eq!(item.tags, vec!["offline", "rpg"]);
    assert_eq!(item.screenshots, vec!["https://cdn.example.com/pd/1.png"]);
    assert!(item.is_premium);
    assert_eq!(item.created_at, base_time());
    assert_eq!(item.updated_at, base_time());

    Ok(())
}

/// Tests the lowercased search key is stored alongside the title.
///
/// Expected: Ok with title_search equal to the lowercased title
#[tokio::test]
async fn stores_lowercased_search_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppItemRepository::new(db);
    let item = repo.create(create_params("pixel-dungeon"), base_time()).await?;

    let stored = AppItem::find_by_id(item.id).one(db).await?.unwrap();
    assert_eq!(stored.title_search, "pixel dungeon");

    Ok(())
}

/// Tests creating two items with the same slug.
///
/// Slugs are unique only by convention, so the second insert must succeed with a
/// different id.
///
/// Expected: Ok with two distinct ids
#[tokio::test]
async fn allows_duplicate_slugs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppItemRepository::new(db);
    let first = repo.create(create_params("twin"), base_time()).await?;
    let second = repo.create(create_params("twin"), base_time()).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
