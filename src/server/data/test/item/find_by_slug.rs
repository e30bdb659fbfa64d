use super::*;

/// Tests finding an item by slug.
///
/// Expected: Ok(Some(AppItem))
#[tokio::test]
async fn finds_item_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = AppItemFactory::new(db).slug("file-manager").build().await?;
    factory::create_item(db).await?;

    let repo = AppItemRepository::new(db);
    let result = repo.find_by_slug("file-manager").await?;

    let found = result.unwrap();
    assert_eq!(found.id, item.id);
    assert_eq!(found.title, item.title);

    Ok(())
}

/// Tests that a duplicated slug resolves to the earliest inserted item.
///
/// Expected: Ok(Some(AppItem)) with the lowest id
#[tokio::test]
async fn returns_earliest_item_for_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = AppItemFactory::new(db).slug("twin").title("First").build().await?;
    AppItemFactory::new(db).slug("twin").title("Second").build().await?;

    let repo = AppItemRepository::new(db);
    let found = repo.find_by_slug("twin").await?.unwrap();

    assert_eq!(found.id, first.id);
    assert_eq!(found.title, "First");

    Ok(())
}

/// Tests looking up a slug that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_item(db).await?;

    let repo = AppItemRepository::new(db);
    let result = repo.find_by_slug("does-not-exist").await?;

    assert!(result.is_none());

    Ok(())
}
