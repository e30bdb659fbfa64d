use super::*;

/// Tests the default listing order is newest update first.
///
/// Expected: Ok with items sorted by updated_at descending
#[tokio::test]
async fn lists_items_by_updated_at_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old = AppItemFactory::new(db).updated_at(base_time()).build().await?;
    let new = AppItemFactory::new(db)
        .updated_at(base_time() + Duration::days(2))
        .build()
        .await?;
    let mid = AppItemFactory::new(db)
        .updated_at(base_time() + Duration::days(1))
        .build()
        .await?;

    let repo = AppItemRepository::new(db);
    let query = ItemQuery::listing(24, "updated_at", -1).unwrap();
    let items = repo.list(&query).await?;

    let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![new.id, mid.id, old.id]);

    Ok(())
}

/// Tests the title search is a case-insensitive substring match.
///
/// Expected: Ok with only the matching item
#[tokio::test]
async fn filters_by_title_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hit = AppItemFactory::new(db).title("Super VPN Pro").build().await?;
    AppItemFactory::new(db).title("Photo Editor").build().await?;

    let repo = AppItemRepository::new(db);
    let query = ItemQuery::listing(24, "updated_at", -1)
        .unwrap()
        .search(Some("vpn".to_string()));
    let items = repo.list(&query).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, hit.id);

    Ok(())
}

/// Tests filtering by item type and category together.
///
/// Expected: Ok with only games in the requested category
#[tokio::test]
async fn filters_by_type_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = AppItemFactory::new(db)
        .kind("game")
        .category("racing")
        .build()
        .await?;
    AppItemFactory::new(db).kind("game").category("puzzle").build().await?;
    AppItemFactory::new(db).kind("app").category("racing").build().await?;

    let repo = AppItemRepository::new(db);
    let query = ItemQuery::listing(24, "updated_at", -1)
        .unwrap()
        .kind(Some("game".to_string()))
        .category(Some("racing".to_string()));
    let items = repo.list(&query).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, game.id);
    assert_eq!(items[0].kind, ItemKind::Game);

    Ok(())
}

/// Tests the listing is truncated to the limit.
///
/// Expected: Ok with exactly `limit` items
#[tokio::test]
async fn truncates_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_item(db).await?;
    }

    let repo = AppItemRepository::new(db);
    let query = ItemQuery::listing(3, "updated_at", -1).unwrap();
    let items = repo.list(&query).await?;

    assert_eq!(items.len(), 3);

    Ok(())
}

/// Tests ascending sort by title with equal keys broken by id.
///
/// Expected: Ok with titles ascending and the tied titles in insertion order
#[tokio::test]
async fn sorts_by_title_ascending_with_stable_ties() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zeta = AppItemFactory::new(db).title("Zeta").build().await?;
    let alpha_one = AppItemFactory::new(db).title("Alpha").build().await?;
    let alpha_two = AppItemFactory::new(db).title("Alpha").build().await?;

    let repo = AppItemRepository::new(db);
    let query = ItemQuery::listing(24, "title", 1).unwrap();
    let items = repo.list(&query).await?;

    let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![alpha_one.id, alpha_two.id, zeta.id]);

    Ok(())
}

/// Tests the latest-items query without a limit returns everything.
///
/// Expected: Ok with all items
#[tokio::test]
async fn latest_without_limit_returns_all() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..4 {
        factory::create_item(db).await?;
    }

    let repo = AppItemRepository::new(db);
    let items = repo.list(&ItemQuery::latest(None)).await?;

    assert_eq!(items.len(), 4);

    Ok(())
}

/// Tests LIKE wildcards in the search text are matched literally.
///
/// Expected: Ok with no items for `%`, `_` and `a_p`, one item for a literal `%`
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(AppItem).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AppItemFactory::new(db).title("Alpha").build().await?;
    AppItemFactory::new(db).title("Beta").build().await?;

    let repo = AppItemRepository::new(db);
    for search in ["%", "_", "a_p"] {
        let query = ItemQuery::listing(24, "updated_at", -1)
            .unwrap()
            .search(Some(search.to_string()));
        let items = repo.list(&query).await?;
        assert!(items.is_empty(), "{} matched {} items", search, items.len());
    }

    let discount = AppItemFactory::new(db).title("100% Free").build().await?;
    let query = ItemQuery::listing(24, "updated_at", -1)
        .unwrap()
        .search(Some("0%".to_string()));
    let items = repo.list(&query).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, discount.id);

    Ok(())
}
