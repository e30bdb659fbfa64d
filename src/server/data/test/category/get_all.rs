use super::*;

/// Tests categories are returned sorted by name ascending.
///
/// Expected: Ok with categories ordered Arcade, Productivity, Tools
#[tokio::test]
async fn returns_categories_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db).name("Tools").slug("tools").build().await?;
    CategoryFactory::new(db)
        .name("Arcade")
        .slug("arcade")
        .kind("game")
        .build()
        .await?;
    CategoryFactory::new(db)
        .name("Productivity")
        .slug("productivity")
        .kind("app")
        .icon(Some("briefcase".to_string()))
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Arcade", "Productivity", "Tools"]);
    assert_eq!(categories[0].kind, CategoryKind::Game);
    assert_eq!(categories[1].icon.as_deref(), Some("briefcase"));

    Ok(())
}

/// Tests an empty table yields an empty list.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_list_without_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
