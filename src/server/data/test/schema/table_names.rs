use super::*;

/// Tests listing the tables of the catalog schema.
///
/// Expected: Ok with every catalog table sorted by name
#[tokio::test]
async fn lists_catalog_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchemaRepository::new(db);
    let names = repo.table_names().await?;

    assert_eq!(
        names,
        vec!["app_item", "blog_post", "category", "contact_message"]
    );

    Ok(())
}

/// Tests listing tables of an empty database.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn lists_nothing_for_empty_database() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchemaRepository::new(db);

    assert!(repo.table_names().await?.is_empty());

    Ok(())
}
