use super::*;

/// Tests finding a post by slug.
///
/// Expected: Ok(Some(BlogPost))
#[tokio::test]
async fn finds_post_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(BlogPost).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let post = BlogPostFactory::new(db).slug("modding-101").build().await?;

    let repo = BlogPostRepository::new(db);
    let found = repo.find_by_slug("modding-101").await?.unwrap();

    assert_eq!(found.id, post.id);

    Ok(())
}

/// Tests looking up a slug that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(BlogPost).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_post(db).await?;

    let repo = BlogPostRepository::new(db);

    assert!(repo.find_by_slug("does-not-exist").await?.is_none());

    Ok(())
}
