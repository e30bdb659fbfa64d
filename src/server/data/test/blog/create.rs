use super::*;

/// Tests creating a post without a publication time.
///
/// Expected: Ok with created_at and updated_at both set to the supplied time
#[tokio::test]
async fn stamps_created_at_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(BlogPost).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlogPostRepository::new(db);
    let post = repo.create(create_params(None), base_time()).await?;

    assert_eq!(post.created_at, base_time());
    assert_eq!(post.updated_at, base_time());
    assert_eq!(post.cover_image.as_deref(), Some("https://cdn.example.com/cover.png"));

    Ok(())
}

/// Tests creating a post with a client-supplied publication time.
///
/// Expected: Ok with created_at preserved and updated_at set to the supplied time
#[tokio::test]
async fn keeps_supplied_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(BlogPost).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let published = base_time() - Duration::days(30);

    let repo = BlogPostRepository::new(db);
    let post = repo.create(create_params(Some(published)), base_time()).await?;

    assert_eq!(post.created_at, published);
    assert_eq!(post.updated_at, base_time());

    Ok(())
}
