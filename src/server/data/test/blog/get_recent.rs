use super::*;

/// Tests posts are returned newest first.
///
/// Expected: Ok with posts sorted by created_at descending
#[tokio::test]
async fn returns_newest_posts_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(BlogPost).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = BlogPostFactory::new(db).created_at(base_time()).build().await?;
    let newer = BlogPostFactory::new(db)
        .created_at(base_time() + Duration::hours(1))
        .build()
        .await?;

    let repo = BlogPostRepository::new(db);
    let posts = repo.get_recent(Some(10)).await?;

    let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests the limit truncates and `None` returns every post.
///
/// Expected: Ok with 2 posts when limited and 3 otherwise
#[tokio::test]
async fn applies_optional_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(BlogPost).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_post(db).await?;
    }

    let repo = BlogPostRepository::new(db);

    assert_eq!(repo.get_recent(Some(2)).await?.len(), 2);
    assert_eq!(repo.get_recent(None).await?.len(), 3);

    Ok(())
}
