use crate::server::{data::blog::BlogPostRepository, model::blog::CreateBlogPostParams};
use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::prelude::BlogPost;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::blog_post::BlogPostFactory};

mod create;
mod find_by_slug;
mod get_recent;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn create_params(created_at: Option<DateTime<Utc>>) -> CreateBlogPostParams {
    CreateBlogPostParams {
        title: "Installing XAPK files".to_string(),
        slug: "installing-xapk-files".to_string(),
        excerpt: "A short guide".to_string(),
        content: "# Steps\n\n1. Download\n2. Install".to_string(),
        cover_image: Some("https://cdn.example.com/cover.png".to_string()),
        tags: vec!["guide".to_string()],
        created_at,
    }
}
