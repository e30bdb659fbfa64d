use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{link::HttpUrl, timestamp};

/// Payload describing a new blog post (tips, tutorials, reviews).
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateBlogPostDto {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// HTML or Markdown body.
    pub content: String,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub cover_image: Option<HttpUrl>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Kept when provided; stamped with the current time otherwise.
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub created_at: Option<DateTime<Utc>>,
    /// Accepted for compatibility and ignored; the server stamps this field.
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for `POST /api/blog`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateBlogPostRequest {
    pub data: CreateBlogPostDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BlogPostDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct BlogPostListDto {
    pub posts: Vec<BlogPostDto>,
}
