//! Blog post domain model and creation parameters.

use chrono::{DateTime, Utc};

use crate::model::blog::{BlogPostDto, CreateBlogPostDto};

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::blog_post::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            excerpt: entity.excerpt,
            content: entity.content,
            cover_image: entity.cover_image,
            tags: entity.tags.into(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BlogPostDto {
        BlogPostDto {
            id: self.id.to_string(),
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            cover_image: self.cover_image,
            tags: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for inserting a new blog post.
#[derive(Debug, Clone)]
pub struct CreateBlogPostParams {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    /// Publication time supplied by the client; the repository stamps the current
    /// time when absent.
    pub created_at: Option<DateTime<Utc>>,
}

impl CreateBlogPostParams {
    /// Converts a creation DTO into insert parameters, dropping any client `updated_at`.
    pub fn from_dto(dto: CreateBlogPostDto) -> Self {
        Self {
            title: dto.title,
            slug: dto.slug,
            excerpt: dto.excerpt,
            content: dto.content,
            cover_image: dto.cover_image.map(String::from),
            tags: dto.tags,
            created_at: dto.created_at,
        }
    }
}
