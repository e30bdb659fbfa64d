//! App item domain models and the typed listing query.
//!
//! Besides the `AppItem` model and its creation parameters, this module owns `ItemQuery`,
//! the single place where item filters, sort keys and limits are assembled. Listing
//! requests must name a sort field from [`ItemSortField`] and an order of `1` or `-1`;
//! anything else is rejected before a query is built.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::str::FromStr;

use crate::{
    model::item::{AppItemDto, CreateAppItemDto, DownloadType, ItemKind},
    server::error::AppError,
};

/// Lowest accepted `limit` for the filtered item listing.
pub const MIN_LIST_LIMIT: i64 = 1;
/// Highest accepted `limit` for the filtered item listing.
pub const MAX_LIST_LIMIT: i64 = 100;

/// App or game listing as stored in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct AppItem {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub kind: ItemKind,
    pub short_description: String,
    pub description: String,
    pub version: String,
    pub size: String,
    /// Category slug. Not guaranteed to match an existing category.
    pub category: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub screenshots: Vec<String>,
    pub download_type: DownloadType,
    pub download_url: String,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AppItem {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The app item entity from the database
    ///
    /// # Returns
    /// - `Ok(AppItem)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored `type` or `download_type` is not a known value
    pub fn from_entity(entity: entity::app_item::Model) -> Result<Self, DbErr> {
        let kind = ItemKind::from_str(&entity.kind).map_err(DbErr::Custom)?;
        let download_type = DownloadType::from_str(&entity.download_type).map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            kind,
            short_description: entity.short_description,
            description: entity.description,
            version: entity.version,
            size: entity.size,
            category: entity.category,
            tags: entity.tags.into(),
            features: entity.features.into(),
            screenshots: entity.screenshots.into(),
            download_type,
            download_url: entity.download_url,
            is_premium: entity.is_premium,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the domain model to a DTO for API responses.
    ///
    /// The integer identifier is exposed only in its string form under `_id`.
    pub fn into_dto(self) -> AppItemDto {
        AppItemDto {
            id: self.id.to_string(),
            title: self.title,
            slug: self.slug,
            kind: self.kind,
            short_description: self.short_description,
            description: self.description,
            version: self.version,
            size: self.size,
            category: self.category,
            tags: self.tags,
            features: self.features,
            screenshots: self.screenshots,
            download_type: self.download_type,
            download_url: self.download_url,
            is_premium: self.is_premium,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for inserting a new app item.
///
/// Carries no timestamps; the repository stamps both from the time it is given.
#[derive(Debug, Clone)]
pub struct CreateAppItemParams {
    pub title: String,
    pub slug: String,
    pub kind: ItemKind,
    pub short_description: String,
    pub description: String,
    pub version: String,
    pub size: String,
    pub category: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub screenshots: Vec<String>,
    pub download_type: DownloadType,
    pub download_url: String,
    pub is_premium: bool,
}

impl CreateAppItemParams {
    /// Converts a creation DTO into insert parameters.
    ///
    /// Tags are a set: repeated tags are collapsed, keeping the first occurrence's
    /// position. A client-supplied `updated_at` is dropped.
    pub fn from_dto(dto: CreateAppItemDto) -> Self {
        let mut tags: Vec<String> = Vec::with_capacity(dto.tags.len());
        for tag in dto.tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Self {
            title: dto.title,
            slug: dto.slug,
            kind: dto.kind,
            short_description: dto.short_description,
            description: dto.description,
            version: dto.version,
            size: dto.size,
            category: dto.category,
            tags,
            features: dto.features,
            screenshots: dto.screenshots.into_iter().map(String::from).collect(),
            download_type: dto.download_type,
            download_url: dto.download_url.into(),
            is_premium: dto.is_premium,
        }
    }
}

/// Fields an item listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSortField {
    UpdatedAt,
    CreatedAt,
    Title,
    Slug,
    Kind,
    Category,
    Version,
    Size,
    IsPremium,
}

impl FromStr for ItemSortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "updated_at" => Ok(Self::UpdatedAt),
            "created_at" => Ok(Self::CreatedAt),
            "title" => Ok(Self::Title),
            "slug" => Ok(Self::Slug),
            "type" => Ok(Self::Kind),
            "category" => Ok(Self::Category),
            "version" => Ok(Self::Version),
            "size" => Ok(Self::Size),
            "is_premium" => Ok(Self::IsPremium),
            other => Err(AppError::Validation(format!(
                "Unsupported sort field '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl TryFrom<i64> for SortOrder {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Ascending),
            -1 => Ok(Self::Descending),
            other => Err(AppError::Validation(format!(
                "Sort order must be 1 or -1, got {}",
                other
            ))),
        }
    }
}

/// Typed description of an item listing.
///
/// Filters are conjunctive; absent filters match everything. `limit` of `None` returns
/// every matching item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemQuery {
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
    /// Exact category slug.
    pub category: Option<String>,
    /// Exact item type.
    pub kind: Option<String>,
    pub sort: ItemSortField,
    pub order: SortOrder,
    pub limit: Option<u64>,
}

impl ItemQuery {
    /// Builds a validated query for the filtered item listing.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of items, must be within 1..=100
    /// - `sort` - Sort field name, must be one of [`ItemSortField`]'s names
    /// - `order` - `1` for ascending, `-1` for descending
    ///
    /// # Returns
    /// - `Ok(ItemQuery)` - Query without filters
    /// - `Err(AppError::Validation)` - Any argument is out of range or unsupported
    pub fn listing(limit: i64, sort: &str, order: i64) -> Result<Self, AppError> {
        if !(MIN_LIST_LIMIT..=MAX_LIST_LIMIT).contains(&limit) {
            return Err(AppError::Validation(format!(
                "limit must be between {} and {}, got {}",
                MIN_LIST_LIMIT, MAX_LIST_LIMIT, limit
            )));
        }

        Ok(Self {
            search: None,
            category: None,
            kind: None,
            sort: sort.parse()?,
            order: SortOrder::try_from(order)?,
            limit: Some(limit as u64),
        })
    }

    /// Builds the query for the most recently updated items.
    pub fn latest(limit: Option<u64>) -> Self {
        Self {
            search: None,
            category: None,
            kind: None,
            sort: ItemSortField::UpdatedAt,
            order: SortOrder::Descending,
            limit,
        }
    }

    /// Restricts the query to titles containing `search`. Empty strings are ignored.
    pub fn search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|s| !s.is_empty());
        self
    }

    /// Restricts the query to one category slug. Empty strings are ignored.
    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category.filter(|c| !c.is_empty());
        self
    }

    /// Restricts the query to one item type. Empty strings are ignored.
    pub fn kind(mut self, kind: Option<String>) -> Self {
        self.kind = kind.filter(|k| !k.is_empty());
        self
    }
}
