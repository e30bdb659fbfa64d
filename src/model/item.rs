use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::model::{link::HttpUrl, timestamp};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    App,
    Game,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::App => "app",
            ItemKind::Game => "game",
        }
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "app" => Ok(ItemKind::App),
            "game" => Ok(ItemKind::Game),
            other => Err(format!("Unknown item type '{}', expected app or game", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
pub enum DownloadType {
    #[default]
    #[serde(rename = "APK")]
    Apk,
    #[serde(rename = "XAPK")]
    Xapk,
}

impl DownloadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadType::Apk => "APK",
            DownloadType::Xapk => "XAPK",
        }
    }
}

impl FromStr for DownloadType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "APK" => Ok(DownloadType::Apk),
            "XAPK" => Ok(DownloadType::Xapk),
            other => Err(format!("Unknown download type '{}'", other)),
        }
    }
}

/// Payload describing a new app or game listing.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateAppItemDto {
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub short_description: String,
    pub description: String,
    pub version: String,
    pub size: String, // e.g. "120 MB"
    /// Category slug; not checked against existing categories.
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub screenshots: Vec<HttpUrl>,
    #[serde(default)]
    pub download_type: DownloadType,
    #[schema(value_type = String)]
    pub download_url: HttpUrl,
    /// Accepted for compatibility and ignored; the server stamps this field.
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_premium: bool,
}

/// Request body for `POST /api/items`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateAppItemRequest {
    pub data: CreateAppItemDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppItemDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AppItemListDto {
    pub items: Vec<AppItemDto>,
}
