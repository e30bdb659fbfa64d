use crate::{
    model::item::{DownloadType, ItemKind},
    server::{
        data::item::AppItemRepository,
        model::item::{CreateAppItemParams, ItemQuery},
    },
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::prelude::AppItem;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::app_item::AppItemFactory};

mod create;
mod find_by_slug;
mod list;

/// Fixed reference time used by item repository tests.
fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn create_params(slug: &str) -> CreateAppItemParams {
    CreateAppItemParams {
        title: "Pixel Dungeon".to_string(),
        slug: slug.to_string(),
        kind: ItemKind::Game,
        short_description: "Roguelike".to_string(),
        description: "Explore procedurally generated dungeons.".to_string(),
        version: "1.4.2".to_string(),
        size: "32 MB".to_string(),
        category: "adventure".to_string(),
        tags: vec!["offline".to_string(), "rpg".to_string()],
        features: vec!["Unlocked heroes".to_string()],
        screenshots: vec!["https://cdn.example.com/pd/1.png".to_string()],
        download_type: DownloadType::Xapk,
        download_url: "https://cdn.example.com/pd.xapk".to_string(),
        is_premium: true,
    }
}
