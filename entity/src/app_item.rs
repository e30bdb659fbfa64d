use sea_orm::entity::prelude::*;

use crate::StringList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "app_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Lowercased copy of `title` used for case-insensitive search.
    pub title_search: String,
    pub slug: String,
    /// `app` or `game`.
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub short_description: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub version: String,
    pub size: String,
    /// Category slug. Not enforced as a foreign key.
    pub category: String,
    #[sea_orm(column_type = "Json")]
    pub tags: StringList,
    #[sea_orm(column_type = "Json")]
    pub features: StringList,
    #[sea_orm(column_type = "Json")]
    pub screenshots: StringList,
    /// `APK` or `XAPK`.
    pub download_type: String,
    pub download_url: String,
    pub is_premium: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
