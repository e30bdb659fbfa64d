use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppItem::Table)
                    .if_not_exists()
                    .col(pk_auto(AppItem::Id))
                    .col(string(AppItem::Title))
                    .col(string(AppItem::TitleSearch))
                    .col(string(AppItem::Slug))
                    .col(string(AppItem::Type))
                    .col(string(AppItem::ShortDescription))
                    .col(text(AppItem::Description))
                    .col(string(AppItem::Version))
                    .col(string(AppItem::Size))
                    .col(string(AppItem::Category))
                    .col(json(AppItem::Tags))
                    .col(json(AppItem::Features))
                    .col(json(AppItem::Screenshots))
                    .col(string(AppItem::DownloadType).default("APK"))
                    .col(string(AppItem::DownloadUrl))
                    .col(boolean(AppItem::IsPremium).default(false))
                    .col(timestamp_with_time_zone(AppItem::CreatedAt))
                    .col(timestamp_with_time_zone(AppItem::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Not unique: duplicate slugs are allowed.
        manager
            .create_index(
                Index::create()
                    .name("idx_app_item_slug")
                    .table(AppItem::Table)
                    .col(AppItem::Slug)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_app_item_updated_at")
                    .table(AppItem::Table)
                    .col(AppItem::UpdatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppItem {
    Table,
    Id,
    Title,
    TitleSearch,
    Slug,
    Type,
    ShortDescription,
    Description,
    Version,
    Size,
    Category,
    Tags,
    Features,
    Screenshots,
    DownloadType,
    DownloadUrl,
    IsPremium,
    CreatedAt,
    UpdatedAt,
}
