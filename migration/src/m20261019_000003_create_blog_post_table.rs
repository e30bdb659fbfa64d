use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogPost::Id))
                    .col(string(BlogPost::Title))
                    .col(string(BlogPost::Slug))
                    .col(text(BlogPost::Excerpt))
                    .col(text(BlogPost::Content))
                    .col(string_null(BlogPost::CoverImage))
                    .col(json(BlogPost::Tags))
                    .col(timestamp_with_time_zone(BlogPost::CreatedAt))
                    .col(timestamp_with_time_zone(BlogPost::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_post_slug")
                    .table(BlogPost::Table)
                    .col(BlogPost::Slug)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlogPost {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Content,
    CoverImage,
    Tags,
    CreatedAt,
    UpdatedAt,
}
