use chrono::{DateTime, Utc};
use entity::StringList;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::item::{
    AppItem, CreateAppItemParams, ItemQuery, ItemSortField, SortOrder,
};

pub struct AppItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new app item, stamping both timestamps with `now`.
    ///
    /// No uniqueness check is made on the slug.
    pub async fn create(
        &self,
        params: CreateAppItemParams,
        now: DateTime<Utc>,
    ) -> Result<AppItem, DbErr> {
        let entity = entity::app_item::ActiveModel {
            title_search: ActiveValue::Set(params.title.to_lowercase()),
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(params.slug),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            short_description: ActiveValue::Set(params.short_description),
            description: ActiveValue::Set(params.description),
            version: ActiveValue::Set(params.version),
            size: ActiveValue::Set(params.size),
            category: ActiveValue::Set(params.category),
            tags: ActiveValue::Set(StringList(params.tags)),
            features: ActiveValue::Set(StringList(params.features)),
            screenshots: ActiveValue::Set(StringList(params.screenshots)),
            download_type: ActiveValue::Set(params.download_type.as_str().to_string()),
            download_url: ActiveValue::Set(params.download_url),
            is_premium: ActiveValue::Set(params.is_premium),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        AppItem::from_entity(entity)
    }

    /// Lists items matching the query's filters, sorted and truncated as it specifies.
    ///
    /// Rows with equal sort keys are ordered by id in the same direction, so repeated
    /// calls return the same sequence.
    pub async fn list(&self, query: &ItemQuery) -> Result<Vec<AppItem>, DbErr> {
        let mut select = entity::prelude::AppItem::find();

        if let Some(search) = &query.search {
            let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
            select = select.filter(
                entity::app_item::Column::TitleSearch.like(LikeExpr::new(pattern).escape('\\')),
            );
        }
        if let Some(category) = &query.category {
            select = select.filter(entity::app_item::Column::Category.eq(category.as_str()));
        }
        if let Some(kind) = &query.kind {
            select = select.filter(entity::app_item::Column::Kind.eq(kind.as_str()));
        }

        let order = match query.order {
            SortOrder::Ascending => Order::Asc,
            SortOrder::Descending => Order::Desc,
        };

        let entities = select
            .order_by(sort_column(query.sort), order.clone())
            .order_by(entity::app_item::Column::Id, order)
            .limit(query.limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(AppItem::from_entity).collect()
    }

    /// Finds the earliest inserted item with the given slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<AppItem>, DbErr> {
        let entity = entity::prelude::AppItem::find()
            .filter(entity::app_item::Column::Slug.eq(slug))
            .order_by_asc(entity::app_item::Column::Id)
            .one(self.db)
            .await?;

        entity.map(AppItem::from_entity).transpose()
    }
}

fn sort_column(field: ItemSortField) -> entity::app_item::Column {
    use entity::app_item::Column;

    match field {
        ItemSortField::UpdatedAt => Column::UpdatedAt,
        ItemSortField::CreatedAt => Column::CreatedAt,
        ItemSortField::Title => Column::Title,
        ItemSortField::Slug => Column::Slug,
        ItemSortField::Kind => Column::Kind,
        ItemSortField::Category => Column::Category,
        ItemSortField::Version => Column::Version,
        ItemSortField::Size => Column::Size,
        ItemSortField::IsPremium => Column::IsPremium,
    }
}

/// Escapes LIKE wildcards so the search text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
