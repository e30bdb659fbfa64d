use sea_orm::DbErr;
use std::str::FromStr;

use crate::model::category::{CategoryDto, CategoryKind};

/// Catalog category. Read-only through the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub kind: CategoryKind,
    pub icon: Option<String>,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Category)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored `type` is not `app`, `game` or `both`
    pub fn from_entity(entity: entity::category::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            kind: CategoryKind::from_str(&entity.kind).map_err(DbErr::Custom)?,
            icon: entity.icon,
        })
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id.to_string(),
            name: self.name,
            slug: self.slug,
            kind: self.kind,
            icon: self.icon,
        }
    }
}
