pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_category_table;
mod m20261019_000002_create_app_item_table;
mod m20261019_000003_create_blog_post_table;
mod m20261019_000004_create_contact_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_category_table::Migration),
            Box::new(m20261019_000002_create_app_item_table::Migration),
            Box::new(m20261019_000003_create_blog_post_table::Migration),
            Box::new(m20261019_000004_create_contact_message_table::Migration),
        ]
    }
}
