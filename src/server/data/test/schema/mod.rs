use crate::server::data::schema::SchemaRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod table_names;
