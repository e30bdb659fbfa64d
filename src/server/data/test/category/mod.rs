use crate::{model::category::CategoryKind, server::data::category::CategoryRepository};
use entity::prelude::Category;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::category::CategoryFactory};

mod get_all;
