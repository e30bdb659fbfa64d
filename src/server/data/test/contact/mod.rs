use crate::server::{
    data::contact::ContactMessageRepository, model::contact::CreateContactMessageParams,
};
use chrono::{TimeZone, Utc};
use entity::prelude::ContactMessage;
use sea_orm::{DbErr, EntityTrait};
use test_utils::builder::TestBuilder;

mod create;
