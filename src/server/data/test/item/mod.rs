use crate::{model::page::Page, server::data::item::ItemRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_owner;
mod get_by_request_ids;
mod search;
mod update;
