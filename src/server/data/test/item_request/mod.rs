use crate::{
    model::page::Page,
    server::{data::item_request::ItemRequestRepository, model::item_request::CreateItemRequestParams},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::hours_from_now, item_request::ItemRequestFactory},
};

mod create;
mod get_by_other_requesters;
mod get_by_requester;
