use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        comment::CommentFactory,
        helpers::{create_item_with_booker, hours_from_now, now},
    },
};

mod create;
mod get_by_item_ids;
