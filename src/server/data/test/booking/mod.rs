use crate::{
    model::booking::BookingState,
    server::{data::booking::BookingRepository, model::booking::BookingStatus},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        booking::BookingFactory,
        helpers::{create_item_with_booker, hours_from_now, now},
    },
};

mod create;
mod decide;
mod get_by_booker;
mod get_by_item_owner;
mod has_finished_booking;
