use crate::server::error::AppError;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        booking::BookingFactory,
        helpers::{create_finished_booking, create_item_with_booker, hours_from_now},
    },
};
