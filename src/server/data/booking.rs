use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::{
    model::{booking::BookingState, page::Page},
    server::{
        model::booking::{Booking, BookingStatus},
        util::page::paginate,
    },
};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking in the `Waiting` status.
    pub async fn create(
        &self,
        booker_id: i32,
        item_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Booking, DbErr> {
        let booking = entity::booking::ActiveModel {
            start_date: ActiveValue::Set(start),
            end_date: ActiveValue::Set(end),
            item_id: ActiveValue::Set(item_id),
            booker_id: ActiveValue::Set(booker_id),
            status: ActiveValue::Set(BookingStatus::Waiting.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(booking)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        booking.map(Booking::from_entity).transpose()
    }

    /// Moves a `Waiting` booking to `status`.
    ///
    /// The status check and the write are one statement, so concurrent decisions on the
    /// same booking cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The booking after the transition
    /// - `Ok(None)` - No waiting booking with the given ID
    pub async fn decide(&self, id: i32, status: BookingStatus) -> Result<Option<Booking>, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(entity::booking::Column::Status, Expr::value(status.as_str()))
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Waiting.as_str()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Returns the bookings made by `booker_id` matching `state`, latest start first.
    pub async fn get_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        now: NaiveDateTime,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, DbErr> {
        let query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(state_condition(state, now))
            .order_by_desc(entity::booking::Column::StartDate)
            .order_by_desc(entity::booking::Column::Id);

        let bookings = paginate(query, page).all(self.db).await?;

        bookings.into_iter().map(Booking::from_entity).collect()
    }

    /// Returns the bookings of items owned by `owner_id` matching `state`, latest start first.
    pub async fn get_by_item_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        now: NaiveDateTime,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, DbErr> {
        let query = entity::prelude::Booking::find()
            .join(JoinType::InnerJoin, entity::booking::Relation::Item.def())
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .filter(state_condition(state, now))
            .order_by_desc(entity::booking::Column::StartDate)
            .order_by_desc(entity::booking::Column::Id);

        let bookings = paginate(query, page).all(self.db).await?;

        bookings.into_iter().map(Booking::from_entity).collect()
    }

    /// Returns the non-rejected bookings of the given items.
    pub async fn get_active_by_item_ids(&self, item_ids: Vec<i32>) -> Result<Vec<Booking>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let bookings = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.is_in(item_ids))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Rejected.as_str()))
            .all(self.db)
            .await?;

        bookings.into_iter().map(Booking::from_entity).collect()
    }

    /// Checks whether `booker_id` has an approved booking of `item_id` that ended before `now`.
    pub async fn has_finished_booking(
        &self,
        booker_id: i32,
        item_id: i32,
        now: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved.as_str()))
            .filter(entity::booking::Column::EndDate.lt(now))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

/// Translates a booking list filter into a query condition relative to `now`.
fn state_condition(state: BookingState, now: NaiveDateTime) -> Condition {
    use entity::booking::Column;

    match state {
        BookingState::All => Condition::all(),
        BookingState::Current => Condition::all()
            .add(Column::StartDate.lt(now))
            .add(Column::EndDate.gt(now)),
        BookingState::Past => Condition::all().add(Column::EndDate.lt(now)),
        BookingState::Future => Condition::all().add(Column::StartDate.gt(now)),
        BookingState::Waiting => {
            Condition::all().add(Column::Status.eq(BookingStatus::Waiting.as_str()))
        }
        BookingState::Rejected => {
            Condition::all().add(Column::Status.eq(BookingStatus::Rejected.as_str()))
        }
    }
}
