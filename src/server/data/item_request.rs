use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::page::Page,
    server::{
        model::item_request::{CreateItemRequestParams, ItemRequest},
        util::page::paginate,
    },
};

pub struct ItemRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateItemRequestParams,
        created: NaiveDateTime,
    ) -> Result<ItemRequest, DbErr> {
        let request = entity::item_request::ActiveModel {
            description: ActiveValue::Set(params.description),
            requester_id: ActiveValue::Set(params.requester_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ItemRequest::from_entity(request))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ItemRequest>, DbErr> {
        let request = entity::prelude::ItemRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(request.map(ItemRequest::from_entity))
    }

    /// Returns the requests made by `requester_id`, newest first.
    pub async fn get_by_requester(&self, requester_id: i32) -> Result<Vec<ItemRequest>, DbErr> {
        let requests = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequesterId.eq(requester_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(requests.into_iter().map(ItemRequest::from_entity).collect())
    }

    /// Returns the requests made by everyone except `user_id`, newest first.
    pub async fn get_by_other_requesters(
        &self,
        user_id: i32,
        page: Option<Page>,
    ) -> Result<Vec<ItemRequest>, DbErr> {
        let query = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequesterId.ne(user_id))
            .order_by_desc(entity::item_request::Column::Created)
            .order_by_desc(entity::item_request::Column::Id);

        let requests = paginate(query, page).all(self.db).await?;

        Ok(requests.into_iter().map(ItemRequest::from_entity).collect())
    }
}
