//! Item request service for business logic.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    model::page::Page,
    server::{
        data::{item::ItemRepository, item_request::ItemRequestRepository},
        error::AppError,
        model::{
            item::Item,
            item_request::{CreateItemRequestParams, ItemRequest, ItemRequestWithItems},
        },
        service::{require_non_blank, user::UserService},
    },
};

pub struct ItemRequestService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ItemRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a request for an item that nobody has listed yet.
    ///
    /// # Returns
    /// - `Ok(ItemRequestWithItems)` - The new request, without items
    /// - `Err(AppError::NotFound)` - The requester does not exist
    /// - `Err(AppError::BadRequest)` - Description is blank
    pub async fn create(
        &self,
        params: CreateItemRequestParams,
    ) -> Result<ItemRequestWithItems, AppError> {
        UserService::new(self.db).get(params.requester_id).await?;

        let description = require_non_blank(
            Some(params.description),
            "Request description must not be blank",
        )?;

        let request = ItemRequestRepository::new(self.db)
            .create(
                CreateItemRequestParams {
                    requester_id: params.requester_id,
                    description,
                },
                Utc::now().naive_utc(),
            )
            .await?;

        Ok(ItemRequestWithItems {
            request,
            items: Vec::new(),
        })
    }

    /// Lists the requests of `user_id`, newest first.
    pub async fn get_own(&self, user_id: i32) -> Result<Vec<ItemRequestWithItems>, AppError> {
        UserService::new(self.db).get(user_id).await?;

        let requests = ItemRequestRepository::new(self.db)
            .get_by_requester(user_id)
            .await?;

        self.with_items(requests).await
    }

    /// Lists the requests of every user except `user_id`, newest first.
    pub async fn get_all(
        &self,
        user_id: i32,
        page: Option<Page>,
    ) -> Result<Vec<ItemRequestWithItems>, AppError> {
        UserService::new(self.db).get(user_id).await?;

        let requests = ItemRequestRepository::new(self.db)
            .get_by_other_requesters(user_id, page)
            .await?;

        self.with_items(requests).await
    }

    /// Retrieves a single request with the items listed in answer to it.
    ///
    /// # Returns
    /// - `Ok(ItemRequestWithItems)` - The request
    /// - `Err(AppError::NotFound)` - The user or the request does not exist
    pub async fn get(
        &self,
        user_id: i32,
        request_id: i32,
    ) -> Result<ItemRequestWithItems, AppError> {
        UserService::new(self.db).get(user_id).await?;

        let request = ItemRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Item request with id {} not found", request_id))
            })?;

        let mut requests = self.with_items(vec![request]).await?;

        requests.pop().ok_or_else(|| {
            AppError::InternalError(format!("Item request {} lost while loading items", request_id))
        })
    }

    async fn with_items(
        &self,
        requests: Vec<ItemRequest>,
    ) -> Result<Vec<ItemRequestWithItems>, AppError> {
        let request_ids = requests.iter().map(|r| r.id).collect();

        let mut items: HashMap<i32, Vec<Item>> = HashMap::new();
        for item in ItemRepository::new(self.db)
            .get_by_request_ids(request_ids)
            .await?
        {
            if let Some(request_id) = item.request_id {
                items.entry(request_id).or_default().push(item);
            }
        }

        Ok(requests
            .into_iter()
            .map(|request| ItemRequestWithItems {
                items: items.remove(&request.id).unwrap_or_default(),
                request,
            })
            .collect())
    }
}
