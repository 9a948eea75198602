//! Item service for business logic.
//!
//! Handles listing and editing items, keyword search, and comments. Items returned to
//! clients are decorated with comments for everyone and with the last and next
//! booking for their owner only.

use chrono::{NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    model::page::Page,
    server::{
        data::{
            booking::BookingRepository, comment::CommentRepository, item::ItemRepository,
            item_request::ItemRequestRepository,
        },
        error::AppError,
        model::{
            booking::nearest_bookings,
            comment::{Comment, CreateCommentParams},
            item::{CreateItemParams, Item, ItemWithBookings, UpdateItemParams},
        },
        service::{require_non_blank, user::UserService},
    },
};

const MISSING_FIELDS: &str = "Item name, description and availability must be filled";

pub struct ItemService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a new item for its owner.
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item
    /// - `Err(AppError::NotFound)` - Owner or referenced item request does not exist
    /// - `Err(AppError::BadRequest)` - Name or description blank, or availability missing
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, AppError> {
        UserService::new(self.db).get(params.owner_id).await?;

        let name = require_non_blank(params.name, MISSING_FIELDS)?;
        let description = require_non_blank(params.description, MISSING_FIELDS)?;
        let available = params
            .available
            .ok_or_else(|| AppError::BadRequest(MISSING_FIELDS.to_string()))?;

        if let Some(request_id) = params.request_id {
            ItemRequestRepository::new(self.db)
                .find_by_id(request_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Item request with id {} not found", request_id))
                })?;
        }

        let item = ItemRepository::new(self.db)
            .create(params.owner_id, name, description, available, params.request_id)
            .await?;

        tracing::debug!("User {} listed item {}", item.owner_id, item.id);

        Ok(item)
    }

    /// Applies a partial update to an item.
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item
    /// - `Err(AppError::NotFound)` - No item with the given ID
    /// - `Err(AppError::Forbidden)` - The acting user does not own the item
    /// - `Err(AppError::BadRequest)` - A provided name or description is blank
    pub async fn update(&self, params: UpdateItemParams) -> Result<Item, AppError> {
        let repo = ItemRepository::new(self.db);

        let mut item = self.get_item(params.id).await?;
        if item.owner_id != params.user_id {
            return Err(AppError::Forbidden(format!(
                "User {} is not the owner of item {}",
                params.user_id, params.id
            )));
        }

        if let Some(name) = params.name {
            item.name = require_non_blank(Some(name), "Item name must not be blank")?;
        }
        if let Some(description) = params.description {
            item.description =
                require_non_blank(Some(description), "Item description must not be blank")?;
        }
        if let Some(available) = params.available {
            item.available = available;
        }

        Ok(repo.update(item).await?)
    }

    /// Retrieves an item with its comments, and with its nearest bookings if
    /// `user_id` owns it.
    ///
    /// # Returns
    /// - `Ok(ItemWithBookings)` - The decorated item
    /// - `Err(AppError::NotFound)` - No item with the given ID
    pub async fn get(&self, user_id: i32, item_id: i32) -> Result<ItemWithBookings, AppError> {
        let item = self.get_item(item_id).await?;

        let mut items = self.with_bookings(vec![item], user_id).await?;

        items
            .pop()
            .ok_or_else(|| AppError::InternalError(format!("Item {} lost while decorating", item_id)))
    }

    /// Lists the items owned by `owner_id`, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<ItemWithBookings>)` - Owned items with bookings and comments
    /// - `Err(AppError::NotFound)` - The owner does not exist
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        page: Option<Page>,
    ) -> Result<Vec<ItemWithBookings>, AppError> {
        UserService::new(self.db).get(owner_id).await?;

        let items = ItemRepository::new(self.db)
            .get_by_owner(owner_id, page)
            .await?;

        self.with_bookings(items, owner_id).await
    }

    /// Finds available items mentioning `text`. Blank text matches nothing.
    pub async fn search(&self, text: &str, page: Option<Page>) -> Result<Vec<Item>, AppError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(ItemRepository::new(self.db).search(text, page).await?)
    }

    /// Adds a comment from a user who has finished an approved booking of the item.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::NotFound)` - User or item does not exist
    /// - `Err(AppError::BadRequest)` - Text is blank or the user never finished a booking
    pub async fn add_comment(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        UserService::new(self.db).get(params.author_id).await?;
        self.get_item(params.item_id).await?;

        let text = require_non_blank(Some(params.text), "Comment text must not be blank")?;

        let now = now();
        let has_booked = BookingRepository::new(self.db)
            .has_finished_booking(params.author_id, params.item_id, now)
            .await?;
        if !has_booked {
            return Err(AppError::BadRequest(format!(
                "User {} has no finished booking of item {}",
                params.author_id, params.item_id
            )));
        }

        let comment = CommentRepository::new(self.db)
            .create(
                CreateCommentParams {
                    item_id: params.item_id,
                    author_id: params.author_id,
                    text,
                },
                now,
            )
            .await?;

        Ok(comment)
    }

    /// Retrieves the plain item.
    ///
    /// # Returns
    /// - `Ok(Item)` - The item
    /// - `Err(AppError::NotFound)` - No item with the given ID
    pub async fn get_item(&self, item_id: i32) -> Result<Item, AppError> {
        ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", item_id)))
    }

    /// Attaches comments to every item, and nearest bookings to those owned by `viewer_id`.
    async fn with_bookings(
        &self,
        items: Vec<Item>,
        viewer_id: i32,
    ) -> Result<Vec<ItemWithBookings>, AppError> {
        let item_ids: Vec<i32> = items.iter().map(|i| i.id).collect();
        let owned_ids: Vec<i32> = items
            .iter()
            .filter(|i| i.owner_id == viewer_id)
            .map(|i| i.id)
            .collect();

        let mut comments: HashMap<i32, Vec<Comment>> = HashMap::new();
        for comment in CommentRepository::new(self.db)
            .get_by_item_ids(item_ids)
            .await?
        {
            comments.entry(comment.item_id).or_default().push(comment);
        }

        let mut bookings: HashMap<i32, Vec<_>> = HashMap::new();
        for booking in BookingRepository::new(self.db)
            .get_active_by_item_ids(owned_ids)
            .await?
        {
            bookings.entry(booking.item_id).or_default().push(booking);
        }

        let now = now();
        Ok(items
            .into_iter()
            .map(|item| {
                let (last_booking, next_booking) = bookings
                    .get(&item.id)
                    .map(|b| nearest_bookings(b, now))
                    .unwrap_or((None, None));

                ItemWithBookings {
                    comments: comments.remove(&item.id).unwrap_or_default(),
                    last_booking,
                    next_booking,
                    item,
                }
            })
            .collect())
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
