//! Item request factory for creating test request entities.

use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{next_id, now};

pub struct ItemRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requester_id: i32,
    description: String,
    created: NaiveDateTime,
}

impl<'a> ItemRequestFactory<'a> {
    /// Creates a new ItemRequestFactory created now with a unique description.
    pub fn new(db: &'a DatabaseConnection, requester_id: i32) -> Self {
        Self {
            db,
            requester_id,
            description: format!("Looking for item {}", next_id()),
            created: now(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn created(mut self, created: NaiveDateTime) -> Self {
        self.created = created;
        self
    }

    pub async fn build(self) -> Result<entity::item_request::Model, DbErr> {
        entity::item_request::ActiveModel {
            description: ActiveValue::Set(self.description),
            requester_id: ActiveValue::Set(self.requester_id),
            created: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_item_request(
    db: &DatabaseConnection,
    requester_id: i32,
) -> Result<entity::item_request::Model, DbErr> {
    ItemRequestFactory::new(db, requester_id).build().await
}
