use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::{
    model::page::Page,
    server::{model::item::Item, util::page::paginate},
};

pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner_id: i32,
        name: String,
        description: String,
        available: bool,
        request_id: Option<i32>,
    ) -> Result<Item, DbErr> {
        let item = entity::item::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            available: ActiveValue::Set(available),
            owner_id: ActiveValue::Set(owner_id),
            request_id: ActiveValue::Set(request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Item::from_entity(item))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Item>, DbErr> {
        let item = entity::prelude::Item::find_by_id(id).one(self.db).await?;

        Ok(item.map(Item::from_entity))
    }

    /// Loads several items at once, keyed by ID. Unknown IDs are absent from the map.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Item>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let items = entity::prelude::Item::find()
            .filter(entity::item::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(items
            .into_iter()
            .map(|i| (i.id, Item::from_entity(i)))
            .collect())
    }

    /// Persists every field of the item.
    pub async fn update(&self, item: Item) -> Result<Item, DbErr> {
        let item = entity::item::ActiveModel {
            id: ActiveValue::Unchanged(item.id),
            name: ActiveValue::Set(item.name),
            description: ActiveValue::Set(item.description),
            available: ActiveValue::Set(item.available),
            owner_id: ActiveValue::Set(item.owner_id),
            request_id: ActiveValue::Set(item.request_id),
        }
        .update(self.db)
        .await?;

        Ok(Item::from_entity(item))
    }

    /// Returns the items listed by `owner_id` ordered by ID.
    pub async fn get_by_owner(&self, owner_id: i32, page: Option<Page>) -> Result<Vec<Item>, DbErr> {
        let query = entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::item::Column::Id);

        let items = paginate(query, page).all(self.db).await?;

        Ok(items.into_iter().map(Item::from_entity).collect())
    }

    /// Finds available items whose name or description contains `text`, ignoring case.
    ///
    /// SQLite `LIKE` only folds ASCII, so matching and paging happen after loading the
    /// available items.
    pub async fn search(&self, text: &str, page: Option<Page>) -> Result<Vec<Item>, DbErr> {
        let needle = text.to_lowercase();

        let items = entity::prelude::Item::find()
            .filter(entity::item::Column::Available.eq(true))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        let matches = items.into_iter().filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        });

        let items: Vec<entity::item::Model> = match page {
            Some(page) => matches
                .skip(page.offset() as usize)
                .take(page.size as usize)
                .collect(),
            None => matches.collect(),
        };

        Ok(items.into_iter().map(Item::from_entity).collect())
    }

    /// Returns the items listed in answer to any of the given requests.
    pub async fn get_by_request_ids(&self, request_ids: Vec<i32>) -> Result<Vec<Item>, DbErr> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        let items = entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.is_in(request_ids))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await?;

        Ok(items.into_iter().map(Item::from_entity).collect())
    }
}
