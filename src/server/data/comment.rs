use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment and returns it with its author's name.
    pub async fn create(
        &self,
        params: CreateCommentParams,
        created: NaiveDateTime,
    ) -> Result<Comment, DbErr> {
        let comment = entity::comment::ActiveModel {
            text: ActiveValue::Set(params.text),
            item_id: ActiveValue::Set(params.item_id),
            author_id: ActiveValue::Set(params.author_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = entity::prelude::User::find_by_id(comment.author_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Author {} of comment {} not found",
                    comment.author_id, comment.id
                ))
            })?;

        Ok(Comment::from_entity(comment, author.name))
    }

    /// Returns the comments on any of the given items, oldest first.
    pub async fn get_by_item_ids(&self, item_ids: Vec<i32>) -> Result<Vec<Comment>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ItemId.is_in(item_ids))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment::Column::Created)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(comments
            .into_iter()
            .map(|(comment, author)| {
                let author_name = author.map(|a| a.name).unwrap_or_default();
                Comment::from_entity(comment, author_name)
            })
            .collect())
    }
}
