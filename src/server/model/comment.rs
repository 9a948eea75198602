use chrono::NaiveDateTime;

use crate::model::comment::CommentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub item_id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub created: NaiveDateTime,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            author_name: self.author_name,
            created: self.created,
        }
    }

    /// Builds a comment from its entity and the name of its author.
    pub fn from_entity(entity: entity::comment::Model, author_name: String) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            item_id: entity.item_id,
            author_id: entity.author_id,
            author_name,
            created: entity.created,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub item_id: i32,
    pub author_id: i32,
    pub text: String,
}
