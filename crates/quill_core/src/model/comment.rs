//! Comment record.

use super::person::PersonId;
use super::post::PostId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CommentId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub author: PersonId,
    pub post: PostId,
}

impl Comment {
    pub fn new(text: impl Into<String>, author: PersonId, post: PostId) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            author,
            post,
        }
    }
}
