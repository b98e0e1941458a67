//! Post record.

use super::person::PersonId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PostId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    /// Only published posts accept new comments.
    pub published: bool,
    pub author: PersonId,
}

impl Post {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        published: bool,
        author: PersonId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            published,
            author,
        }
    }
}
