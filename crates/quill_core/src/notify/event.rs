use crate::model::{Comment, Person, Post, PostId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MutationKind {
    Created,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum EntityPayload {
    Person(Person),
    Post(Post),
    Comment(Comment),
}

/// One notification, shaped as `{ mutation, entity }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityEvent {
    pub mutation: MutationKind,
    pub entity: EntityPayload,
}

impl EntityEvent {
    pub fn created(entity: EntityPayload) -> Self {
        Self {
            mutation: MutationKind::Created,
            entity,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self.entity {
            EntityPayload::Person(_) => "person",
            EntityPayload::Post(_) => "post",
            EntityPayload::Comment(_) => "comment",
        }
    }
}

/// Which events a subscriber wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "topic", content = "post", rename_all = "snake_case")]
pub enum SubscriptionFilter {
    All,
    People,
    /// Published posts only; drafts are never announced.
    Posts,
    CommentsOnPost(PostId),
}

impl SubscriptionFilter {
    pub fn matches(&self, event: &EntityEvent) -> bool {
        match (self, &event.entity) {
            (Self::All, _) => true,
            (Self::People, EntityPayload::Person(_)) => true,
            (Self::Posts, EntityPayload::Post(post)) => post.published,
            (Self::CommentsOnPost(post_id), EntityPayload::Comment(comment)) => {
                comment.post == *post_id
            }
            _ => false,
        }
    }
}
