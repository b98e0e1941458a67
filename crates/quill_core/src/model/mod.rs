//! Domain model for the people/posts/comments graph.
//!
//! # Responsibility
//! - Define the three entity records and their identifier aliases.
//!
//! # Invariants
//! - Relationships are plain id fields; back-references are never stored.
//! - Identifiers are random v4 UUIDs assigned once at creation.

pub mod comment;
pub mod person;
pub mod post;

pub use comment::{Comment, CommentId};
pub use person::{Person, PersonId};
pub use post::{Post, PostId};
