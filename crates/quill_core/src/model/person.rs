//! Person record.
//!
//! # Invariants
//! - `email` is unique across all persons; the mutation service enforces it,
//!   the record itself cannot.
//! - `name`, `email` and `age` are stored as given; no shape is enforced.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PersonId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Compared verbatim for uniqueness (no case folding or trimming).
    pub email: String,
    pub age: Option<i32>,
}

impl Person {
    /// Creates a person with a freshly generated id.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: Option<i32>) -> Self {
        Self::with_id(Uuid::new_v4(), name, email, age)
    }

    /// Creates a person with a caller-provided id.
    ///
    /// Used when decoding persisted rows.
    pub fn with_id(
        id: PersonId,
        name: impl Into<String>,
        email: impl Into<String>,
        age: Option<i32>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}
