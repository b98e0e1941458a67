//! Entity store traits and error types.
//!
//! # Invariants
//! - An appended record is visible to every read that starts afterwards.
//! - Implementations never reorder records.

use crate::db::DbError;
use crate::model::{Comment, Person, Post};
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure of the storage collaborator itself, never of a domain rule.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("invalid persisted entity data: {0}")]
    InvalidData(String),
    #[error("required table `{0}` is missing")]
    MissingRequiredTable(&'static str),
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read half of the store: full linear reads in append order.
pub trait EntityReader {
    fn people(&self) -> RepoResult<Vec<Person>>;
    fn posts(&self) -> RepoResult<Vec<Post>>;
    fn comments(&self) -> RepoResult<Vec<Comment>>;
}

/// Append half of the store.
///
/// Appending is durable before the call returns.
pub trait EntityRepository: EntityReader {
    fn append_person(&mut self, person: &Person) -> RepoResult<()>;
    fn append_post(&mut self, post: &Post) -> RepoResult<()>;
    fn append_comment(&mut self, comment: &Comment) -> RepoResult<()>;
}

impl<R: EntityReader + ?Sized> EntityReader for &R {
    fn people(&self) -> RepoResult<Vec<Person>> {
        (**self).people()
    }

    fn posts(&self) -> RepoResult<Vec<Post>> {
        (**self).posts()
    }

    fn comments(&self) -> RepoResult<Vec<Comment>> {
        (**self).comments()
    }
}

impl<R: EntityReader + ?Sized> EntityReader for &mut R {
    fn people(&self) -> RepoResult<Vec<Person>> {
        (**self).people()
    }

    fn posts(&self) -> RepoResult<Vec<Post>> {
        (**self).posts()
    }

    fn comments(&self) -> RepoResult<Vec<Comment>> {
        (**self).comments()
    }
}

impl<R: EntityRepository + ?Sized> EntityRepository for &mut R {
    fn append_person(&mut self, person: &Person) -> RepoResult<()> {
        (**self).append_person(person)
    }

    fn append_post(&mut self, post: &Post) -> RepoResult<()> {
        (**self).append_post(post)
    }

    fn append_comment(&mut self, comment: &Comment) -> RepoResult<()> {
        (**self).append_comment(comment)
    }
}
