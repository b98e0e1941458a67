//! Write-side service: check-then-append for new entities.
//!
//! # Responsibility
//! - Check integrity constraints against the current store, then append.
//! - Field values are stored as given; only the constraints below can
//!   reject a create.
//!
//! # Invariants
//! - Every rejected call leaves all three collections unchanged.
//! - Person emails stay unique; posts and comments reference an existing
//!   author; comments reference an existing published post.
//! - A fresh random id is assigned to every created entity.
//! - Check and append are only atomic if the caller holds exclusive access
//!   to the store for the whole call (`&mut R` or the engine lock).

use crate::model::{Comment, Person, PersonId, Post, PostId};
use crate::repo::entity_repo::{EntityRepository, RepoError};
use crate::resolve::find_person;
use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type MutationResult<T> = Result<T, MutationError>;

/// Caller-facing integrity failure of a create operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintViolation {
    #[error("This email is taken")]
    EmailTaken,
    #[error("User not found")]
    AuthorNotFound,
    /// Author missing, or post missing or unpublished. Not distinguished.
    #[error("This user or post (or both) doesn't exist")]
    AuthorOrPostInvalid,
}

impl ConstraintViolation {
    /// Stable machine-readable code used in logs.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmailTaken => "email_taken",
            Self::AuthorNotFound => "author_not_found",
            Self::AuthorOrPostInvalid => "author_or_post_invalid",
        }
    }
}

#[derive(Debug, Error)]
pub enum MutationError {
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl MutationError {
    /// Returns the constraint violation, if that is what this error is.
    pub fn constraint(&self) -> Option<ConstraintViolation> {
        match self {
            Self::Constraint(violation) => Some(*violation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePerson {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author: PersonId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateComment {
    pub text: String,
    pub author: PersonId,
    pub post: PostId,
}

/// Create operations over an exclusively borrowed (or owned) store.
pub struct MutationService<R: EntityRepository> {
    repo: R,
}

impl<R: EntityRepository> MutationService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_inner(self) -> R {
        self.repo
    }

    /// Creates a person.
    ///
    /// # Errors
    /// - `ConstraintViolation::EmailTaken` when any person already uses
    ///   `input.email`.
    pub fn create_person(&mut self, input: CreatePerson) -> MutationResult<Person> {
        let result = self.try_create_person(input);
        match &result {
            Ok(person) => info!(
                "event=person_create module=mutation status=ok person_id={}",
                person.id
            ),
            Err(err) => log_failure("person_create", err),
        }
        result
    }

    /// Creates a post.
    ///
    /// # Errors
    /// - `ConstraintViolation::AuthorNotFound` when `input.author` names no
    ///   person.
    pub fn create_post(&mut self, input: CreatePost) -> MutationResult<Post> {
        let result = self.try_create_post(input);
        match &result {
            Ok(post) => info!(
                "event=post_create module=mutation status=ok post_id={} author_id={} published={}",
                post.id, post.author, post.published
            ),
            Err(err) => log_failure("post_create", err),
        }
        result
    }

    /// Creates a comment.
    ///
    /// # Errors
    /// - `ConstraintViolation::AuthorOrPostInvalid` when `input.author` names
    ///   no person, or `input.post` names no published post.
    pub fn create_comment(&mut self, input: CreateComment) -> MutationResult<Comment> {
        let result = self.try_create_comment(input);
        match &result {
            Ok(comment) => info!(
                "event=comment_create module=mutation status=ok comment_id={} post_id={}",
                comment.id, comment.post
            ),
            Err(err) => log_failure("comment_create", err),
        }
        result
    }

    fn try_create_person(&mut self, input: CreatePerson) -> MutationResult<Person> {
        let person = Person::new(input.name, input.email, input.age);
        let email_taken = self
            .repo
            .people()?
            .iter()
            .any(|existing| existing.email == person.email);
        if email_taken {
            return Err(ConstraintViolation::EmailTaken.into());
        }

        self.repo.append_person(&person)?;
        Ok(person)
    }

    fn try_create_post(&mut self, input: CreatePost) -> MutationResult<Post> {
        let post = Post::new(input.title, input.body, input.published, input.author);
        if find_person(&self.repo, post.author)?.is_none() {
            return Err(ConstraintViolation::AuthorNotFound.into());
        }

        self.repo.append_post(&post)?;
        Ok(post)
    }

    fn try_create_comment(&mut self, input: CreateComment) -> MutationResult<Comment> {
        let comment = Comment::new(input.text, input.author, input.post);
        let author_exists = find_person(&self.repo, comment.author)?.is_some();
        let post_open = self
            .repo
            .posts()?
            .iter()
            .any(|post| post.id == comment.post && post.published);
        if !author_exists || !post_open {
            return Err(ConstraintViolation::AuthorOrPostInvalid.into());
        }

        self.repo.append_comment(&comment)?;
        Ok(comment)
    }
}

fn log_failure(event: &str, err: &MutationError) {
    match err {
        MutationError::Constraint(violation) => info!(
            "event={event} module=mutation status=rejected reason={}",
            violation.code()
        ),
        MutationError::Repo(repo_err) => error!(
            "event={event} module=mutation status=error error_code=store_failed error={repo_err}"
        ),
    }
}
