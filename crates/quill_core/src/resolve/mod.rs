//! Relationship resolution over foreign-key fields.
//!
//! # Responsibility
//! - Compute an entity's related entities by scanning the store.
//!
//! # Invariants
//! - A missing single relation resolves to `None`, never to an error.
//! - Collection relations keep store append order.
//! - Every lookup is a linear scan; no index is kept.

use crate::model::{Comment, Person, PersonId, Post, PostId};
use crate::repo::entity_repo::{EntityReader, RepoResult};

/// Person referenced by `post.author`.
pub fn author_of_post<R: EntityReader + ?Sized>(
    store: &R,
    post: &Post,
) -> RepoResult<Option<Person>> {
    find_person(store, post.author)
}

/// Comments whose `post` field names this post.
pub fn comments_of_post<R: EntityReader + ?Sized>(
    store: &R,
    post: &Post,
) -> RepoResult<Vec<Comment>> {
    Ok(store
        .comments()?
        .into_iter()
        .filter(|comment| comment.post == post.id)
        .collect())
}

/// Posts written by this person.
pub fn posts_of_person<R: EntityReader + ?Sized>(
    store: &R,
    person: &Person,
) -> RepoResult<Vec<Post>> {
    Ok(store
        .posts()?
        .into_iter()
        .filter(|post| post.author == person.id)
        .collect())
}

/// Comments written by this person.
pub fn comments_of_person<R: EntityReader + ?Sized>(
    store: &R,
    person: &Person,
) -> RepoResult<Vec<Comment>> {
    Ok(store
        .comments()?
        .into_iter()
        .filter(|comment| comment.author == person.id)
        .collect())
}

/// Person referenced by `comment.author`.
pub fn author_of_comment<R: EntityReader + ?Sized>(
    store: &R,
    comment: &Comment,
) -> RepoResult<Option<Person>> {
    find_person(store, comment.author)
}

/// Post referenced by `comment.post`.
///
/// Published state is irrelevant here; it only matters at creation time.
pub fn post_of_comment<R: EntityReader + ?Sized>(
    store: &R,
    comment: &Comment,
) -> RepoResult<Option<Post>> {
    find_post(store, comment.post)
}

pub(crate) fn find_person<R: EntityReader + ?Sized>(
    store: &R,
    id: PersonId,
) -> RepoResult<Option<Person>> {
    Ok(store.people()?.into_iter().find(|person| person.id == id))
}

pub(crate) fn find_post<R: EntityReader + ?Sized>(
    store: &R,
    id: PostId,
) -> RepoResult<Option<Post>> {
    Ok(store.posts()?.into_iter().find(|post| post.id == id))
}
