//! Read-side service.
//!
//! # Invariants
//! - An absent or empty filter returns the whole collection in append order.
//! - Filters are case-insensitive substring matches on one value per call.

use crate::model::{Comment, Person, Post};
use crate::repo::entity_repo::{EntityReader, RepoResult};
use crate::resolve;
use log::debug;

/// Top-level reads plus relationship expansion for returned entities.
pub struct QueryService<R: EntityReader> {
    repo: R,
}

impl<R: EntityReader> QueryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists people, keeping those whose `name` contains `filter`.
    pub fn list_people(&self, filter: Option<&str>) -> RepoResult<Vec<Person>> {
        let people = self.repo.people()?;
        let Some(needle) = normalize_filter(filter) else {
            return Ok(people);
        };
        let matched: Vec<Person> = people
            .into_iter()
            .filter(|person| contains_folded(&person.name, &needle))
            .collect();
        debug!(
            "event=list_people module=query status=ok filtered=true hits={}",
            matched.len()
        );
        Ok(matched)
    }

    /// Lists posts, keeping those whose `title` or `body` contains `filter`.
    pub fn list_posts(&self, filter: Option<&str>) -> RepoResult<Vec<Post>> {
        let posts = self.repo.posts()?;
        let Some(needle) = normalize_filter(filter) else {
            return Ok(posts);
        };
        let matched: Vec<Post> = posts
            .into_iter()
            .filter(|post| {
                contains_folded(&post.title, &needle) || contains_folded(&post.body, &needle)
            })
            .collect();
        debug!(
            "event=list_posts module=query status=ok filtered=true hits={}",
            matched.len()
        );
        Ok(matched)
    }

    pub fn list_comments(&self) -> RepoResult<Vec<Comment>> {
        self.repo.comments()
    }

    pub fn author_of_post(&self, post: &Post) -> RepoResult<Option<Person>> {
        resolve::author_of_post(&self.repo, post)
    }

    pub fn comments_of_post(&self, post: &Post) -> RepoResult<Vec<Comment>> {
        resolve::comments_of_post(&self.repo, post)
    }

    pub fn posts_of_person(&self, person: &Person) -> RepoResult<Vec<Post>> {
        resolve::posts_of_person(&self.repo, person)
    }

    pub fn comments_of_person(&self, person: &Person) -> RepoResult<Vec<Comment>> {
        resolve::comments_of_person(&self.repo, person)
    }

    pub fn author_of_comment(&self, comment: &Comment) -> RepoResult<Option<Person>> {
        resolve::author_of_comment(&self.repo, comment)
    }

    pub fn post_of_comment(&self, comment: &Comment) -> RepoResult<Option<Post>> {
        resolve::post_of_comment(&self.repo, comment)
    }
}

/// Lowercases a non-empty filter; `None` means "no filtering".
///
/// Whitespace is significant: `" "` filters for values containing a space.
pub fn normalize_filter(filter: Option<&str>) -> Option<String> {
    filter
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}
