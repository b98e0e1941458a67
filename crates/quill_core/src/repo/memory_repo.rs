//! In-memory entity store.

use crate::model::{Comment, Person, Post};
use crate::repo::entity_repo::{EntityReader, EntityRepository, RepoResult};

/// Vec-backed store living for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntityRepository {
    people: Vec<Person>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl MemoryEntityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.posts.is_empty() && self.comments.is_empty()
    }
}

impl EntityReader for MemoryEntityRepository {
    fn people(&self) -> RepoResult<Vec<Person>> {
        Ok(self.people.clone())
    }

    fn posts(&self) -> RepoResult<Vec<Post>> {
        Ok(self.posts.clone())
    }

    fn comments(&self) -> RepoResult<Vec<Comment>> {
        Ok(self.comments.clone())
    }
}

impl EntityRepository for MemoryEntityRepository {
    fn append_person(&mut self, person: &Person) -> RepoResult<()> {
        self.people.push(person.clone());
        Ok(())
    }

    fn append_post(&mut self, post: &Post) -> RepoResult<()> {
        self.posts.push(post.clone());
        Ok(())
    }

    fn append_comment(&mut self, comment: &Comment) -> RepoResult<()> {
        self.comments.push(comment.clone());
        Ok(())
    }
}
