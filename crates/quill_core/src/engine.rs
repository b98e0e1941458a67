//! Engine facade: the single entry point a protocol layer calls.
//!
//! # Responsibility
//! - Own the entity store behind one mutex.
//! - Dispatch requests to the query or mutation service.
//! - Publish a notification for every successful create.
//!
//! # Invariants
//! - Each check-then-append runs entirely under the store lock, so two
//!   concurrent creates can never both pass the same uniqueness check.
//! - Notifications are published after the lock is released and never change
//!   the outcome returned to the caller.

use crate::model::{Comment, Person, Post};
use crate::notify::{EntityEvent, EntityPayload, EventBus, Subscription, SubscriptionFilter};
use crate::repo::entity_repo::{EntityRepository, RepoError};
use crate::service::mutation_service::{
    CreateComment, CreatePerson, CreatePost, MutationError, MutationService,
};
use crate::service::query_service::QueryService;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Mutation(#[from] MutationError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error("entity store lock poisoned by an earlier panic")]
    StorePoisoned,
}

/// Top-level operation accepted by [`Engine::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    ListPeople {
        #[serde(default)]
        query: Option<String>,
    },
    ListPosts {
        #[serde(default)]
        query: Option<String>,
    },
    ListComments,
    CreatePerson(CreatePerson),
    CreatePost(CreatePost),
    CreateComment(CreateComment),
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListPeople { .. } => "list_people",
            Self::ListPosts { .. } => "list_posts",
            Self::ListComments => "list_comments",
            Self::CreatePerson(_) => "create_person",
            Self::CreatePost(_) => "create_post",
            Self::CreateComment(_) => "create_comment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    People(Vec<Person>),
    Posts(Vec<Post>),
    Comments(Vec<Comment>),
    Person(Person),
    Post(Post),
    Comment(Comment),
}

/// Thread-safe engine over any entity store.
pub struct Engine<R: EntityRepository> {
    store: Mutex<R>,
    events: EventBus,
}

impl<R: EntityRepository> Engine<R> {
    pub fn new(repo: R) -> Self {
        Self {
            store: Mutex::new(repo),
            events: EventBus::new(),
        }
    }

    pub fn subscribe(&self, filter: SubscriptionFilter) -> Subscription {
        self.events.subscribe(filter)
    }

    /// Consumes the engine and hands back the store.
    pub fn into_inner(self) -> EngineResult<R> {
        self.store
            .into_inner()
            .map_err(|_| EngineError::StorePoisoned)
    }

    /// Dispatches one request to the query or mutation service.
    pub fn execute(&self, request: Request) -> EngineResult<Response> {
        debug!(
            "event=request_dispatch module=engine status=start op={}",
            request.name()
        );
        match request {
            Request::ListPeople { query } => {
                self.list_people(query.as_deref()).map(Response::People)
            }
            Request::ListPosts { query } => self.list_posts(query.as_deref()).map(Response::Posts),
            Request::ListComments => self.list_comments().map(Response::Comments),
            Request::CreatePerson(input) => self.create_person(input).map(Response::Person),
            Request::CreatePost(input) => self.create_post(input).map(Response::Post),
            Request::CreateComment(input) => self.create_comment(input).map(Response::Comment),
        }
    }

    pub fn list_people(&self, filter: Option<&str>) -> EngineResult<Vec<Person>> {
        self.read(|query| query.list_people(filter))
    }

    pub fn list_posts(&self, filter: Option<&str>) -> EngineResult<Vec<Post>> {
        self.read(|query| query.list_posts(filter))
    }

    pub fn list_comments(&self) -> EngineResult<Vec<Comment>> {
        self.read(|query| query.list_comments())
    }

    pub fn author_of_post(&self, post: &Post) -> EngineResult<Option<Person>> {
        self.read(|query| query.author_of_post(post))
    }

    pub fn comments_of_post(&self, post: &Post) -> EngineResult<Vec<Comment>> {
        self.read(|query| query.comments_of_post(post))
    }

    pub fn posts_of_person(&self, person: &Person) -> EngineResult<Vec<Post>> {
        self.read(|query| query.posts_of_person(person))
    }

    pub fn comments_of_person(&self, person: &Person) -> EngineResult<Vec<Comment>> {
        self.read(|query| query.comments_of_person(person))
    }

    pub fn author_of_comment(&self, comment: &Comment) -> EngineResult<Option<Person>> {
        self.read(|query| query.author_of_comment(comment))
    }

    pub fn post_of_comment(&self, comment: &Comment) -> EngineResult<Option<Post>> {
        self.read(|query| query.post_of_comment(comment))
    }

    pub fn create_person(&self, input: CreatePerson) -> EngineResult<Person> {
        let person = self.write(|mutation| mutation.create_person(input))?;
        self.announce(EntityPayload::Person(person.clone()));
        Ok(person)
    }

    pub fn create_post(&self, input: CreatePost) -> EngineResult<Post> {
        let post = self.write(|mutation| mutation.create_post(input))?;
        self.announce(EntityPayload::Post(post.clone()));
        Ok(post)
    }

    pub fn create_comment(&self, input: CreateComment) -> EngineResult<Comment> {
        let comment = self.write(|mutation| mutation.create_comment(input))?;
        self.announce(EntityPayload::Comment(comment.clone()));
        Ok(comment)
    }

    fn read<T>(
        &self,
        f: impl FnOnce(&QueryService<&R>) -> Result<T, RepoError>,
    ) -> EngineResult<T> {
        let guard = self.lock()?;
        let query = QueryService::new(&*guard);
        Ok(f(&query)?)
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&mut MutationService<&mut R>) -> Result<T, MutationError>,
    ) -> EngineResult<T> {
        let mut guard = self.lock()?;
        let mut mutation = MutationService::new(&mut *guard);
        Ok(f(&mut mutation)?)
    }

    fn announce(&self, entity: EntityPayload) {
        self.events.publish(&EntityEvent::created(entity));
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, R>> {
        self.store.lock().map_err(|_| {
            error!("event=store_lock module=engine status=error error_code=lock_poisoned");
            EngineError::StorePoisoned
        })
    }
}
