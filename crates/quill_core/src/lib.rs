//! Relational resolution and mutation-validation engine for a small graph of
//! people, posts and comments.
//!
//! Reads resolve relationships by scanning foreign-key fields; creates are
//! checked against uniqueness and reference constraints before they are
//! appended. Storage is pluggable: in-memory or SQLite.

pub mod config;
pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod resolve;
pub mod seed;
pub mod service;

pub use config::{ConfigError, CoreConfig, StoreBackend};
pub use engine::{Engine, EngineError, EngineResult, Request, Response};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::{Comment, CommentId, Person, PersonId, Post, PostId};
pub use notify::{
    EntityEvent, EntityPayload, EventBus, MutationKind, Subscription, SubscriptionFilter,
};
pub use repo::entity_repo::{EntityReader, EntityRepository, RepoError, RepoResult};
pub use repo::memory_repo::MemoryEntityRepository;
pub use repo::sqlite_repo::SqliteEntityRepository;
pub use seed::{seed_demo_data, SeedSummary};
pub use service::mutation_service::{
    ConstraintViolation, CreateComment, CreatePerson, CreatePost, MutationError,
    MutationResult, MutationService,
};
pub use service::query_service::QueryService;

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
