//! Query and mutation use-case services.
//!
//! # Responsibility
//! - Answer top-level reads with optional substring filters.
//! - Validate and commit new entities against integrity constraints.
//!
//! # Invariants
//! - Services stay storage-agnostic; they only see `EntityReader` /
//!   `EntityRepository`.
//! - A rejected mutation leaves the store untouched.

pub mod mutation_service;
pub mod query_service;
