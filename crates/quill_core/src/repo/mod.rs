//! Entity store contracts and implementations.
//!
//! # Responsibility
//! - Hold the person, post and comment collections as the single source of
//!   truth.
//! - Offer append and full ordered reads; nothing else.
//!
//! # Invariants
//! - Reads return records in append order.
//! - The store enforces no uniqueness or reference rules; callers check
//!   before appending.

pub mod entity_repo;
pub mod memory_repo;
pub mod sqlite_repo;
