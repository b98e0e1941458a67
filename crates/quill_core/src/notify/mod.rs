//! In-process notification side-channel for created entities.
//!
//! # Responsibility
//! - Fan out one event per successful create to matching subscribers.
//!
//! # Invariants
//! - Publication is fire-and-forget: no acknowledgement, no effect on the
//!   mutation that triggered it.
//! - A subscription whose receiver was dropped is pruned on the next publish.

mod bus;
mod event;

pub use bus::{EventBus, Subscription};
pub use event::{EntityEvent, EntityPayload, MutationKind, SubscriptionFilter};
