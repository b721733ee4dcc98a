//! Shared plumbing for Caredesk services: health handlers, clock capability,
//! request-id middleware, serialization helpers, and tracing bootstrap.

pub mod clock;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
