//! Life-insurance policy registry core.
//!
//! This crate owns the policy record store and the CRUD/claim logic around it:
//! payload validation, ownership enforcement, immutability of history fields,
//! and the one-way claim transition. Transport, caller authentication, and
//! durable persistence are host concerns wired in through the `host` traits.

#![deny(unsafe_code)]

pub mod error;
pub mod host;
pub mod registry;
pub mod store;
pub mod types;

pub use error::{ErrorKind, PolicyError};
pub use host::{Clock, IdGenerator, IdentityProvider};
pub use registry::PolicyRegistry;
pub use store::PolicyStore;
pub use types::{PolicyDraft, PolicyPayload, PolicyRecord, Principal, TimestampNs};
