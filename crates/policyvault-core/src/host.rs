//! Host collaborator seams.
//!
//! The registry treats wall-clock time, caller identity, and id generation as
//! external services with a narrow synchronous contract. Concrete
//! implementations live in `policyvault-adapters`; tests inject
//! deterministic ones.

use crate::types::{Principal, TimestampNs};

/// Monotonically non-decreasing nanosecond timestamp source.
pub trait Clock: Send + Sync {
    fn now_ns(&self) -> TimestampNs;
}

/// Supplies the already-verified principal for the current request.
pub trait IdentityProvider: Send + Sync {
    fn caller(&self) -> Principal;
}

/// Supplies a fresh, collision-free string identifier per call.
pub trait IdGenerator: Send + Sync {
    fn fresh_id(&self) -> String;
}
