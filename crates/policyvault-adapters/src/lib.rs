//! Host collaborator adapters for the policy registry.
//!
//! Real implementations (system clock, UUID v4 ids, static caller identity)
//! plus deterministic variants for tests and local simulation.

#![deny(unsafe_code)]

use chrono::Utc;
use policyvault_core::{Clock, IdGenerator, IdentityProvider, Principal, TimestampNs};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Wall-clock nanosecond source.
///
/// Observed values are clamped through an atomic high-water mark so the
/// monotonic contract holds even if the wall clock steps backwards.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicU64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now_ns(&self) -> TimestampNs {
        let wall = Utc::now().timestamp_nanos_opt().unwrap_or(0).max(0) as u64;
        self.last.fetch_max(wall, Ordering::SeqCst).max(wall)
    }
}

/// Random UUID v4 id source.
#[derive(Debug, Clone, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn fresh_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Identity provider wrapping the principal the host verified for the
/// current request scope.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    principal: Principal,
}

impl StaticIdentity {
    pub fn new(principal: impl Into<Principal>) -> Self {
        Self {
            principal: principal.into(),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn caller(&self) -> Principal {
        self.principal.clone()
    }
}

/// Deterministic clock for tests: starts at a fixed instant and moves only
/// when advanced.
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn starting_at(now: TimestampNs) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    pub fn advance(&self, delta_ns: TimestampNs) {
        self.now.fetch_add(delta_ns, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ns(&self) -> TimestampNs {
        self.now.load(Ordering::SeqCst)
    }
}

/// Deterministic `policy-0`, `policy-1`, ... id source for tests.
#[derive(Debug, Default)]
pub struct SequenceIds {
    next: AtomicU64,
}

impl SequenceIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequenceIds {
    fn fresh_id(&self) -> String {
        format!("policy-{}", self.next.fetch_add(1, Ordering::SeqCst))
    }
}
