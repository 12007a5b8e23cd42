use crate::error::PolicyError;
use crate::host::{Clock, IdGenerator, IdentityProvider};
use crate::store::PolicyStore;
use crate::types::{PolicyDraft, PolicyRecord};
use std::sync::Arc;
use tracing::{debug, info};

/// Core logic layer over [`PolicyStore`].
///
/// Validates payloads, enforces ownership and state invariants, and drives
/// the six policy operations. The clock, caller identity, and id source are
/// injected so tests can run with fixed collaborators.
///
/// Invariant handling:
/// - `id`, `policy_holder`, and `created_at` never change after creation.
/// - `is_claimed` transitions only false to true, and only via `file_claim`.
/// - Every failed operation leaves the store untouched.
pub struct PolicyRegistry {
    store: PolicyStore,
    clock: Arc<dyn Clock>,
    identity: Arc<dyn IdentityProvider>,
    ids: Arc<dyn IdGenerator>,
}

impl PolicyRegistry {
    pub fn new(
        clock: Arc<dyn Clock>,
        identity: Arc<dyn IdentityProvider>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self::with_store(PolicyStore::new(), clock, identity, ids)
    }

    /// Build a registry over an existing store, e.g. one hydrated by the host.
    pub fn with_store(
        store: PolicyStore,
        clock: Arc<dyn Clock>,
        identity: Arc<dyn IdentityProvider>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            store,
            clock,
            identity,
            ids,
        }
    }

    pub fn store(&self) -> &PolicyStore {
        &self.store
    }

    /// Create a new policy owned by the current caller.
    ///
    /// Ownership is forced from the caller identity; a `policyHolder` member
    /// in the draft is ignored rather than trusted. The claim flag always
    /// starts false.
    pub fn create_policy(&mut self, draft: PolicyDraft) -> Result<PolicyRecord, PolicyError> {
        let payload = draft.into_payload()?;
        let id = self.ids.fresh_id();

        let record = PolicyRecord {
            id: id.clone(),
            policy_holder: self.identity.caller(),
            policy_holder_name: payload.policy_holder_name,
            coverage_amount: payload.coverage_amount,
            premium_amount: payload.premium_amount,
            policy_start_date: payload.policy_start_date,
            policy_end_date: payload.policy_end_date,
            is_claimed: false,
            created_at: self.clock.now_ns(),
            updated_at: None,
        };

        self.store.insert(id, record.clone());
        info!(policy_id = %record.id, holder = %record.policy_holder, "policy created");
        Ok(record)
    }

    pub fn get_policy(&self, id: &str) -> Result<PolicyRecord, PolicyError> {
        require_id(id)?;
        debug!(policy_id = %id, "policy lookup");
        match self.store.get(id) {
            Some(record) => Ok(record.clone()),
            None => Err(PolicyError::not_found(id)),
        }
    }

    /// All policies owned by the current caller. Empty is success, not an
    /// error. Linear scan; there is no secondary index by holder.
    pub fn policies_for_caller(&self) -> Vec<PolicyRecord> {
        let caller = self.identity.caller();
        self.store
            .iter_all()
            .filter(|record| record.policy_holder == caller)
            .cloned()
            .collect()
    }

    /// Replace the mutable fields of an existing policy.
    ///
    /// `id`, `policy_holder`, `created_at`, and `is_claimed` are preserved
    /// regardless of payload content; the claim flag only moves through
    /// `file_claim`.
    pub fn update_policy(
        &mut self,
        id: &str,
        draft: PolicyDraft,
    ) -> Result<PolicyRecord, PolicyError> {
        require_id(id)?;
        let payload = draft.into_payload()?;

        let existing = match self.store.get(id) {
            Some(record) => record.clone(),
            None => return Err(PolicyError::not_found(id)),
        };

        let updated = PolicyRecord {
            id: existing.id,
            policy_holder: existing.policy_holder,
            policy_holder_name: payload.policy_holder_name,
            coverage_amount: payload.coverage_amount,
            premium_amount: payload.premium_amount,
            policy_start_date: payload.policy_start_date,
            policy_end_date: payload.policy_end_date,
            is_claimed: existing.is_claimed,
            created_at: existing.created_at,
            updated_at: Some(self.clock.now_ns()),
        };

        self.store.insert(id, updated.clone());
        debug!(policy_id = %id, "policy updated");
        Ok(updated)
    }

    /// Permanently remove a policy, returning it as it existed immediately
    /// before removal.
    pub fn delete_policy(&mut self, id: &str) -> Result<PolicyRecord, PolicyError> {
        require_id(id)?;
        match self.store.remove(id) {
            Some(record) => {
                info!(policy_id = %id, "policy deleted");
                Ok(record)
            }
            None => Err(PolicyError::not_found(id)),
        }
    }

    /// One-way claim transition.
    ///
    /// Deliberately not idempotent: a second filing on the same policy is a
    /// reported conflict, never a silent success.
    pub fn file_claim(&mut self, id: &str) -> Result<PolicyRecord, PolicyError> {
        require_id(id)?;

        let mut record = match self.store.get(id) {
            Some(record) => record.clone(),
            None => return Err(PolicyError::not_found(id)),
        };

        if record.is_claimed {
            return Err(PolicyError::claim_already_filed(id));
        }

        record.is_claimed = true;
        record.updated_at = Some(self.clock.now_ns());
        self.store.insert(id, record.clone());
        info!(policy_id = %id, "claim filed");
        Ok(record)
    }
}

fn require_id(id: &str) -> Result<(), PolicyError> {
    if id.is_empty() {
        return Err(PolicyError::EmptyId);
    }
    Ok(())
}
