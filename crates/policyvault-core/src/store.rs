use crate::types::PolicyRecord;
use std::collections::BTreeMap;

/// Ordered map from policy id to policy record.
///
/// This is the only shared mutable state in the system. It exposes exactly
/// the insert/get/remove/list surface the registry needs; invariant
/// enforcement happens in the registry, not here. Iteration order is an
/// implementation detail callers must not rely on.
#[derive(Debug, Default, Clone)]
pub struct PolicyStore {
    records: BTreeMap<String, PolicyRecord>,
}

impl PolicyStore {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the record at `id`. Always succeeds.
    pub fn insert(&mut self, id: impl Into<String>, record: PolicyRecord) {
        self.records.insert(id.into(), record);
    }

    pub fn get(&self, id: &str) -> Option<&PolicyRecord> {
        self.records.get(id)
    }

    /// Remove and return the previous record at `id`, if any.
    pub fn remove(&mut self, id: &str) -> Option<PolicyRecord> {
        self.records.remove(id)
    }

    pub fn iter_all(&self) -> impl Iterator<Item = &PolicyRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(id: &str, holder: &str) -> PolicyRecord {
        PolicyRecord {
            id: id.to_string(),
            policy_holder: holder.to_string(),
            policy_holder_name: "Holder".to_string(),
            coverage_amount: 50_000.0,
            premium_amount: 120.0,
            policy_start_date: 100,
            policy_end_date: 200,
            is_claimed: false,
            created_at: 1,
            updated_at: None,
        }
    }

    #[test]
    fn insert_then_get_returns_record() {
        let mut store = PolicyStore::new();
        store.insert("pol-1", sample_record("pol-1", "a"));

        assert_eq!(store.get("pol-1").unwrap().policy_holder, "a");
        assert!(store.get("pol-2").is_none());
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut store = PolicyStore::new();
        store.insert("pol-1", sample_record("pol-1", "a"));

        let mut replacement = sample_record("pol-1", "a");
        replacement.premium_amount = 999.0;
        store.insert("pol-1", replacement);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("pol-1").unwrap().premium_amount, 999.0);
    }

    #[test]
    fn remove_returns_previous_record() {
        let mut store = PolicyStore::new();
        store.insert("pol-1", sample_record("pol-1", "a"));

        let removed = store.remove("pol-1").unwrap();
        assert_eq!(removed.id, "pol-1");
        assert!(store.is_empty());
        assert!(store.remove("pol-1").is_none());
    }

    #[test]
    fn iter_all_yields_every_record() {
        let mut store = PolicyStore::new();
        store.insert("pol-1", sample_record("pol-1", "a"));
        store.insert("pol-2", sample_record("pol-2", "b"));

        let ids: Vec<_> = store.iter_all().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"pol-1".to_string()));
        assert!(ids.contains(&"pol-2".to_string()));
    }
}
