use crate::error::PolicyError;
use serde::{Deserialize, Serialize};

/// Nanoseconds since the Unix epoch. The host clock contract guarantees
/// monotonically non-decreasing values.
pub type TimestampNs = u64;

/// Opaque caller/owner identifier supplied pre-verified by the host.
/// The registry compares principals for equality and never interprets them.
pub type Principal = String;

/// Persisted policy record.
///
/// `id`, `policy_holder`, and `created_at` are immutable once assigned.
/// `is_claimed` may only move false to true, and only through
/// `PolicyRegistry::file_claim`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    pub id: String,
    pub policy_holder: Principal,
    pub policy_holder_name: String,
    /// Non-negative by convention; not enforced.
    pub coverage_amount: f64,
    pub premium_amount: f64,
    pub policy_start_date: TimestampNs,
    pub policy_end_date: TimestampNs,
    pub is_claimed: bool,
    pub created_at: TimestampNs,
    /// Absent until the first mutation, then refreshed on every mutation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<TimestampNs>,
}

/// Partial create/update payload as it arrives from the host.
///
/// Every member is optional so a JSON body with missing fields deserializes
/// and is rejected by validation with the offending field named, instead of
/// failing opaquely at the serde layer. The `policy_holder` member is
/// accepted on the wire but never trusted: ownership always comes from the
/// caller identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyDraft {
    pub policy_holder: Option<Principal>,
    pub policy_holder_name: Option<String>,
    pub coverage_amount: Option<f64>,
    pub premium_amount: Option<f64>,
    pub policy_start_date: Option<TimestampNs>,
    pub policy_end_date: Option<TimestampNs>,
    pub is_claimed: Option<bool>,
}

impl PolicyDraft {
    pub fn new(
        policy_holder_name: impl Into<String>,
        coverage_amount: f64,
        premium_amount: f64,
        policy_start_date: TimestampNs,
        policy_end_date: TimestampNs,
    ) -> Self {
        Self {
            policy_holder: None,
            policy_holder_name: Some(policy_holder_name.into()),
            coverage_amount: Some(coverage_amount),
            premium_amount: Some(premium_amount),
            policy_start_date: Some(policy_start_date),
            policy_end_date: Some(policy_end_date),
            is_claimed: Some(false),
        }
    }

    /// Validate the draft into a full payload.
    ///
    /// Fields are checked in declaration order and the first missing one is
    /// reported by its wire name.
    pub fn into_payload(self) -> Result<PolicyPayload, PolicyError> {
        Ok(PolicyPayload {
            policy_holder_name: require("policyHolderName", self.policy_holder_name)?,
            coverage_amount: require("coverageAmount", self.coverage_amount)?,
            premium_amount: require("premiumAmount", self.premium_amount)?,
            policy_start_date: require("policyStartDate", self.policy_start_date)?,
            policy_end_date: require("policyEndDate", self.policy_end_date)?,
            is_claimed: require("isClaimed", self.is_claimed)?,
        })
    }
}

/// Fully validated create/update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyPayload {
    pub policy_holder_name: String,
    pub coverage_amount: f64,
    pub premium_amount: f64,
    pub policy_start_date: TimestampNs,
    pub policy_end_date: TimestampNs,
    pub is_claimed: bool,
}

fn require<T>(field: &'static str, value: Option<T>) -> Result<T, PolicyError> {
    value.ok_or(PolicyError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_draft_validates() {
        let payload = PolicyDraft::new("Alice", 100_000.0, 500.0, 1_000, 2_000)
            .into_payload()
            .unwrap();
        assert_eq!(payload.policy_holder_name, "Alice");
        assert!(!payload.is_claimed);
    }

    #[test]
    fn first_missing_field_is_reported_by_wire_name() {
        let mut draft = PolicyDraft::new("Alice", 100_000.0, 500.0, 1_000, 2_000);
        draft.coverage_amount = None;
        draft.premium_amount = None;

        let err = draft.into_payload().unwrap_err();
        assert_eq!(err, PolicyError::MissingField("coverageAmount"));
    }

    #[test]
    fn empty_json_object_deserializes_then_fails_validation() {
        let draft: PolicyDraft = serde_json::from_str("{}").unwrap();
        let err = draft.into_payload().unwrap_err();
        assert_eq!(err, PolicyError::MissingField("policyHolderName"));
    }

    #[test]
    fn wire_fields_are_camel_case() {
        let json = r#"{
            "policyHolderName": "Bob",
            "coverageAmount": 250000.0,
            "premiumAmount": 80.5,
            "policyStartDate": 10,
            "policyEndDate": 20,
            "isClaimed": false
        }"#;
        let draft: PolicyDraft = serde_json::from_str(json).unwrap();
        let payload = draft.into_payload().unwrap();
        assert_eq!(payload.policy_holder_name, "Bob");
        assert_eq!(payload.premium_amount, 80.5);
    }

    #[test]
    fn absent_updated_at_is_skipped_on_serialization() {
        let record = PolicyRecord {
            id: "pol-1".to_string(),
            policy_holder: "principal-a".to_string(),
            policy_holder_name: "Alice".to_string(),
            coverage_amount: 100_000.0,
            premium_amount: 500.0,
            policy_start_date: 1_000,
            policy_end_date: 2_000,
            is_claimed: false,
            created_at: 42,
            updated_at: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("updatedAt").is_none());
        assert_eq!(value["createdAt"], 42);
    }
}
