//! Wire types for the profile endpoints (REST).

use serde::{Deserialize, Serialize};

/// The user profile form, round-tripped through `GET`/`PUT /profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Self-reported ADHD presentation, free-form (the backend treats it as
    /// an opaque label).
    #[serde(default)]
    pub adhd_type: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Assistant preferences the dashboard edits (reminder cadence, quiet
    /// hours, …). Opaque to the SDK.
    #[serde(default)]
    pub preferences: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_round_trips_through_json() {
        let profile = Profile {
            name: "Sam".into(),
            email: Some("sam@example.com".into()),
            adhd_type: Some("combined".into()),
            interests: vec!["music".into(), "chess".into()],
            preferences: serde_json::json!({ "reminders": "hourly" }),
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn profile_tolerates_sparse_payloads() {
        let profile: Profile = serde_json::from_str(r#"{"name":"Sam"}"#).unwrap();
        assert!(profile.interests.is_empty());
        assert!(profile.adhd_type.is_none());
    }
}
