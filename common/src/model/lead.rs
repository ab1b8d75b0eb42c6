use crate::model::stage::Stage;
use serde::{Deserialize, Serialize};

/// A sales prospect record tracked through the pipeline.
///
/// The identifier is assigned by the server on creation and never changes.
/// `created_at` is an ISO-8601 timestamp set once by the server; sorting the
/// string lexicographically sorts by creation time. Wire format is camelCase
/// JSON, matching the REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    #[serde(default)]
    pub position: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Monetary deal value in whole dollars. Unsigned, so the non-negative
    /// invariant holds by construction.
    #[serde(default)]
    pub deal_value: u64,
    #[serde(default)]
    pub stage: Stage,
    #[serde(default)]
    pub notes: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive match against name, company and email, as used by
    /// the contacts search box.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.first_name.to_lowercase().contains(&q)
            || self.last_name.to_lowercase().contains(&q)
            || self.company.to_lowercase().contains(&q)
            || self.email.to_lowercase().contains(&q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lead {
        Lead {
            id: "b7e2".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            company: "Analytical Engines".into(),
            position: "CTO".into(),
            email: "ada@analytical.example".into(),
            phone: "".into(),
            deal_value: 12500,
            stage: Stage::Qualified,
            notes: "".into(),
            created_at: "2026-08-01T10:00:00".into(),
            updated_at: "2026-08-01T10:00:00".into(),
        }
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"firstName\":\"Ada\""));
        assert!(json.contains("\"dealValue\":12500"));
        assert!(json.contains("\"createdAt\":"));
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let lead: Lead = serde_json::from_str(
            r#"{"id":"1","firstName":"Ada","lastName":"L","company":"AE",
                "email":"a@e.x","createdAt":"2026-08-01T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(lead.deal_value, 0);
        assert_eq!(lead.stage, Stage::Prospect);
        assert_eq!(lead.phone, "");
    }

    #[test]
    fn search_matches_any_field() {
        let lead = sample();
        assert!(lead.matches("ada"));
        assert!(lead.matches("ENGINES"));
        assert!(lead.matches("analytical.example"));
        assert!(!lead.matches("zzz"));
    }
}
