//! Request and response payloads for the CRM REST API.
//!
//! Every remote operation exchanges one of these shapes. Responses carry a
//! `success` flag plus an optional server message; the lead payloads use the
//! same camelCase wire names as [`crate::model::lead::Lead`].

use crate::model::lead::Lead;
use crate::model::stage::Stage;
use crate::model::user::User;
use serde::{Deserialize, Serialize};

/// Body sent to `POST /api/leads` and `PUT /api/leads/{id}`: a full
/// replacement of the mutable fields, without identifier or timestamps
/// (those are owned by the server).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SaveLeadRequest {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    #[serde(default)]
    pub position: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub deal_value: u64,
    #[serde(default)]
    pub stage: Stage,
    #[serde(default)]
    pub notes: String,
}

impl SaveLeadRequest {
    /// Full-replacement payload carrying the lead's current fields.
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            company: lead.company.clone(),
            position: lead.position.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            deal_value: lead.deal_value,
            stage: lead.stage,
            notes: lead.notes.clone(),
        }
    }

    /// Payload for the drag-and-drop stage move: every field as it is,
    /// except the stage.
    pub fn stage_change(lead: &Lead, stage: Stage) -> Self {
        Self {
            stage,
            ..Self::from_lead(lead)
        }
    }
}

/// `GET /api/leads` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub leads: Vec<Lead>,
}

/// `POST /api/leads` and `PUT /api/leads/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveLeadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub lead: Option<Lead>,
}

/// `DELETE /api/leads/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteLeadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/auth/login` body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/signup` body.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response shape shared by both auth endpoints. On success `token` and
/// `user` are present; on rejection `message` explains why.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> Lead {
        Lead {
            id: "42".into(),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            company: "Navy".into(),
            position: "Rear Admiral".into(),
            email: "grace@navy.example".into(),
            phone: "555-0100".into(),
            deal_value: 900,
            stage: Stage::Negotiation,
            notes: "compiler fan".into(),
            created_at: "2026-08-02T09:00:00".into(),
            updated_at: "2026-08-02T09:00:00".into(),
        }
    }

    #[test]
    fn stage_change_touches_only_the_stage() {
        let original = lead();
        let moved = SaveLeadRequest::stage_change(&original, Stage::Closed);
        assert_eq!(moved.stage, Stage::Closed);
        assert_eq!(
            SaveLeadRequest {
                stage: original.stage,
                ..moved.clone()
            },
            SaveLeadRequest::from_lead(&original)
        );
    }

    #[test]
    fn save_request_omits_id_and_timestamps() {
        let json = serde_json::to_string(&SaveLeadRequest::from_lead(&lead())).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("createdAt"));
        assert!(json.contains("\"dealValue\":900"));
    }

    #[test]
    fn auth_response_tolerates_missing_fields() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.token.is_none());
        assert_eq!(resp.message.as_deref(), Some("Invalid credentials"));
    }
}
