//! REST client for the CRM backend.
//!
//! Thin wrappers over `gloo-net` for the lead and auth endpoints. Every
//! failure mode (fetch rejection, non-2xx status, malformed body, a
//! well-formed `success: false`) comes back as an [`ApiError`] value; the
//! components decide how to degrade. Nothing here panics.

use common::model::lead::Lead;
use common::model::user::User;
use common::requests::{
    AuthResponse, DeleteLeadResponse, LeadsResponse, LoginRequest, SaveLeadRequest,
    SaveLeadResponse, SignupRequest,
};
use gloo_net::http::{Request, Response};
use thiserror::Error;

const API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The fetch itself failed; the backend is unreachable or the request
    /// never left the browser.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success HTTP status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Parse(String),
    /// The backend answered `success: false` with an explanation.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    fn rejected(message: Option<String>, fallback: &str) -> Self {
        ApiError::Rejected(message.unwrap_or_else(|| fallback.to_string()))
    }
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// `GET /api/leads`, the full collection.
pub async fn fetch_leads() -> Result<Vec<Lead>, ApiError> {
    let response = Request::get(&format!("{API_BASE}/leads"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body: LeadsResponse = read_json(response).await?;
    Ok(body.leads)
}

/// `POST /api/leads`. Returns the server-created lead, id and timestamps
/// assigned.
pub async fn create_lead(payload: &SaveLeadRequest) -> Result<Lead, ApiError> {
    let response = Request::post(&format!("{API_BASE}/leads"))
        .json(payload)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body: SaveLeadResponse = read_json(response).await?;
    match body.lead {
        Some(lead) if body.success => Ok(lead),
        _ => Err(ApiError::rejected(body.message, "Lead was not created")),
    }
}

/// `PUT /api/leads/{id}`. Full replacement; returns the updated lead.
pub async fn update_lead(id: &str, payload: &SaveLeadRequest) -> Result<Lead, ApiError> {
    let response = Request::put(&format!("{API_BASE}/leads/{id}"))
        .json(payload)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body: SaveLeadResponse = read_json(response).await?;
    match body.lead {
        Some(lead) if body.success => Ok(lead),
        _ => Err(ApiError::rejected(body.message, "Lead was not updated")),
    }
}

/// `DELETE /api/leads/{id}`.
pub async fn delete_lead(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&format!("{API_BASE}/leads/{id}"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body: DeleteLeadResponse = read_json(response).await?;
    if body.success {
        Ok(())
    } else {
        Err(ApiError::rejected(body.message, "Lead was not deleted"))
    }
}

/// `POST /api/auth/login`. Token plus user profile on success.
pub async fn login(request: &LoginRequest) -> Result<(String, User), ApiError> {
    auth_call("login", request).await
}

/// `POST /api/auth/signup`.
pub async fn signup(request: &SignupRequest) -> Result<(String, User), ApiError> {
    auth_call("signup", request).await
}

async fn auth_call<B: serde::Serialize>(
    endpoint: &str,
    body: &B,
) -> Result<(String, User), ApiError> {
    let response = Request::post(&format!("{API_BASE}/auth/{endpoint}"))
        .json(body)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    // Rejected credentials come back with a non-2xx status but still carry
    // a `message` worth showing, so parse the body before giving up.
    let status = response.status();
    let auth: AuthResponse = match response.json().await {
        Ok(auth) => auth,
        Err(e) if (200..300).contains(&status) => return Err(ApiError::Parse(e.to_string())),
        Err(_) => return Err(ApiError::Status(status)),
    };
    match (auth.success, auth.token, auth.user) {
        (true, Some(token), Some(user)) => Ok((token, user)),
        (_, _, _) => Err(ApiError::rejected(auth.message, "Authentication failed")),
    }
}
