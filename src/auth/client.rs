//! Login exchange against the assistant backend.
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Identity attached to a login, as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    // The backend writes snake_case, the old web client stored
    // camelCase; accept both.
    #[serde(alias = "personnelNumber")]
    pub personnel_number: String,
    pub name: String,
}

/// Bearer credential produced by the login exchange. The conversation
/// session only reads the token (and the personnel number when
/// present); where the credential is stored is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl Credential {
    /// A credential from a raw token, e.g. one provisioned through the
    /// environment instead of a login.
    pub fn bearer(token: &str) -> Self {
        Self {
            token: token.to_string(),
            user: None,
        }
    }

    pub fn personnel_number(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.personnel_number.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid personnel number or password")]
    InvalidCredentials,
    #[error("could not reach the login service: {0}")]
    Unavailable(String),
    #[error("login failed: {0}")]
    Rejected(String),
    #[error("could not decode login response: {0}")]
    Malformed(String),
}

/// Client for the backend's login endpoint.
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Exchange a personnel number and password for a bearer credential.
    pub async fn login(
        &self,
        personnel_number: &str,
        password: &str,
    ) -> Result<Credential, AuthError> {
        let url = format!("{}/api/v1/login", self.base_url);
        let payload = json!({
            "personnel_number": personnel_number,
            "password": password,
        });

        tracing::debug!("POST {} for personnel number {}", url, personnel_number);

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }

        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .or_else(|| v.get("message"))
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("status {}", status));
            return Err(AuthError::Rejected(message));
        }

        serde_json::from_str(&body).map_err(|e| AuthError::Malformed(e.to_string()))
    }
}
