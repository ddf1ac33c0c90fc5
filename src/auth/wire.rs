//! Wire types for the auth endpoints (REST).
//!
//! The backend speaks camelCase JSON.

use serde::{Deserialize, Serialize};

/// `POST /auth/login` request body. The only payload that crosses the wire
/// unencrypted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/register` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response to both login and register: the session token pair plus the
/// user profile summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

/// Minimal user identity returned at login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// `POST /auth/refresh` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// `POST /auth/refresh` response. Servers may rotate the refresh token;
/// when they don't, the stored one stays valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_request_uses_camel_case() {
        let body = RefreshRequest {
            refresh_token: "r-1".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["refreshToken"], "r-1");
    }

    #[test]
    fn refresh_response_tolerates_missing_rotation() {
        let resp: RefreshResponse = serde_json::from_str(r#"{"token":"a-2"}"#).unwrap();
        assert_eq!(resp.token, "a-2");
        assert!(resp.refresh_token.is_none());
    }
}
