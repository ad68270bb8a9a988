//! API Models
//!
//! Data structures matching the backend payloads.

use serde::{Deserialize, Serialize};

/// The signed-in user as the app tracks it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub access_token: String,
}

/// Response to `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[allow(dead_code)]
    pub token_type: String,
}

/// Response to `POST /refresh`.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// A saved algorithm reference, owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub algorithm: String,
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct RegisterPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct BookmarkPayload<'a> {
    pub algorithm: &'a str,
}
