//! Backend REST Client
//!
//! Thin async wrappers over the bookmark backend, one per endpoint. The
//! backend is a black box; there is no retry or timeout policy here. A
//! `Status` error keeps the HTTP code so callers can react to 401 by
//! dropping the session.

use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use crate::models::{Bookmark, BookmarkPayload, RefreshResponse, RegisterPayload, TokenResponse};

pub const API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Status {
                status: StatusCode::UNAUTHORIZED,
                ..
            }
        )
    }
}

fn url(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}

/// Turn non-2xx responses into `ApiError::Status`.
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

/// `POST /login` with a form-encoded credential body (OAuth2 password
/// form on the backend side).
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    let response = Client::new()
        .post(url("/login"))
        .form(&[("username", username), ("password", password)])
        .send()
        .await?;
    Ok(check(response).await?.json().await?)
}

/// `POST /register` with a JSON body. The backend answers 400 when the
/// username is taken.
pub async fn register(username: &str, password: &str) -> Result<(), ApiError> {
    let response = Client::new()
        .post(url("/register"))
        .json(&RegisterPayload { username, password })
        .send()
        .await?;
    check(response).await?;
    Ok(())
}

/// `POST /refresh`: exchange the refresh token for a new access token.
pub async fn refresh(refresh_token: &str) -> Result<RefreshResponse, ApiError> {
    let response = Client::new()
        .post(url("/refresh"))
        .query(&[("refresh_token", refresh_token)])
        .send()
        .await?;
    Ok(check(response).await?.json().await?)
}

/// `POST /logout`: revoke the refresh token server-side.
pub async fn logout(access_token: &str, refresh_token: &str) -> Result<(), ApiError> {
    let response = Client::new()
        .post(url("/logout"))
        .bearer_auth(access_token)
        .query(&[("refresh_token", refresh_token)])
        .send()
        .await?;
    check(response).await?;
    Ok(())
}

pub async fn get_bookmarks(access_token: &str) -> Result<Vec<Bookmark>, ApiError> {
    let response = Client::new()
        .get(url("/getbookmarks"))
        .bearer_auth(access_token)
        .send()
        .await?;
    Ok(check(response).await?.json().await?)
}

pub async fn add_bookmark(access_token: &str, algorithm_id: &str) -> Result<Bookmark, ApiError> {
    let response = Client::new()
        .post(url("/addbookmark"))
        .bearer_auth(access_token)
        .json(&BookmarkPayload {
            algorithm: algorithm_id,
        })
        .send()
        .await?;
    Ok(check(response).await?.json().await?)
}

pub async fn delete_bookmark(access_token: &str, bookmark_id: i64) -> Result<(), ApiError> {
    let response = Client::new()
        .delete(url(&format!("/deletebookmark/{bookmark_id}")))
        .bearer_auth(access_token)
        .send()
        .await?;
    check(response).await?;
    Ok(())
}
