//! Session Storage
//!
//! localStorage persistence for the auth session. Three keys, cleared
//! together on logout.

use crate::models::User;

const ACCESS_TOKEN_KEY: &str = "accessToken";
const REFRESH_TOKEN_KEY: &str = "refreshToken";
const USERNAME_KEY: &str = "username";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn get(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            web_sys::console::error_1(&format!("[Storage] Failed to persist {key}").into());
        }
    }
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Persist a fresh session after login.
pub fn save_session(username: &str, access_token: &str, refresh_token: &str) {
    set(USERNAME_KEY, username);
    set(ACCESS_TOKEN_KEY, access_token);
    set(REFRESH_TOKEN_KEY, refresh_token);
}

/// Restore the user from a previous session, if both keys survive.
pub fn load_session() -> Option<User> {
    let username = get(USERNAME_KEY)?;
    let access_token = get(ACCESS_TOKEN_KEY)?;
    Some(User {
        username,
        access_token,
    })
}

pub fn load_refresh_token() -> Option<String> {
    get(REFRESH_TOKEN_KEY)
}

/// Overwrite just the access token (after a `/refresh` exchange).
pub fn save_access_token(access_token: &str) {
    set(ACCESS_TOKEN_KEY, access_token);
}

pub fn clear_session() {
    remove(ACCESS_TOKEN_KEY);
    remove(REFRESH_TOKEN_KEY);
    remove(USERNAME_KEY);
}
