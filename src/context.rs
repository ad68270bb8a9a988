//! Application Context
//!
//! Shared state provided via the Leptos Context API: the auth session
//! and the current screen. There is no router; screens switch through
//! the `Screen` signal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::catalog::AlgorithmScreen;
use crate::models::{TokenResponse, User};
use crate::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Login,
    Register,
    Main,
    Algorithm(AlgorithmScreen),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    user: RwSignal<Option<User>>,
    screen: RwSignal<Screen>,
}

impl AppContext {
    /// Restore any persisted session and pick the starting screen.
    pub fn new() -> Self {
        let restored = storage::load_session();
        let initial = if restored.is_some() {
            Screen::Main
        } else {
            Screen::Home
        };
        if let Some(user) = &restored {
            web_sys::console::log_1(
                &format!("[Auth] Restored session for {}", user.username).into(),
            );
        }
        Self {
            user: RwSignal::new(restored),
            screen: RwSignal::new(initial),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen.get()
    }

    pub fn go(&self, screen: Screen) {
        self.screen.set(screen);
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Store a fresh login: persist tokens and switch to the catalog.
    pub fn log_in(&self, username: String, tokens: &TokenResponse) {
        storage::save_session(&username, &tokens.access_token, &tokens.refresh_token);
        self.user.set(Some(User {
            username,
            access_token: tokens.access_token.clone(),
        }));
        self.screen.set(Screen::Main);
    }

    /// Drop the session. The backend revocation is best-effort; local
    /// state clears regardless.
    pub fn log_out(&self) {
        if let (Some(user), Some(refresh_token)) =
            (self.user.get_untracked(), storage::load_refresh_token())
        {
            spawn_local(async move {
                if let Err(e) = api::logout(&user.access_token, &refresh_token).await {
                    web_sys::console::error_1(&format!("[Auth] Logout call failed: {e}").into());
                }
            });
        }
        storage::clear_session();
        self.user.set(None);
        self.screen.set(Screen::Login);
    }

    /// Try to refresh the access token with the stored refresh token.
    /// On success the session stays alive with the new token.
    pub fn try_refresh(&self) {
        let Some(refresh_token) = storage::load_refresh_token() else {
            return;
        };
        let user = self.user;
        spawn_local(async move {
            match api::refresh(&refresh_token).await {
                Ok(response) => {
                    storage::save_access_token(&response.access_token);
                    user.update(|u| {
                        if let Some(u) = u {
                            u.access_token = response.access_token.clone();
                        }
                    });
                    web_sys::console::log_1(&"[Auth] Access token refreshed".into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Auth] Refresh failed: {e}").into());
                }
            }
        });
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
