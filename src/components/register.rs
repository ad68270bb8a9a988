//! Register Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::alert;
use crate::context::{use_app_context, Screen};

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get().trim().to_string();
        let pass = password.get();
        if name.is_empty() || pass.is_empty() || confirm.get().is_empty() {
            alert("Please fill all fields");
            return;
        }
        if pass != confirm.get() {
            alert("Passwords do not match");
            return;
        }
        if pass.len() < 6 {
            alert("Password should be at least 6 characters long");
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::register(&name, &pass).await {
                Ok(()) => {
                    alert("Account created! Please log in.");
                    ctx.go(Screen::Login);
                }
                Err(ApiError::Status { body, .. }) if !body.is_empty() => {
                    alert(&format!("Registration failed: {body}"));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Register] {e}").into());
                    alert("Registration failed: network error. Please try again.");
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <h1 class="auth-title">"Create your account"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password (min 6 characters)"
                    prop:value=move || password.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />
                <button type="submit" class="btn primary" prop:disabled=move || loading.get()>
                    {move || if loading.get() { "Creating…" } else { "Register" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <button class="link-btn" on:click=move |_| ctx.go(Screen::Login)>
                    "Login"
                </button>
            </p>
        </div>
    }
}
