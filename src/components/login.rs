//! Login Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::alert;
use crate::context::{use_app_context, Screen};

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get().trim().to_string();
        let pass = password.get();
        if name.is_empty() || pass.is_empty() {
            alert("Please enter username and password");
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::login(&name, &pass).await {
                Ok(tokens) => {
                    web_sys::console::log_1(&format!("[Login] Signed in as {name}").into());
                    ctx.log_in(name, &tokens);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Login] {e}").into());
                    alert("Login failed: invalid credentials or network error. Please try again.");
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <h1 class="auth-title">"Login to DSAExplorer"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    prop:disabled=move || loading.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <div class="password-row">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Password"
                        prop:value=move || password.get()
                        prop:disabled=move || loading.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="toggle-btn"
                        on:click=move |_| set_show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                <button type="submit" class="btn primary" prop:disabled=move || loading.get()>
                    {move || if loading.get() { "Logging in…" } else { "Login" }}
                </button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <button class="link-btn" on:click=move |_| ctx.go(Screen::Register)>
                    "Register"
                </button>
            </p>
        </div>
    }
}
