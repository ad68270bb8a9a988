//! Home Screen
//!
//! Landing page with entry points to login and register.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="home">
            <h1 class="home-title">"DSAExplorer"</h1>
            <p class="home-subtitle">
                "Watch classic data structures and algorithms come to life, one step at a time."
            </p>
            <div class="home-actions">
                <button class="btn primary" on:click=move |_| ctx.go(Screen::Login)>
                    "Get Started"
                </button>
                <button class="btn secondary" on:click=move |_| ctx.go(Screen::Register)>
                    "Create an Account"
                </button>
            </div>
        </div>
    }
}
