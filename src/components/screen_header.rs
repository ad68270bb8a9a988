//! Visualizer Screen Header
//!
//! Title row with the back button to the catalog.

use leptos::prelude::*;

use crate::context::{use_app_context, Screen};

#[component]
pub fn ScreenHeader(title: &'static str) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="screen-header">
            <button class="back-btn" on:click=move |_| ctx.go(Screen::Main)>
                "← Back"
            </button>
            <h1 class="screen-title">{title}</h1>
        </div>
    }
}
