//! Main Menu
//!
//! The algorithm catalog: category chips, free-text search, per-card
//! bookmark stars backed by the server, and a bookmarked-only toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::catalog::{self, AlgorithmEntry, ALGORITHMS};
use crate::components::alert;
use crate::context::{use_app_context, Screen};
use crate::models::Bookmark;

#[component]
pub fn MainMenu() -> impl IntoView {
    let ctx = use_app_context();

    let (category, set_category) = signal("All");
    let (query, set_query) = signal(String::new());
    let (show_bookmarks, set_show_bookmarks) = signal(false);
    let (bookmarks, set_bookmarks) = signal(Vec::<Bookmark>::new());
    let (loading_bookmarks, set_loading_bookmarks) = signal(false);

    // The catalog requires a session; fall back to login when it is gone.
    Effect::new(move |_| {
        if !ctx.is_logged_in() {
            ctx.go(Screen::Login);
        }
    });

    // Load the user's bookmarks once the session is known.
    Effect::new(move |_| {
        let Some(user) = ctx.user() else {
            return;
        };
        set_loading_bookmarks.set(true);
        spawn_local(async move {
            match api::get_bookmarks(&user.access_token).await {
                Ok(list) => {
                    web_sys::console::log_1(
                        &format!("[Main] Loaded {} bookmarks", list.len()).into(),
                    );
                    set_bookmarks.set(list);
                }
                Err(e) if e.is_unauthorized() => {
                    web_sys::console::log_1(&"[Main] Session expired, logging out".into());
                    ctx.log_out();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Main] Bookmark fetch failed: {e}").into());
                }
            }
            set_loading_bookmarks.set(false);
        });
    });

    let bookmark_id_for = move |algorithm_id: &str| -> Option<i64> {
        bookmarks.with(|list| {
            list.iter()
                .find(|bm| bm.algorithm == algorithm_id)
                .map(|bm| bm.id)
        })
    };

    let toggle_bookmark = move |entry: &'static AlgorithmEntry| {
        let Some(user) = ctx.user() else {
            return;
        };
        let existing = bookmark_id_for(entry.id);
        spawn_local(async move {
            match existing {
                Some(id) => match api::delete_bookmark(&user.access_token, id).await {
                    Ok(()) => set_bookmarks.update(|list| list.retain(|bm| bm.id != id)),
                    Err(e) if e.is_unauthorized() => ctx.log_out(),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[Main] {e}").into());
                        alert("Could not remove bookmark");
                    }
                },
                None => match api::add_bookmark(&user.access_token, entry.id).await {
                    Ok(bookmark) => set_bookmarks.update(|list| list.push(bookmark)),
                    Err(e) if e.is_unauthorized() => ctx.log_out(),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[Main] {e}").into());
                        alert("Could not save bookmark");
                    }
                },
            }
        });
    };

    let filtered = move || {
        ALGORITHMS
            .iter()
            .filter(|entry| {
                catalog::matches_filter(entry, category.get(), &query.get())
                    && (!show_bookmarks.get() || bookmark_id_for(entry.id).is_some())
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="main-menu">
            <div class="menu-header">
                <h1 class="menu-title">
                    {move || {
                        let name = ctx.user().map(|u| u.username).unwrap_or_default();
                        format!("Hello, {name}")
                    }}
                </h1>
                <button class="btn secondary" on:click=move |_| ctx.log_out()>
                    "Logout"
                </button>
            </div>

            <input
                class="menu-search"
                type="text"
                placeholder="Search algorithms…"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            <div class="category-row">
                {catalog::categories()
                    .into_iter()
                    .map(|cat| {
                        let is_active = move || category.get() == cat;
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "chip active" } else { "chip" }
                                }
                                on:click=move |_| set_category.set(cat)
                            >
                                {cat}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class=move || {
                        if show_bookmarks.get() { "chip bookmark active" } else { "chip bookmark" }
                    }
                    on:click=move |_| set_show_bookmarks.update(|v| *v = !*v)
                >
                    "★ Bookmarked"
                </button>
            </div>

            {move || {
                loading_bookmarks
                    .get()
                    .then(|| view! { <p class="menu-loading">"Loading bookmarks…"</p> })
            }}

            <div class="algo-grid">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|entry| {
                            let starred = bookmark_id_for(entry.id).is_some();
                            view! {
                                <div class="algo-card">
                                    <button
                                        class="algo-open"
                                        on:click=move |_| ctx.go(Screen::Algorithm(entry.screen))
                                    >
                                        <span class="algo-title">{entry.title}</span>
                                        <span class="algo-category">{entry.category}</span>
                                    </button>
                                    <button
                                        class=if starred { "star-btn starred" } else { "star-btn" }
                                        on:click=move |_| toggle_bookmark(entry)
                                    >
                                        {if starred { "★" } else { "☆" }}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
