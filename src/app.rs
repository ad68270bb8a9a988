//! App Shell
//!
//! Provides the shared context and switches screens off the `Screen`
//! signal. A restored session gets one token refresh attempt on
//! startup so the stored access token does not go stale mid-use.

use leptos::prelude::*;

use crate::catalog::AlgorithmScreen;
use crate::components::{
    ArrayOps1D, ArrayOps2D, BinarySearch, Home, LinearSearch, LinkedListScreen, Login, MainMenu,
    QueueScreen, Register, SortScreen, StackScreen, StringOpsScreen, TraversalScreen,
};
use crate::context::{AppContext, Screen};

fn algorithm_view(screen: AlgorithmScreen) -> AnyView {
    match screen {
        AlgorithmScreen::LinearSearch => view! { <LinearSearch /> }.into_any(),
        AlgorithmScreen::BinarySearch => view! { <BinarySearch /> }.into_any(),
        AlgorithmScreen::Sort(kind) => view! { <SortScreen kind=kind /> }.into_any(),
        AlgorithmScreen::ArrayOps1D => view! { <ArrayOps1D /> }.into_any(),
        AlgorithmScreen::ArrayOps2D => view! { <ArrayOps2D /> }.into_any(),
        AlgorithmScreen::StringOps => view! { <StringOpsScreen /> }.into_any(),
        AlgorithmScreen::LinkedList(kind) => view! { <LinkedListScreen kind=kind /> }.into_any(),
        AlgorithmScreen::Stack => view! { <StackScreen /> }.into_any(),
        AlgorithmScreen::Queue => view! { <QueueScreen /> }.into_any(),
        AlgorithmScreen::Traversal(kind) => view! { <TraversalScreen kind=kind /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    if ctx.is_logged_in() {
        ctx.try_refresh();
    }

    view! {
        <div class="app">
            {move || match ctx.screen() {
                Screen::Home => view! { <Home /> }.into_any(),
                Screen::Login => view! { <Login /> }.into_any(),
                Screen::Register => view! { <Register /> }.into_any(),
                Screen::Main => view! { <MainMenu /> }.into_any(),
                Screen::Algorithm(screen) => algorithm_view(screen),
            }}
        </div>
    }
}
