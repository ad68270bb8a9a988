//! Animation Speed Picker
//!
//! Preset buttons bound to a screen's `Player`. Changing speed during a
//! run restarts the animation through the screen's `restart` callback.

use leptos::prelude::*;

use crate::player::{Player, SPEED_PRESETS};

#[component]
pub fn SpeedPicker(player: Player, restart: Callback<()>) -> impl IntoView {
    view! {
        <div class="speed-section">
            <span class="speed-label">"Animation Speed:"</span>
            <div class="speed-buttons">
                {SPEED_PRESETS
                    .iter()
                    .map(|&(ms, label)| {
                        let is_active = move || player.speed() == ms;
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "speed-btn active" } else { "speed-btn" }
                                }
                                on:click=move |_| player.set_speed(ms, move || restart.run(()))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
