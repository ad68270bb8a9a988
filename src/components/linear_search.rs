//! Linear Search Visualizer

use leptos::prelude::*;

use crate::components::{ScreenHeader, SpeedPicker};
use crate::engine::parse::{format_int_array, parse_int_array, random_with_target};
use crate::engine::search::{linear_search_steps, LinearStep};
use crate::player::Player;

#[component]
pub fn LinearSearch() -> impl IntoView {
    let (array_input, set_array_input) = signal("5,3,8,4,2,7,1,6".to_string());
    let (target_input, set_target_input) = signal("2".to_string());
    let (array, set_array) = signal(Vec::<i64>::new());
    let (current, set_current) = signal(None::<usize>);
    let (found, set_found) = signal(None::<usize>);
    let (status, set_status) = signal("Ready to search".to_string());

    let player = Player::new();
    let steps = StoredValue::new(Vec::<LinearStep>::new());
    let position = StoredValue::new(0usize);

    let start = Callback::new(move |()| {
        player.stop();

        let parsed = parse_int_array(&array_input.get_untracked());
        let target: Option<i64> = target_input.get_untracked().trim().parse().ok();
        let (Some(target), false) = (target, parsed.is_empty()) else {
            set_status.set("⚠️ Please enter valid array and target".to_string());
            return;
        };

        set_array.set(parsed.clone());
        set_current.set(None);
        set_found.set(None);
        set_status.set("🔍 Starting linear search…".to_string());

        steps.set_value(linear_search_steps(&parsed, target));
        position.set_value(0);

        player.start(move || {
            let step = steps.with_value(|s| s.get(position.get_value()).copied());
            position.update_value(|p| *p += 1);
            match step {
                Some(LinearStep::Check { index }) => {
                    set_current.set(Some(index));
                    set_status.set(format!("Checking index {index}: {}", parsed[index]));
                    true
                }
                Some(LinearStep::Found { index }) => {
                    set_current.set(Some(index));
                    set_found.set(Some(index));
                    set_status.set(format!("🎉 Target {target} found at index {index}!"));
                    false
                }
                Some(LinearStep::NotFound) => {
                    set_current.set(None);
                    set_status.set(format!("❌ Target {target} not found in the array"));
                    false
                }
                None => false,
            }
        });
    });

    let reset = move |_| {
        player.stop();
        set_current.set(None);
        set_found.set(None);
        set_status.set("Ready to search".to_string());
    };

    let randomize = move |_| {
        let (values, target) = random_with_target();
        set_array_input.set(format_int_array(&values));
        set_target_input.set(target.to_string());
        player.stop();
        set_array.set(Vec::new());
        set_current.set(None);
        set_found.set(None);
        set_status.set("Ready to search".to_string());
    };

    view! {
        <div class="visualizer">
            <ScreenHeader title="Linear Search" />

            <label class="field-label">"Enter array (comma-separated numbers):"</label>
            <input
                type="text"
                prop:value=move || array_input.get()
                prop:disabled=move || player.is_playing()
                on:input=move |ev| set_array_input.set(event_target_value(&ev))
            />
            <label class="field-label">"Enter target number:"</label>
            <input
                type="text"
                prop:value=move || target_input.get()
                prop:disabled=move || player.is_playing()
                on:input=move |ev| set_target_input.set(event_target_value(&ev))
            />

            <SpeedPicker player=player restart=start />

            <div class="action-row">
                <button
                    class="btn primary"
                    prop:disabled=move || player.is_playing()
                    on:click=move |_| start.run(())
                >
                    "▶ Start Search"
                </button>
                {move || {
                    player.is_playing().then(|| view! {
                        <button class="btn secondary" on:click=move |_| player.toggle_pause()>
                            {move || if player.is_paused() { "Resume" } else { "Pause" }}
                        </button>
                    })
                }}
                <button class="btn secondary" on:click=reset>
                    "Reset"
                </button>
                <button
                    class="btn accent"
                    prop:disabled=move || player.is_playing()
                    on:click=randomize
                >
                    "🎲 Random"
                </button>
            </div>

            <div class="status-card">{move || status.get()}</div>

            <div class="array-row">
                {move || {
                    array
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, v)| {
                            let class = if found.get() == Some(i) {
                                "box found"
                            } else if current.get() == Some(i) {
                                "box active"
                            } else {
                                "box"
                            };
                            view! {
                                <div class=class>
                                    <span class="box-value">{v}</span>
                                    <span class="box-index">{i}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="info-card">
                <p>"Linear search scans the array one element at a time."</p>
                <p>"Time: O(n) · Space: O(1) · Works on unsorted arrays"</p>
            </div>
        </div>
    }
}
