//! Binary Search Visualizer
//!
//! Animates the interval narrowing over a sorted array with low / high /
//! mid markers.

use leptos::prelude::*;

use crate::components::{ScreenHeader, SpeedPicker};
use crate::engine::parse::{format_int_array, parse_sorted_array, random_sorted_with_target};
use crate::engine::search::{binary_search_steps, BinaryStep, ProbeOutcome};
use crate::player::Player;

#[component]
pub fn BinarySearch() -> impl IntoView {
    let (array_input, set_array_input) = signal("1,3,5,7,9,11,13,15,17,19".to_string());
    let (target_input, set_target_input) = signal("7".to_string());
    let (array, set_array) = signal(Vec::<i64>::new());
    let (low, set_low) = signal(None::<usize>);
    let (high, set_high) = signal(None::<usize>);
    let (mid, set_mid) = signal(None::<usize>);
    let (found, set_found) = signal(None::<usize>);
    let (status, set_status) = signal("Ready to search".to_string());

    let player = Player::new();
    let steps = StoredValue::new(Vec::<BinaryStep>::new());
    let position = StoredValue::new(0usize);

    let clear_markers = move || {
        set_low.set(None);
        set_high.set(None);
        set_mid.set(None);
        set_found.set(None);
    };

    let start = Callback::new(move |()| {
        player.stop();

        let parsed = parse_sorted_array(&array_input.get_untracked());
        let target: Option<i64> = target_input.get_untracked().trim().parse().ok();
        let (Some(target), false) = (target, parsed.is_empty()) else {
            set_status.set("⚠️ Please enter valid array and target".to_string());
            return;
        };

        set_array.set(parsed.clone());
        clear_markers();
        set_status.set("🔍 Starting binary search…".to_string());

        steps.set_value(binary_search_steps(&parsed, target));
        position.set_value(0);

        player.start(move || {
            let step = steps.with_value(|s| s.get(position.get_value()).copied());
            position.update_value(|p| *p += 1);
            match step {
                Some(BinaryStep::Probe {
                    low: l,
                    high: h,
                    mid: m,
                    outcome,
                }) => {
                    set_low.set(Some(l));
                    set_high.set(Some(h));
                    set_mid.set(Some(m));
                    match outcome {
                        ProbeOutcome::Found => {
                            set_found.set(Some(m));
                            set_status.set(format!("🎉 Target {target} found at index {m}!"));
                            false
                        }
                        _ => {
                            set_status.set(format!(
                                "Checking middle index {m}: {} (range: [{l} - {h}])",
                                parsed[m]
                            ));
                            true
                        }
                    }
                }
                Some(BinaryStep::NotFound) => {
                    clear_markers();
                    set_status.set(format!("❌ Target {target} not found."));
                    false
                }
                None => false,
            }
        });
    });

    let reset = move |_| {
        player.stop();
        clear_markers();
        set_status.set("Ready to search".to_string());
    };

    let randomize = move |_| {
        let (values, target) = random_sorted_with_target();
        set_array_input.set(format_int_array(&values));
        set_target_input.set(target.to_string());
        player.stop();
        set_array.set(Vec::new());
        clear_markers();
        set_status.set("Ready to search".to_string());
    };

    view! {
        <div class="visualizer">
            <ScreenHeader title="Binary Search" />

            <label class="field-label">"Enter sorted array (comma-separated numbers):"</label>
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
                            let is_found = found.get() == Some(i);
                            let is_mid = mid.get() == Some(i);
                            let is_edge = low.get() == Some(i) || high.get() == Some(i);
                            let class = if is_found {
                                "box found"
                            } else if is_mid {
                                "box mid"
                            } else if is_edge {
                                "box range"
                            } else {
                                "box"
                            };
                            let label = if is_found {
                                Some("found")
                            } else if is_mid {
                                Some("mid")
                            } else if low.get() == Some(i) {
                                Some("low")
                            } else if high.get() == Some(i) {
                                Some("high")
                            } else {
                                None
                            };
                            view! {
                                <div class=class>
                                    <span class="box-value">{v}</span>
                                    <span class="box-index">{i}</span>
                                    {label.map(|l| view! { <span class="box-label">{l}</span> })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="info-card">
                <p>"Binary search halves the search range with each step."</p>
                <p>"Time: O(log n) · Space: O(1) · Requires a sorted array"</p>
            </div>
        </div>
    }
}
