//! Sorting Visualizer
//!
//! One screen for all five sorts; the `SortKind` prop picks the step
//! generator and the labels. The precomputed step queue is applied one
//! step per tick: compares highlight, swaps and overwrites mutate the
//! displayed array, `Pivot` marks quick sort's pivot or selection
//! sort's running minimum.

use leptos::prelude::*;

use crate::components::{ScreenHeader, SpeedPicker};
use crate::engine::parse::{format_int_array, parse_int_array, random_array};
use crate::engine::sort::{SortKind, SortStep};
use crate::player::Player;

#[component]
pub fn SortScreen(kind: SortKind) -> impl IntoView {
    let (array_input, set_array_input) = signal("5,3,8,4,2,7,1,6".to_string());
    let (array, set_array) = signal(Vec::<i64>::new());
    let (highlighted, set_highlighted) = signal(Vec::<usize>::new());
    let (pivot, set_pivot) = signal(None::<usize>);
    let (sorted_indices, set_sorted_indices) = signal(Vec::<usize>::new());
    let (status, set_status) = signal("Ready to sort".to_string());

    let player = Player::new();
    let steps = StoredValue::new(Vec::<SortStep>::new());
    let position = StoredValue::new(0usize);

    let clear_markers = move || {
        set_highlighted.set(Vec::new());
        set_pivot.set(None);
        set_sorted_indices.set(Vec::new());
    };

    let start = Callback::new(move |()| {
        player.stop();

        let parsed = parse_int_array(&array_input.get_untracked());
        if parsed.len() < 2 {
            set_status.set("⚠️ Enter at least 2 numbers.".to_string());
            return;
        }

        let len = parsed.len();
        set_array.set(parsed.clone());
        clear_markers();
        set_status.set(format!("🔄 Running {}…", kind.title().to_lowercase()));

        steps.set_value(kind.steps(&parsed));
        position.set_value(0);

        player.start(move || {
            let step = steps.with_value(|s| s.get(position.get_value()).copied());
            position.update_value(|p| *p += 1);
            match step {
                Some(SortStep::Compare(i, j)) => {
                    set_highlighted.set(vec![i, j]);
                    set_status.set(format!("Comparing indices {i} and {j}"));
                    true
                }
                Some(SortStep::Swap(i, j)) => {
                    set_array.update(|a| a.swap(i, j));
                    set_highlighted.set(vec![i, j]);
                    set_status.set(format!("Swapping {i} and {j}"));
                    true
                }
                Some(SortStep::Overwrite { index, value }) => {
                    set_array.update(|a| a[index] = value);
                    set_highlighted.set(vec![index]);
                    set_status.set(format!("Overwriting index {index} with {value}"));
                    true
                }
                Some(SortStep::Pivot(i)) => {
                    set_pivot.set(Some(i));
                    let what = match kind {
                        SortKind::Selection => "Tracking minimum",
                        _ => "Choosing pivot",
                    };
                    set_status.set(format!("{what} at index {i}"));
                    true
                }
                Some(SortStep::MarkSorted(i)) => {
                    set_sorted_indices.update(|s| s.push(i));
                    set_status.set(format!("Index {i} sorted"));
                    true
                }
                None => {
                    set_highlighted.set(Vec::new());
                    set_pivot.set(None);
                    set_sorted_indices.set((0..len).collect());
                    set_status.set("🎉 Array sorted!".to_string());
                    false
                }
            }
        });
    });

    let reset = move |_| {
        player.stop();
        clear_markers();
        set_status.set("Ready to sort".to_string());
    };

    let randomize = move |_| {
        set_array_input.set(format_int_array(&random_array(8, 20)));
        player.stop();
        set_array.set(Vec::new());
        clear_markers();
        set_status.set("Ready to sort".to_string());
    };

    view! {
        <div class="visualizer">
            <ScreenHeader title=kind.title() />

            <label class="field-label">"Enter array (comma-separated numbers):"</label>
            <input
                type="text"
                prop:value=move || array_input.get()
                prop:disabled=move || player.is_playing()
                on:input=move |ev| set_array_input.set(event_target_value(&ev))
            />

            <SpeedPicker player=player restart=start />

            <div class="action-row">
                <button
                    class="btn primary"
                    prop:disabled=move || player.is_playing()
                    on:click=move |_| start.run(())
                >
                    "▶ Start Sort"
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
                            let is_sorted = sorted_indices.with(|s| s.contains(&i));
                            let is_pivot = pivot.get() == Some(i);
                            let is_highlighted = highlighted.with(|h| h.contains(&i));
                            let class = if is_sorted {
                                "box sorted"
                            } else if is_pivot {
                                "box pivot"
                            } else if is_highlighted {
                                "box active"
                            } else {
                                "box"
                            };
                            let label = if is_sorted {
                                Some("sorted")
                            } else if is_pivot {
                                Some(kind.pivot_label())
                            } else if is_highlighted {
                                Some("comparing")
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
                <p>
                    {match kind {
                        SortKind::Bubble => "Bubbles the largest remaining value to the end of each pass. Time: O(n²).",
                        SortKind::Selection => "Selects the minimum of the unsorted suffix each pass. Time: O(n²).",
                        SortKind::Insertion => "Shifts each element left into its place among the sorted prefix. Time: O(n²).",
                        SortKind::Merge => "Recursively sorts halves and merges them. Time: O(n log n).",
                        SortKind::Quick => "Partitions around a pivot, then sorts each side. Time: O(n log n) average.",
                    }}
                </p>
            </div>
        </div>
    }
}
