//! Tree Traversal Visualizer
//!
//! One screen for the five traversal demos. The tree comes from a
//! level-order input (with `null` holes) and the traversal order is
//! walked one node per tick, highlighted in an ASCII rendering of the
//! tree and a visit-order strip.

use leptos::prelude::*;

use crate::components::{alert, ScreenHeader, SpeedPicker};
use crate::engine::parse::{format_tree_array, parse_tree_array, random_tree_array};
use crate::engine::tree::{LevelTree, TraversalKind};
use crate::player::Player;

#[component]
pub fn TraversalScreen(kind: TraversalKind) -> impl IntoView {
    let (input, set_input) = signal(kind.default_input().to_string());
    let (order, set_order) = signal(Vec::<usize>::new());
    let (visited, set_visited) = signal(0usize);
    let (status, set_status) = signal("Ready to traverse".to_string());

    let player = Player::new();

    let tree = Memo::new(move |_| LevelTree::from_slots(parse_tree_array(&input.get())));

    // Editing the tree invalidates any traversal in flight.
    Effect::new(move |_| {
        tree.track();
        player.stop();
        set_order.set(Vec::new());
        set_visited.set(0);
        set_status.set("Ready to traverse".to_string());
    });

    let start = Callback::new(move |()| {
        player.stop();

        let current_tree = tree.get_untracked();
        if current_tree.is_empty() {
            alert("Please enter a valid tree array.");
            return;
        }

        let sequence = kind.order(&current_tree);
        let total = sequence.len();
        set_order.set(sequence.clone());
        set_visited.set(0);
        set_status.set("🌳 Traversing…".to_string());

        player.start(move || {
            let next = visited.get_untracked() + 1;
            set_visited.set(next);
            let index = sequence[next - 1];
            if let Some(value) = current_tree.value(index) {
                set_status.set(format!("Visiting {value} ({next}/{total})"));
            }
            if next < total {
                true
            } else {
                set_status.set("🎉 Traversal complete!".to_string());
                false
            }
        });
    });

    let reset = move |_| {
        player.stop();
        set_order.set(Vec::new());
        set_visited.set(0);
        set_status.set("Ready to traverse".to_string());
    };

    let randomize = move |_| {
        let with_holes = matches!(kind, TraversalKind::Dfs);
        set_input.set(format_tree_array(&random_tree_array(7, with_holes)));
    };

    view! {
        <div class="visualizer">
            <ScreenHeader title=kind.title() />

            <label class="field-label">
                "Enter tree as level-order array (use null for missing nodes):"
            </label>
            <input
                type="text"
                prop:value=move || input.get()
                prop:disabled=move || player.is_playing()
                on:input=move |ev| set_input.set(event_target_value(&ev))
            />

            <SpeedPicker player=player restart=start />

            <div class="action-row">
                <button
                    class="btn primary"
                    prop:disabled=move || player.is_playing()
                    on:click=move |_| start.run(())
                >
                    "▶ Start Traversal"
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
                    "🎲 Random Tree"
                </button>
            </div>

            <div class="status-card">{move || status.get()}</div>

            <pre class="tree-view">
                {move || tree.get().render_ascii(&order.get(), visited.get())}
            </pre>

            <div class="visit-strip">
                {move || {
                    let current_tree = tree.get();
                    order
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(pos, index)| {
                            let class = if visited.get() > 0 && pos == visited.get() - 1 {
                                "box active"
                            } else if pos < visited.get() {
                                "box found"
                            } else {
                                "box"
                            };
                            let value = current_tree.value(index).unwrap_or_default();
                            view! { <div class=class><span class="box-value">{value}</span></div> }
                        })
                        .collect_view()
                }}
            </div>

            <div class="info-card">
                <p>{format!("Visits nodes {}.", kind.order_hint())}</p>
                <p>"Time: O(n) · every reachable node is visited exactly once"</p>
            </div>
        </div>
    }
}
