//! Linked List Visualizer
//!
//! One screen for the four list variants. The `ListKind` prop picks the
//! title and the arrow style between nodes (single or double headed,
//! with a wrap indicator for the circular variants). Traversal animates
//! one node per tick; the other operations apply immediately and show
//! the outcome's status line.

use leptos::prelude::*;

use crate::components::{alert, ScreenHeader, SpeedPicker};
use crate::engine::list::{LinkedList, ListKind, OpOutcome};
use crate::player::Player;

#[component]
pub fn LinkedListScreen(kind: ListKind) -> impl IntoView {
    let (list, set_list) = signal(LinkedList::new(kind));
    let (value_input, set_value_input) = signal(String::new());
    let (index_input, set_index_input) = signal(String::new());
    let (selected, set_selected) = signal(None::<u32>);
    let (forward, set_forward) = signal(true);
    let (status, set_status) = signal("List is empty".to_string());

    let player = Player::new();
    let walk = StoredValue::new(Vec::<u32>::new());
    let walk_position = StoredValue::new(0usize);

    let parse_value = move || -> Option<i64> {
        let parsed = value_input.get_untracked().trim().parse().ok();
        if parsed.is_none() {
            alert("Please enter a valid number");
        }
        parsed
    };

    // Every non-traversal operation goes through here so the screen
    // stops an in-flight walk before mutating the list.
    let apply = move |outcome: OpOutcome| {
        player.stop();
        set_selected.set(outcome.selected);
        set_status.set(outcome.status);
        set_value_input.set(String::new());
        set_index_input.set(String::new());
    };

    let insert_front = move |_| {
        if let Some(value) = parse_value() {
            let mut next = list.get_untracked();
            let outcome = next.insert_front(value);
            set_list.set(next);
            apply(outcome);
        }
    };

    let insert_back = move |_| {
        if let Some(value) = parse_value() {
            let mut next = list.get_untracked();
            let outcome = next.insert_back(value);
            set_list.set(next);
            apply(outcome);
        }
    };

    let insert_at = move |_| {
        let Some(value) = parse_value() else { return };
        let Ok(position) = index_input.get_untracked().trim().parse::<usize>() else {
            alert("Please enter a valid position");
            return;
        };
        let mut next = list.get_untracked();
        match next.insert_at(value, position) {
            Ok(outcome) => {
                set_list.set(next);
                apply(outcome);
            }
            Err(message) => alert(&message),
        }
    };

    let delete = move |_| {
        if let Some(value) = parse_value() {
            let mut next = list.get_untracked();
            let outcome = next.delete_value(value);
            set_list.set(next);
            apply(outcome);
        }
    };

    let search = move |_| {
        if let Some(value) = parse_value() {
            let outcome = list.get_untracked().search(value);
            apply(outcome);
        }
    };

    let clear = move |_| {
        let mut next = list.get_untracked();
        let outcome = next.clear();
        set_list.set(next);
        apply(outcome);
        set_status.set("List is empty".to_string());
    };

    let traverse = Callback::new(move |()| {
        player.stop();

        let current = list.get_untracked();
        if current.is_empty() {
            set_status.set("List is empty".to_string());
            return;
        }

        let ids = current.traversal_ids(forward.get_untracked());
        let total = ids.len();
        walk.set_value(ids);
        walk_position.set_value(0);
        set_selected.set(None);
        set_status.set("🚶 Traversing…".to_string());

        player.start(move || {
            let pos = walk_position.get_value();
            let id = walk.with_value(|w| w.get(pos).copied());
            walk_position.update_value(|p| *p += 1);
            match id {
                Some(id) => {
                    set_selected.set(Some(id));
                    let value = list
                        .get_untracked()
                        .nodes()
                        .iter()
                        .find(|n| n.id == id)
                        .map(|n| n.value)
                        .unwrap_or_default();
                    set_status.set(format!("Visiting {value} ({}/{total})", pos + 1));
                    pos + 1 < total
                }
                None => false,
            }
        });
    });

    let arrow = if kind.is_doubly() { " ⇄ " } else { " → " };

    view! {
        <div class="visualizer">
            <ScreenHeader title=kind.title() />

            <label class="field-label">"Value:"</label>
            <input
                type="text"
                prop:value=move || value_input.get()
                on:input=move |ev| set_value_input.set(event_target_value(&ev))
            />
            <label class="field-label">"Position (for insert at):"</label>
            <input
                type="text"
                prop:value=move || index_input.get()
                on:input=move |ev| set_index_input.set(event_target_value(&ev))
            />

            <div class="action-row">
                <button class="btn primary" on:click=insert_front>"Insert at Beginning"</button>
                <button class="btn primary" on:click=insert_back>"Insert at End"</button>
                <button class="btn primary" on:click=insert_at>"Insert at Position"</button>
            </div>
            <div class="action-row">
                <button class="btn secondary" on:click=delete>"Delete by Value"</button>
                <button class="btn secondary" on:click=search>"Search"</button>
                <button class="btn secondary" on:click=clear>"Clear"</button>
            </div>

            <SpeedPicker player=player restart=traverse />

            <div class="action-row">
                <button
                    class="btn accent"
                    prop:disabled=move || player.is_playing()
                    on:click=move |_| traverse.run(())
                >
                    "▶ Traverse"
                </button>
                {move || {
                    player.is_playing().then(|| view! {
                        <button class="btn secondary" on:click=move |_| player.toggle_pause()>
                            {move || if player.is_paused() { "Resume" } else { "Pause" }}
                        </button>
                    })
                }}
                {kind.is_doubly().then(|| view! {
                    <button
                        class="btn secondary"
                        prop:disabled=move || player.is_playing()
                        on:click=move |_| set_forward.update(|f| *f = !*f)
                    >
                        {move || if forward.get() { "Direction: Forward" } else { "Direction: Backward" }}
                    </button>
                })}
            </div>

            <div class="status-card">{move || status.get()}</div>

            <div class="list-row">
                {move || {
                    let current = list.get();
                    let count = current.len();
                    current
                        .nodes()
                        .iter()
                        .enumerate()
                        .map(|(i, node)| {
                            let class = if selected.get() == Some(node.id) {
                                "box active"
                            } else {
                                "box"
                            };
                            let tag = if i == 0 {
                                Some("HEAD")
                            } else if i == count - 1 {
                                Some("TAIL")
                            } else {
                                None
                            };
                            view! {
                                <div class="list-cell">
                                    <div class=class>
                                        <span class="box-value">{node.value}</span>
                                        {tag.map(|t| view! { <span class="box-label">{t}</span> })}
                                    </div>
                                    {(i + 1 < count).then(|| view! {
                                        <span class="list-arrow">{arrow}</span>
                                    })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    (kind.is_circular() && list.with(|l| l.len() > 1)).then(|| view! {
                        <span class="list-wrap">"↩ back to head"</span>
                    })
                }}
            </div>

            <div class="info-card">
                <p>
                    {match kind {
                        ListKind::Singly => "Each node points to the next; traversal is one-directional.",
                        ListKind::Doubly => "Each node links both ways, so traversal can run forward or backward.",
                        ListKind::CircularSingly => "The tail points back to the head, so traversal wraps around.",
                        ListKind::CircularDoubly => "Bidirectional links with the tail wrapping to the head.",
                    }}
                </p>
                <p>"Insert/delete at head: O(1) · Search: O(n)"</p>
            </div>
        </div>
    }
}
