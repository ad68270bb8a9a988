//! Queue Visualizer
//!
//! FIFO demo drawn left to right, front of the queue on the left.

use leptos::prelude::*;

use crate::components::{alert, ScreenHeader};
use crate::engine::stack_queue::{OpResult, Queue};

#[component]
pub fn QueueScreen() -> impl IntoView {
    let (queue, set_queue) = signal(Queue::new());
    let (value_input, set_value_input) = signal(String::new());
    let (selected, set_selected) = signal(None::<usize>);
    let (status, set_status) = signal("Queue is empty".to_string());

    let apply = move |result: OpResult| {
        set_selected.set(result.selected);
        set_status.set(result.status);
    };

    let enqueue = move |_| {
        let Ok(value) = value_input.get_untracked().trim().parse::<i64>() else {
            alert("Please enter a valid number");
            return;
        };
        let mut next = queue.get_untracked();
        let result = next.enqueue(value);
        set_queue.set(next);
        apply(result);
        set_value_input.set(String::new());
    };

    let dequeue = move |_| {
        let mut next = queue.get_untracked();
        let result = next.dequeue();
        set_queue.set(next);
        apply(result);
    };

    let front = move |_| apply(queue.get_untracked().front());

    let clear = move |_| {
        let mut next = queue.get_untracked();
        let result = next.clear();
        set_queue.set(next);
        apply(result);
    };

    view! {
        <div class="visualizer">
            <ScreenHeader title="Queue" />

            <label class="field-label">"Value:"</label>
            <input
                type="text"
                prop:value=move || value_input.get()
                on:input=move |ev| set_value_input.set(event_target_value(&ev))
            />

            <div class="action-row">
                <button class="btn primary" on:click=enqueue>"Enqueue"</button>
                <button class="btn secondary" on:click=dequeue>"Dequeue"</button>
                <button class="btn secondary" on:click=front>"Front"</button>
                <button class="btn secondary" on:click=clear>"Clear"</button>
            </div>

            <div class="status-card">{move || status.get()}</div>

            <div class="array-row">
                {move || {
                    let current = queue.get();
                    let count = current.len();
                    current
                        .items()
                        .copied()
                        .enumerate()
                        .map(|(i, v)| {
                            let class = if selected.get() == Some(i) {
                                "box active"
                            } else {
                                "box"
                            };
                            let tag = if i == 0 {
                                Some("FRONT")
                            } else if i == count - 1 {
                                Some("REAR")
                            } else {
                                None
                            };
                            view! {
                                <div class=class>
                                    <span class="box-value">{v}</span>
                                    {tag.map(|t| view! { <span class="box-label">{t}</span> })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="info-card">
                <p>"A queue is first-in, first-out: enqueue at the rear, dequeue from the front."</p>
                <p>"Enqueue / Dequeue / Front: O(1)"</p>
            </div>
        </div>
    }
}
