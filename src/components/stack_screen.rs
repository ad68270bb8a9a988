//! Stack Visualizer
//!
//! LIFO demo drawn top-down, newest element on top.

use leptos::prelude::*;

use crate::components::{alert, ScreenHeader};
use crate::engine::stack_queue::{OpResult, Stack};

#[component]
pub fn StackScreen() -> impl IntoView {
    let (stack, set_stack) = signal(Stack::new());
    let (value_input, set_value_input) = signal(String::new());
    let (selected, set_selected) = signal(None::<usize>);
    let (status, set_status) = signal("Stack is empty".to_string());

    let apply = move |result: OpResult| {
        set_selected.set(result.selected);
        set_status.set(result.status);
    };

    let push = move |_| {
        let Ok(value) = value_input.get_untracked().trim().parse::<i64>() else {
            alert("Please enter a valid number");
            return;
        };
        let mut next = stack.get_untracked();
        let result = next.push(value);
        set_stack.set(next);
        apply(result);
        set_value_input.set(String::new());
    };

    let pop = move |_| {
        let mut next = stack.get_untracked();
        let result = next.pop();
        set_stack.set(next);
        apply(result);
    };

    let peek = move |_| apply(stack.get_untracked().peek());

    let clear = move |_| {
        let mut next = stack.get_untracked();
        let result = next.clear();
        set_stack.set(next);
        apply(result);
    };

    view! {
        <div class="visualizer">
            <ScreenHeader title="Stack" />

            <label class="field-label">"Value:"</label>
            <input
                type="text"
                prop:value=move || value_input.get()
                on:input=move |ev| set_value_input.set(event_target_value(&ev))
            />

            <div class="action-row">
                <button class="btn primary" on:click=push>"Push"</button>
                <button class="btn secondary" on:click=pop>"Pop"</button>
                <button class="btn secondary" on:click=peek>"Peek"</button>
                <button class="btn secondary" on:click=clear>"Clear"</button>
            </div>

            <div class="status-card">{move || status.get()}</div>

            <div class="stack-column">
                {move || {
                    let current = stack.get();
                    let top = current.items().len().checked_sub(1);
                    current
                        .items()
                        .iter()
                        .enumerate()
                        .rev()
                        .map(|(i, v)| {
                            let class = if selected.get() == Some(i) {
                                "box active"
                            } else {
                                "box"
                            };
                            view! {
                                <div class=class>
                                    <span class="box-value">{*v}</span>
                                    {(top == Some(i)).then(|| view! {
                                        <span class="box-label">"TOP"</span>
                                    })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="info-card">
                <p>"A stack is last-in, first-out: push and pop both work on the top."</p>
                <p>"Push / Pop / Peek: O(1)"</p>
            </div>
        </div>
    }
}
