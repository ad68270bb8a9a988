//! String Manipulation Screen
//!
//! One text input and a button per operation; the result of the last
//! operation is shown in a card.

use leptos::prelude::*;

use crate::components::{alert, ScreenHeader};
use crate::engine::string_ops::{StringOp, STRING_OPS};

#[component]
pub fn StringOpsScreen() -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (result, set_result) = signal(None::<(StringOp, String)>);

    let run = move |op: StringOp| {
        let input = text.get_untracked();
        if input.trim().is_empty() {
            alert("Please enter some text to perform operations");
            return;
        }
        set_result.set(Some((op, op.apply(&input))));
    };

    let clear = move |_| {
        set_text.set(String::new());
        set_result.set(None);
    };

    view! {
        <div class="visualizer">
            <ScreenHeader title="String Manipulations" />

            <label class="field-label">"Enter text:"</label>
            <input
                type="text"
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />

            <div class="action-row">
                {STRING_OPS
                    .iter()
                    .map(|&op| {
                        view! {
                            <button class="btn primary" on:click=move |_| run(op)>
                                {op.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button class="btn secondary" on:click=clear>"Clear"</button>
            </div>

            {move || {
                result.get().map(|(op, output)| {
                    view! {
                        <div class="status-card">
                            <p class="result-label">{op.label()}</p>
                            <p class="result-value">{output}</p>
                        </div>
                    }
                })
            }}

            <div class="info-card">
                <p>"Each operation walks the characters once, so all of them run in O(n)."</p>
            </div>
        </div>
    }
}
