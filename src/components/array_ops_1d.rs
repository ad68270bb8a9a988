//! 1D Array Operations
//!
//! Direct-manipulation demo: add elements, update an index, search for a
//! value. No animation, the array re-renders after each operation.

use leptos::prelude::*;

use crate::components::{alert, ScreenHeader};
use crate::engine::array_ops::{append_elements, search_value, update_at};
use crate::engine::parse::random_array;

#[component]
pub fn ArrayOps1D() -> impl IntoView {
    let (array, set_array) = signal(vec![5i64, 3, 8, 4, 2]);
    let (elements_input, set_elements_input) = signal(String::new());
    let (index_input, set_index_input) = signal(String::new());
    let (value_input, set_value_input) = signal(String::new());
    let (search_input, set_search_input) = signal(String::new());
    let (highlight, set_highlight) = signal(None::<usize>);
    let (status, set_status) = signal("Ready".to_string());

    let add = move |_| {
        let mut next = array.get_untracked();
        match append_elements(&mut next, &elements_input.get_untracked()) {
            Ok(message) => {
                set_array.set(next);
                set_highlight.set(None);
                set_status.set(message);
                set_elements_input.set(String::new());
            }
            Err(message) => alert(&message),
        }
    };

    let update = move |_| {
        let mut next = array.get_untracked();
        match update_at(
            &mut next,
            &index_input.get_untracked(),
            &value_input.get_untracked(),
        ) {
            Ok(message) => {
                let index = index_input.get_untracked().trim().parse().ok();
                set_array.set(next);
                set_highlight.set(index);
                set_status.set(message);
                set_index_input.set(String::new());
                set_value_input.set(String::new());
            }
            Err(message) => alert(&message),
        }
    };

    let search = move |_| {
        match array.with_untracked(|a| search_value(a, &search_input.get_untracked())) {
            Ok((index, message)) => {
                set_highlight.set(index);
                set_status.set(message);
            }
            Err(message) => alert(&message),
        }
    };

    let reset = move |_| {
        set_array.set(vec![5, 3, 8, 4, 2]);
        set_highlight.set(None);
        set_status.set("Ready".to_string());
    };

    let randomize = move |_| {
        set_array.set(random_array(10, 20));
        set_highlight.set(None);
        set_status.set("Generated a random array".to_string());
    };

    view! {
        <div class="visualizer">
            <ScreenHeader title="1D Array Operations" />

            <div class="status-card">{move || status.get()}</div>

            <div class="array-row">
                {move || {
                    array
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, v)| {
                            let class = if highlight.get() == Some(i) {
                                "box found"
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

            <label class="field-label">"Add elements (comma-separated):"</label>
            <input
                type="text"
                prop:value=move || elements_input.get()
                on:input=move |ev| set_elements_input.set(event_target_value(&ev))
            />
            <div class="action-row">
                <button class="btn primary" on:click=add>"Add Elements"</button>
            </div>

            <label class="field-label">"Update element (index, new value):"</label>
            <div class="action-row">
                <input
                    type="text"
                    placeholder="index"
                    prop:value=move || index_input.get()
                    on:input=move |ev| set_index_input.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="value"
                    prop:value=move || value_input.get()
                    on:input=move |ev| set_value_input.set(event_target_value(&ev))
                />
                <button class="btn primary" on:click=update>"Update"</button>
            </div>

            <label class="field-label">"Search for a value:"</label>
            <div class="action-row">
                <input
                    type="text"
                    prop:value=move || search_input.get()
                    on:input=move |ev| set_search_input.set(event_target_value(&ev))
                />
                <button class="btn primary" on:click=search>"Search"</button>
            </div>

            <div class="action-row">
                <button class="btn secondary" on:click=reset>"Reset"</button>
                <button class="btn accent" on:click=randomize>"🎲 Random"</button>
            </div>

            <div class="info-card">
                <p>"Arrays give O(1) access by index; insertion at the end is amortized O(1)."</p>
            </div>
        </div>
    }
}
