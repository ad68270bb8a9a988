//! 2D Array Operations
//!
//! Matrix demo: add a row, add a column, update one cell. The grid
//! re-renders after each operation with the touched cell highlighted.

use leptos::prelude::*;

use crate::components::{alert, ScreenHeader};
use crate::engine::array_ops::{add_column, add_row, random_matrix, update_cell};

fn default_matrix() -> Vec<Vec<i64>> {
    vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]
}

#[component]
pub fn ArrayOps2D() -> impl IntoView {
    let (matrix, set_matrix) = signal(default_matrix());
    let (row_input, set_row_input) = signal(String::new());
    let (col_value_input, set_col_value_input) = signal(String::new());
    let (cell_row, set_cell_row) = signal(String::new());
    let (cell_col, set_cell_col) = signal(String::new());
    let (cell_value, set_cell_value) = signal(String::new());
    let (highlight, set_highlight) = signal(None::<(usize, usize)>);
    let (status, set_status) = signal("Ready".to_string());

    let on_add_row = move |_| {
        let mut next = matrix.get_untracked();
        match add_row(&mut next, &row_input.get_untracked()) {
            Ok(message) => {
                set_highlight.set(None);
                set_matrix.set(next);
                set_status.set(message);
                set_row_input.set(String::new());
            }
            Err(message) => alert(&message),
        }
    };

    let on_add_column = move |_| {
        let mut next = matrix.get_untracked();
        match add_column(&mut next, &col_value_input.get_untracked()) {
            Ok(message) => {
                set_highlight.set(None);
                set_matrix.set(next);
                set_status.set(message);
                set_col_value_input.set(String::new());
            }
            Err(message) => alert(&message),
        }
    };

    let on_update_cell = move |_| {
        let mut next = matrix.get_untracked();
        match update_cell(
            &mut next,
            &cell_row.get_untracked(),
            &cell_col.get_untracked(),
            &cell_value.get_untracked(),
        ) {
            Ok(message) => {
                let row = cell_row.get_untracked().trim().parse().ok();
                let col = cell_col.get_untracked().trim().parse().ok();
                set_highlight.set(row.zip(col));
                set_matrix.set(next);
                set_status.set(message);
                set_cell_row.set(String::new());
                set_cell_col.set(String::new());
                set_cell_value.set(String::new());
            }
            Err(message) => alert(&message),
        }
    };

    let reset = move |_| {
        set_matrix.set(default_matrix());
        set_highlight.set(None);
        set_status.set("Ready".to_string());
    };

    let randomize = move |_| {
        let (next, message) = random_matrix();
        set_matrix.set(next);
        set_highlight.set(None);
        set_status.set(message);
    };

    view! {
        <div class="visualizer">
            <ScreenHeader title="2D Array Operations" />

            <div class="status-card">{move || status.get()}</div>

            <div class="matrix">
                {move || {
                    matrix
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(r, row)| {
                            view! {
                                <div class="matrix-row">
                                    {row
                                        .into_iter()
                                        .enumerate()
                                        .map(|(c, v)| {
                                            let class = if highlight.get() == Some((r, c)) {
                                                "box found"
                                            } else {
                                                "box"
                                            };
                                            view! {
                                                <div class=class>
                                                    <span class="box-value">{v}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <label class="field-label">"Add row (comma-separated, must match width):"</label>
            <div class="action-row">
                <input
                    type="text"
                    prop:value=move || row_input.get()
                    on:input=move |ev| set_row_input.set(event_target_value(&ev))
                />
                <button class="btn primary" on:click=on_add_row>"Add Row"</button>
            </div>

            <label class="field-label">"Add column (one value for every row):"</label>
            <div class="action-row">
                <input
                    type="text"
                    prop:value=move || col_value_input.get()
                    on:input=move |ev| set_col_value_input.set(event_target_value(&ev))
                />
                <button class="btn primary" on:click=on_add_column>"Add Column"</button>
            </div>

            <label class="field-label">"Update cell (row, column, new value):"</label>
            <div class="action-row">
                <input
                    type="text"
                    placeholder="row"
                    prop:value=move || cell_row.get()
                    on:input=move |ev| set_cell_row.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="col"
                    prop:value=move || cell_col.get()
                    on:input=move |ev| set_cell_col.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="value"
                    prop:value=move || cell_value.get()
                    on:input=move |ev| set_cell_value.set(event_target_value(&ev))
                />
                <button class="btn primary" on:click=on_update_cell>"Update Cell"</button>
            </div>

            <div class="action-row">
                <button class="btn secondary" on:click=reset>"Reset"</button>
                <button class="btn accent" on:click=randomize>"🎲 Random"</button>
            </div>

            <div class="info-card">
                <p>"A 2D array is a grid addressed by [row][column]; access is O(1)."</p>
            </div>
        </div>
    }
}
