//! Renders a projected [`Table`]

use crate::data_view::{ActionKind, Cell, Table};
use leptos::prelude::*;

/// Table with a header row; action buttons report `(row index, action)`
#[component]
pub fn DataTable(
    /// Projected grid
    table: Table,
    /// Row action handler
    on_action: Callback<(usize, ActionKind)>,
    /// Disable row buttons, e.g. while a mutation is in flight
    #[prop(into)]
    locked: Signal<bool>,
    /// Text shown when there are no rows
    #[prop(default = "Nenhum registro encontrado")]
    empty_text: &'static str,
) -> impl IntoView {
    let column_count = table.columns.len();
    let header = table
        .columns
        .iter()
        .map(|column| {
            let style = column.width.map(|width| format!("width: {width}"));
            view! { <th style=style>{column.label}</th> }
        })
        .collect_view();

    let body = if table.rows.is_empty() {
        view! {
            <tr>
                <td class="empty-row" colspan=column_count.to_string()>
                    {empty_text}
                </td>
            </tr>
        }
        .into_any()
    } else {
        table
            .rows
            .into_iter()
            .map(|row| {
                let index = row.index;
                view! {
                    <tr>
                        {row
                            .cells
                            .into_iter()
                            .map(|cell| view! { <td>{render_cell(cell, index, on_action, locked)}</td> })
                            .collect_view()}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table-container">
            <table class="data-table">
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

fn render_cell(
    cell: Cell,
    index: usize,
    on_action: Callback<(usize, ActionKind)>,
    locked: Signal<bool>,
) -> AnyView {
    match cell {
        Cell::Text(text) => text.into_any(),
        Cell::Stacked { primary, secondary } => view! {
            <div class="cell-stacked">
                <span class="cell-primary">{primary}</span>
                <span class="cell-secondary">{secondary}</span>
            </div>
        }
        .into_any(),
        Cell::Badge { label, tone } => {
            view! { <span class=format!("badge {}", tone.class())>{label}</span> }.into_any()
        }
        Cell::Rating { score, note } => view! {
            <span class="rating">
                <span class="star">"★"</span>
                {score}
                {note.map(|note| view! { <span class="cell-secondary">{note}</span> })}
            </span>
        }
        .into_any(),
        Cell::Progress { label, percent } => view! {
            <div class="cell-progress">
                <span>{label}</span>
                <div class="progress-track">
                    <div class="progress-fill" style=format!("width: {percent:.0}%")></div>
                </div>
            </div>
        }
        .into_any(),
        Cell::Actions(actions) => view! {
            <div class="row-actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        view! {
                            <button
                                class=format!("btn btn-sm {}", action.tone.class())
                                prop:disabled=move || locked.get()
                                on:click=move |_| on_action.run((index, action.kind))
                            >
                                {action.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
