//! Expense List Component
//!
//! Renders the recorded expenses, newest first. Pure function of its props:
//! delete requests are emitted upward by id, the page owns the network call.

use leptos::*;
use std::collections::HashSet;

use crate::state::global::Expense;

/// List of recorded expenses
#[component]
pub fn ExpenseList(
    /// Expenses to display
    #[prop(into)]
    expenses: Signal<Vec<Expense>>,
    /// Invoked with the expense id when a row's delete button is pressed
    #[prop(into)]
    on_delete: Callback<String>,
    /// Ids with a delete currently in flight
    #[prop(into)]
    deleting: Signal<HashSet<String>>,
) -> impl IntoView {
    view! {
        {move || {
            let list = expenses.get();
            if list.is_empty() {
                view! {
                    <div class="text-center py-12">
                        <p class="text-gray-400">"No expenses yet."</p>
                    </div>
                }.into_view()
            } else {
                view! {
                    <ul class="space-y-3">
                        {list.into_iter().map(|expense| view! {
                            <ExpenseRow expense=expense on_delete=on_delete deleting=deleting />
                        }).collect_view()}
                    </ul>
                }.into_view()
            }
        }}
    }
}

/// Single expense row
#[component]
fn ExpenseRow(
    expense: Expense,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] deleting: Signal<HashSet<String>>,
) -> impl IntoView {
    let id_for_click = expense.id.clone();
    let id_for_disabled = expense.id.clone();
    let id_for_label = expense.id.clone();

    let date_label = expense.date.as_deref().map(format_date);

    view! {
        <li class="flex items-center justify-between bg-gray-700 rounded-lg p-4
                   border border-gray-600 hover:border-gray-500 transition-colors">
            <div>
                <p class="font-semibold">{expense.title}</p>
                <p class="text-sm text-gray-400">
                    <span class="capitalize">{expense.category}</span>
                    {date_label.map(|date| format!(" • {}", date))}
                </p>
            </div>

            <div class="text-right">
                <p class="text-xl font-bold">{format!("${:.2}", expense.amount)}</p>
                <button
                    on:click=move |_| on_delete.call(id_for_click.clone())
                    disabled=move || deleting.get().contains(&id_for_disabled)
                    class="text-red-400 hover:text-red-300 disabled:text-gray-500
                           text-sm mt-1 transition-colors"
                >
                    {move || if deleting.get().contains(&id_for_label) {
                        "Deleting..."
                    } else {
                        "Delete"
                    }}
                </button>
            </div>
        </li>
    }
}

/// Format a server timestamp for display, falling back to the raw value
fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_renders_rfc3339() {
        assert_eq!(format_date("2025-11-02T09:15:00Z"), "Nov 02, 09:15");
    }

    #[test]
    fn test_format_date_handles_offsets() {
        assert_eq!(format_date("2025-11-02T09:15:00+02:00"), "Nov 02, 09:15");
    }

    #[test]
    fn test_format_date_passes_through_garbage() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
