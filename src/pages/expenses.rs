//! Expenses Page
//!
//! Main view: running total, entry form and the recorded expenses. Owns the
//! load, add and delete flows against the API; the child components only
//! render props and emit requests upward.

use leptos::*;
use std::collections::HashSet;

use crate::components::{ExpenseForm, ExpenseList, Loading, TotalCard};
use crate::state::global::{ExpenseDraft, GlobalState, RemoteData};

/// Expenses page component
#[component]
pub fn Expenses() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (deleting, set_deleting) = create_signal(HashSet::<String>::new());

    // Load the expense list once on mount; there is no re-entry path short
    // of remounting the page
    let state_for_load = state.clone();
    create_effect(move |_| {
        let state = state_for_load.clone();
        spawn_local(async move {
            state.expenses.set(RemoteData::Loading);

            match state.api.get_untracked().list_expenses().await {
                Ok(expenses) => {
                    state.expenses.set(RemoteData::Loaded(expenses));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load expenses: {}", e).into());
                    state
                        .expenses
                        .set(RemoteData::Failed("Failed to load expenses".to_string()));
                }
            }
        });
    });

    // Create flow: the form dispatches validated drafts into this action
    let add = create_action({
        let state = state.clone();
        move |draft: &ExpenseDraft| {
            let state = state.clone();
            let draft = draft.clone();
            async move {
                match state.api.get_untracked().create_expense(&draft).await {
                    Ok(expense) => {
                        state.prepend_expense(expense);
                        state.show_success("Expense added");
                        Ok(())
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to add expense: {}", e).into());
                        state.show_error("Failed to add expense");
                        Err(e)
                    }
                }
            }
        }
    });

    // Delete flow: fire-and-forget per item; the record stays displayed if
    // the call fails
    let state_for_delete = state.clone();
    let on_delete = Callback::new(move |id: String| {
        set_deleting.update(|d| {
            d.insert(id.clone());
        });

        let state = state_for_delete.clone();
        spawn_local(async move {
            match state.api.get_untracked().delete_expense(&id).await {
                Ok(()) => {
                    state.remove_expense(&id);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to delete expense: {}", e).into());
                    state.show_error("Failed to delete expense");
                }
            }
            set_deleting.update(|d| {
                d.remove(&id);
            });
        });
    });

    // Derived values for the child components
    let state_for_total = state.clone();
    let total = Signal::derive(move || state_for_total.total());
    let state_for_list = state.clone();
    let expenses = Signal::derive(move || state_for_list.expense_list());
    let remote = state.expenses;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Expenses"</h1>
                <p class="text-gray-400 mt-1">"Track where your money goes"</p>
            </div>

            // Running total
            <TotalCard total=total />

            <div class="grid md:grid-cols-2 gap-8">
                // Entry form
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Add Expense"</h2>
                    <ExpenseForm add=add />
                </section>

                // Expense list
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Recent Expenses"</h2>

                    {move || match remote.get() {
                        RemoteData::Idle | RemoteData::Loading => view! { <Loading /> }.into_view(),
                        RemoteData::Failed(reason) => view! {
                            <p class="text-center py-12 text-red-400">{reason}</p>
                        }.into_view(),
                        RemoteData::Loaded(_) => view! {
                            <ExpenseList expenses=expenses on_delete=on_delete deleting=deleting />
                        }.into_view(),
                    }}
                </section>
            </div>
        </div>
    }
}
