//! Expense Form Component
//!
//! Form for recording a new expense. The form owns the draft fields and
//! emits a validated draft into the create action handed down by the page;
//! it never talks to the network itself.

use leptos::*;

use crate::state::global::{ExpenseDraft, DEFAULT_CATEGORY};

/// Turn raw form input into a draft ready for the API.
///
/// Title and amount are required; the amount must parse as a number. An
/// empty category falls back to the default.
pub fn validate_draft(title: &str, amount: &str, category: &str) -> Result<ExpenseDraft, String> {
    let title = title.trim();
    let amount = amount.trim();

    if title.is_empty() || amount.is_empty() {
        return Err("Please provide title & amount".to_string());
    }

    let amount: f64 = amount
        .parse()
        .map_err(|_| "Amount must be a number".to_string())?;

    let category = category.trim();
    Ok(ExpenseDraft {
        title: title.to_string(),
        amount,
        category: if category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category.to_string()
        },
    })
}

/// Expense entry form
#[component]
pub fn ExpenseForm(
    /// Create action owned by the page; dispatched with the validated draft
    add: Action<ExpenseDraft, Result<(), String>>,
) -> impl IntoView {
    let (title, set_title) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (category, set_category) = create_signal(DEFAULT_CATEGORY.to_string());
    let (validation, set_validation) = create_signal(None::<String>);

    let submitting = add.pending();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match validate_draft(&title.get(), &amount.get(), &category.get()) {
            Ok(draft) => {
                set_validation.set(None);
                add.dispatch(draft);
            }
            Err(message) => set_validation.set(Some(message)),
        }
    };

    // Clear the draft once a create round-trip succeeds; a failed round-trip
    // keeps the fields so the user can retry
    create_effect(move |_| {
        if let Some(Ok(())) = add.value().get() {
            set_title.set(String::new());
            set_amount.set(String::new());
            set_category.set(DEFAULT_CATEGORY.to_string());
        }
    });

    view! {
        <form on:submit=on_submit class="space-y-4">
            // Title
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                <input
                    type="text"
                    placeholder="e.g., Groceries"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Amount
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Amount"</label>
                <input
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Category
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Category"</label>
                <input
                    type="text"
                    placeholder="Food, Travel..."
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Validation message
            {move || {
                validation.get().map(|message| view! {
                    <p class="text-red-400 text-sm">{message}</p>
                })
            }}

            // Submit button
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if submitting.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Saving..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Add Expense"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_is_rejected() {
        let result = validate_draft("", "3.5", "Food");
        assert_eq!(result, Err("Please provide title & amount".to_string()));
    }

    #[test]
    fn test_whitespace_title_is_rejected() {
        let result = validate_draft("   ", "3.5", "Food");
        assert_eq!(result, Err("Please provide title & amount".to_string()));
    }

    #[test]
    fn test_empty_amount_is_rejected() {
        let result = validate_draft("Coffee", "", "Food");
        assert_eq!(result, Err("Please provide title & amount".to_string()));
    }

    #[test]
    fn test_non_numeric_amount_is_rejected() {
        let result = validate_draft("Coffee", "cheap", "Food");
        assert_eq!(result, Err("Amount must be a number".to_string()));
    }

    #[test]
    fn test_valid_input_becomes_normalized_draft() {
        let draft = validate_draft("Coffee", "3.5", "Food").unwrap();
        assert_eq!(
            draft,
            ExpenseDraft {
                title: "Coffee".to_string(),
                amount: 3.5,
                category: "Food".to_string(),
            }
        );
    }

    #[test]
    fn test_title_and_amount_are_trimmed() {
        let draft = validate_draft("  Coffee  ", " 3.5 ", "Food").unwrap();
        assert_eq!(draft.title, "Coffee");
        assert_eq!(draft.amount, 3.5);
    }

    #[test]
    fn test_empty_category_falls_back_to_default() {
        let draft = validate_draft("Coffee", "3.5", "  ").unwrap();
        assert_eq!(draft.category, DEFAULT_CATEGORY);
    }
}
