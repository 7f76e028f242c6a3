//! Global Application State
//!
//! Reactive state management using Leptos signals.
//!
//! The expense list is a client-side cache of server state: it is refreshed
//! wholesale on load, and add/delete splice it optimistically without
//! re-fetching. Under concurrent external writes the cache can diverge from
//! server truth until the next load; that staleness is accepted.

use leptos::*;

use crate::api::{stored_api_base, ApiClient};

/// Category used when the form or the server leaves it blank
pub const DEFAULT_CATEGORY: &str = "General";

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Expense API client, bound to the configured base URL
    pub api: RwSignal<ApiClient>,
    /// Canonical expense list as last seen from the server
    pub expenses: RwSignal<RemoteData<Vec<Expense>>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A recorded expense as returned by the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Expense {
    /// Server-assigned identifier (the backing store exposes it as `_id`)
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub amount: f64,
    #[serde(default = "default_category")]
    pub category: String,
    /// Server-assigned creation time (RFC 3339), used only for display
    #[serde(default)]
    pub date: Option<String>,
}

/// Validated form input for creating an expense
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: f64,
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Lifecycle of a value fetched from the API
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteData<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

/// Sum of all amounts in the list
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Remove the expense with the given id, leaving every other record untouched
pub fn remove_by_id(expenses: &mut Vec<Expense>, id: &str) {
    expenses.retain(|e| e.id != id);
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        api: create_rw_signal(ApiClient::new(stored_api_base())),
        expenses: create_rw_signal(RemoteData::Idle),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Expenses from the last successful load, empty before then
    pub fn expense_list(&self) -> Vec<Expense> {
        match self.expenses.get() {
            RemoteData::Loaded(list) => list,
            _ => Vec::new(),
        }
    }

    /// Running total over the visible list
    pub fn total(&self) -> f64 {
        total_amount(&self.expense_list())
    }

    /// Prepend a freshly created expense to the cached list.
    ///
    /// An add can finish while the initial load is still in flight or has
    /// failed; the new record must stay visible either way, so a non-loaded
    /// state is promoted to a one-element list.
    pub fn prepend_expense(&self, expense: Expense) {
        self.expenses.update(|data| match data {
            RemoteData::Loaded(list) => list.insert(0, expense),
            other => *other = RemoteData::Loaded(vec![expense]),
        });
    }

    /// Splice a deleted expense out of the cached list by id
    pub fn remove_expense(&self, id: &str) {
        self.expenses.update(|data| {
            if let RemoteData::Loaded(list) = data {
                remove_by_id(list, id);
            }
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            title: "Groceries".to_string(),
            amount,
            category: DEFAULT_CATEGORY.to_string(),
            date: None,
        }
    }

    #[test]
    fn test_total_of_empty_list_is_zero() {
        assert_eq!(total_amount(&[]), 0.0);
    }

    #[test]
    fn test_total_sums_all_amounts() {
        let expenses = [expense("a", 3.5), expense("b", 10.0), expense("c", 0.25)];
        assert_eq!(total_amount(&expenses), 13.75);
    }

    #[test]
    fn test_remove_by_id_removes_exactly_one() {
        let mut expenses = vec![expense("a", 3.5), expense("b", 3.5)];
        remove_by_id(&mut expenses, "a");
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, "b");
        assert_eq!(expenses[0].amount, 3.5);
    }

    #[test]
    fn test_remove_by_id_ignores_unknown_id() {
        let mut expenses = vec![expense("a", 3.5)];
        remove_by_id(&mut expenses, "missing");
        assert_eq!(expenses.len(), 1);
    }

    #[test]
    fn test_expense_decodes_underscore_id() {
        let raw = r#"{"_id":"64fe","title":"Coffee","amount":3.5,"category":"Food","date":"2025-11-02T09:15:00Z"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.id, "64fe");
        assert_eq!(expense.amount, 3.5);
        assert_eq!(expense.category, "Food");
    }

    #[test]
    fn test_expense_category_defaults_when_missing() {
        let raw = r#"{"id":"64fe","title":"Coffee","amount":3.5}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.category, DEFAULT_CATEGORY);
        assert_eq!(expense.date, None);
    }

    #[test]
    fn test_draft_serializes_to_create_body() {
        let draft = ExpenseDraft {
            title: "Coffee".to_string(),
            amount: 3.5,
            category: "Food".to_string(),
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"title": "Coffee", "amount": 3.5, "category": "Food"})
        );
    }
}
