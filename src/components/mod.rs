//! UI Components
//!
//! Reusable Leptos components for the expense tracker.

pub mod expense_form;
pub mod expense_list;
pub mod loading;
pub mod nav;
pub mod toast;
pub mod total_card;

pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
pub use loading::Loading;
pub use nav::Nav;
pub use toast::Toast;
pub use total_card::TotalCard;
