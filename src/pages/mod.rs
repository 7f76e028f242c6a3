//! Pages
//!
//! Top-level page components for each route.

pub mod expenses;
pub mod settings;

pub use expenses::Expenses;
pub use settings::Settings;
