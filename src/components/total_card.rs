//! Total Card Component
//!
//! Displays the running total over the visible expenses.

use leptos::*;

/// Running total card
#[component]
pub fn TotalCard(
    /// Total to display, recomputed by the page from the visible list
    #[prop(into)]
    total: Signal<f64>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-6 border border-gray-700 text-center">
            <span class="text-gray-400 text-sm tracking-wider">"Total Spent"</span>
            <div class="text-4xl font-bold mt-2">
                {move || format!("${:.2}", total.get())}
            </div>
        </div>
    }
}
