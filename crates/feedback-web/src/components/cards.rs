//! Overview stat cards

use leptos::*;

/// One headline number with a caption
#[component]
pub fn StatCard(
    /// Card title, e.g. "Total Reviews"
    #[prop(into)]
    title: String,
    /// Headline value, already formatted
    #[prop(into)]
    value: String,
    /// Small caption under the value
    #[prop(into)]
    hint: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h3 class="stat-title">{title}</h3>
            <div class="stat-value">{value}</div>
            <p class="stat-hint">{hint}</p>
        </div>
    }
}

/// Placeholder shown when the feed has loaded but is empty
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>"No submissions found"</h3>
            <p>
                "No reviews have been submitted yet. New submissions will appear here automatically."
            </p>
        </div>
    }
}
