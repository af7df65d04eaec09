//! Animated star-rating input

use leptos::*;

/// Five-star input with hover preview
///
/// Hovering previews a rating without committing it; clicking commits. The
/// hover state lives here, the committed value belongs to the form.
#[component]
pub fn StarRating(
    /// Committed rating, 0 when nothing is selected
    #[prop(into)]
    value: Signal<u8>,
    /// Invoked with the star clicked
    on_change: Callback<u8>,
) -> impl IntoView {
    let hover = create_rw_signal(0_u8);

    let effective = move || {
        let hovered = hover.get();
        if hovered > 0 {
            hovered
        } else {
            value.get()
        }
    };

    view! {
        <div class="star-rating" on:mouseleave=move |_| hover.set(0)>
            {(1_u8..=5)
                .map(|star| {
                    view! {
                        <button
                            type="button"
                            class="star"
                            class:active=move || (effective() >= star)
                            on:click=move |_| on_change.call(star)
                            on:mouseenter=move |_| hover.set(star)
                        >
                            "★"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
