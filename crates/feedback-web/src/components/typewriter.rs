//! Character-by-character text reveal

use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;

/// Reveal `text` one character at a time
///
/// Purely cosmetic: the full text is already in memory and the reveal
/// cannot be cancelled by the user, only finished. `on_complete` fires once
/// when the last character is shown.
#[component]
pub fn TypewriterText(
    /// Full text to reveal
    #[prop(into)]
    text: String,
    /// Delay between characters, in milliseconds
    #[prop(default = 20)]
    speed_ms: u64,
    /// Invoked once after the last character is shown
    #[prop(into, optional)]
    on_complete: Option<Callback<()>>,
) -> impl IntoView {
    let total = text.chars().count();
    let shown = create_rw_signal(0_usize);
    let handle_slot = store_value(None::<IntervalHandle>);

    let tick = move || {
        if shown.get_untracked() >= total {
            if let Some(handle) = handle_slot.get_value() {
                handle.clear();
            }
            if let Some(callback) = on_complete {
                callback.call(());
            }
        } else {
            shown.update(|n| *n += 1);
        }
    };

    match set_interval_with_handle(tick, Duration::from_millis(speed_ms)) {
        Ok(handle) => {
            handle_slot.set_value(Some(handle));
            on_cleanup(move || handle.clear());
        }
        // No timer available; show everything at once
        Err(e) => {
            tracing::error!("Failed to schedule reveal interval: {:?}", e);
            shown.set(total);
        }
    }

    let text = store_value(text);
    view! {
        <span class="typewriter">
            {move || text.with_value(|t| t.chars().take(shown.get()).collect::<String>())}
        </span>
    }
}
