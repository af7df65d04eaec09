//! Character counter for the review textarea

use leptos::*;

/// Share of the limit used, 0-100
pub(crate) fn percent_used(current: usize, max: usize) -> f64 {
    if max == 0 {
        return 100.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = current as f64 / max as f64 * 100.0;
    pct.min(100.0)
}

/// Counter plus progress track that warns as the limit approaches
#[component]
pub fn CharacterCounter(
    /// Current character count
    #[prop(into)]
    current: Signal<usize>,
    /// Maximum allowed characters
    max: usize,
) -> impl IntoView {
    let state_class = move || {
        let current = current.get();
        if current >= max {
            "char-counter at-limit"
        } else if percent_used(current, max) > 80.0 {
            "char-counter near-limit"
        } else {
            "char-counter"
        }
    };

    view! {
        <div class=state_class>
            <span class="char-counter-label">
                {move || current.get()} " / " {max}
            </span>
            <div class="char-counter-track">
                <div
                    class="char-counter-fill"
                    style:width=move || format!("{:.1}%", percent_used(current.get(), max))
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_used() {
        assert!((percent_used(0, 2000) - 0.0).abs() < f64::EPSILON);
        assert!((percent_used(500, 2000) - 25.0).abs() < f64::EPSILON);
        assert!((percent_used(2000, 2000) - 100.0).abs() < f64::EPSILON);
        // Overflow clamps rather than growing past the track
        assert!((percent_used(4000, 2000) - 100.0).abs() < f64::EPSILON);
        assert!((percent_used(1, 0) - 100.0).abs() < f64::EPSILON);
    }
}
