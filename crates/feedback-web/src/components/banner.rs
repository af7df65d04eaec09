//! Error and status banners

use leptos::*;

/// Outcome flavor of a status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// Submission accepted
    Success,
    /// Validation or network failure
    Error,
}

/// A transient message shown above the submission form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerMessage {
    /// Flavor, controls styling only
    pub kind: BannerKind,
    /// User-facing text
    pub message: String,
}

impl BannerMessage {
    /// A success banner
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    /// An error banner
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }
}

/// Inline banner used by the submission form
#[component]
pub fn StatusBanner(
    /// Message to display
    banner: BannerMessage,
) -> impl IntoView {
    let class = match banner.kind {
        BannerKind::Success => "banner banner-success",
        BannerKind::Error => "banner banner-error",
    };

    view! {
        <div class=class role="status">
            {banner.message}
        </div>
    }
}

/// Dismissible read-path error banner with a manual retry action
#[component]
pub fn ErrorBanner(
    /// User-facing error text
    message: String,
    /// Invoked when the user clicks Retry
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <h3 class="error-banner-title">"Error loading data"</h3>
            <p class="error-banner-message">{message}</p>
            <button class="btn btn-retry" on:click=move |_| on_retry.call(())>
                "Retry"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_banner_constructors() {
        let success = BannerMessage::success("Review submitted successfully!");
        assert_eq!(success.kind, BannerKind::Success);

        let error = BannerMessage::error("Please enter your review");
        assert_eq!(error.kind, BannerKind::Error);
        assert_eq!(error.message, "Please enter your review");
    }
}
