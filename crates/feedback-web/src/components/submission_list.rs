//! Submission list for the admin dashboard

use feedback_core::types::Priority;
use feedback_core::utils::{format_timestamp, short_id};
use feedback_core::Submission;
use leptos::*;

/// Badge class for a rating chip
pub(crate) fn rating_badge_class(rating: u8) -> &'static str {
    if rating >= 4 {
        "rating-badge rating-good"
    } else if rating == 3 {
        "rating-badge rating-mid"
    } else {
        "rating-badge rating-bad"
    }
}

/// Submission list component
#[component]
pub fn SubmissionList(
    /// Submissions to display, newest first
    submissions: Vec<Submission>,
) -> impl IntoView {
    view! {
        <div class="submission-list">
            {submissions
                .into_iter()
                .map(|submission| view! { <SubmissionCard submission/> })
                .collect_view()}
        </div>
    }
}

/// Individual submission card
#[component]
fn SubmissionCard(submission: Submission) -> impl IntoView {
    let actions = submission.actions().to_vec();

    view! {
        <div class="submission-card">
            <div class="submission-head">
                <span class=rating_badge_class(submission.rating)>
                    {submission.rating} " ★"
                </span>
                <span class="submission-id">"ID: " {short_id(&submission.id)}</span>
                <span class="submission-date">{format_timestamp(&submission.created_at)}</span>
            </div>
            <div class="submission-body">
                <div class="submission-review">
                    <h4>"Customer Review"</h4>
                    <p>{submission.review_text.clone()}</p>
                    {submission
                        .admin_summary
                        .clone()
                        .map(|summary| {
                            view! {
                                <div class="ai-summary">
                                    <h4>"AI Summary"</h4>
                                    <p>{summary}</p>
                                </div>
                            }
                        })}
                </div>
                {(!actions.is_empty())
                    .then(|| {
                        view! {
                            <div class="submission-actions">
                                <h4>"Recommended Actions"</h4>
                                {actions
                                    .into_iter()
                                    .map(|action| {
                                        let badge = Priority::css_class(action.normalized_priority());
                                        view! {
                                            <div class="action-item">
                                                <span class="action-text">{action.action.clone()}</span>
                                                <div class="action-meta">
                                                    <span class=format!(
                                                        "priority-badge {badge}",
                                                    )>{action.priority.clone()}</span>
                                                    <span class="action-owner">{action.owner.clone()}</span>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rating_badge_class() {
        assert_eq!(rating_badge_class(5), "rating-badge rating-good");
        assert_eq!(rating_badge_class(4), "rating-badge rating-good");
        assert_eq!(rating_badge_class(3), "rating-badge rating-mid");
        assert_eq!(rating_badge_class(2), "rating-badge rating-bad");
        assert_eq!(rating_badge_class(1), "rating-badge rating-bad");
    }
}
