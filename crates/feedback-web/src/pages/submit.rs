//! Customer feedback submission form
//!
//! State machine: idle -> submitting -> success or error. Success clears the
//! fields and shows the created submission; error keeps the fields editable.
//! Validation runs before any network call.

use leptos::ev::SubmitEvent;
use leptos::*;

use feedback_core::types::{SubmissionDraft, MAX_REVIEW_LENGTH};
use feedback_core::utils::{short_id, star_string};
use feedback_core::Submission;

use crate::components::banner::{BannerMessage, StatusBanner};
use crate::components::char_counter::CharacterCounter;
use crate::components::star_rating::StarRating;
use crate::components::typewriter::TypewriterText;
use crate::poller;

/// Caption shown under the stars once a rating is selected
fn rating_caption(rating: u8) -> &'static str {
    match rating {
        5 => "Excellent!",
        4 => "Great!",
        3 => "Good",
        2 => "Could be better",
        1 => "Needs improvement",
        _ => "",
    }
}

/// Submission form page component
#[component]
pub fn SubmitPage() -> impl IntoView {
    let rating = create_rw_signal(0_u8);
    let review_text = create_rw_signal(String::new());
    let submitting = create_rw_signal(false);
    let banner = create_rw_signal(None::<BannerMessage>);
    let last_submission = create_rw_signal(None::<Submission>);
    let show_reveal = create_rw_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        banner.set(None);

        let draft = SubmissionDraft {
            rating: rating.get(),
            review_text: review_text.get(),
        };
        let body = match draft.validate() {
            Ok(body) => body,
            Err(e) => {
                banner.set(Some(BannerMessage::error(e.user_message())));
                return;
            }
        };

        submitting.set(true);
        spawn_local(async move {
            match poller::post_submission(&body).await {
                Ok(submission) => {
                    last_submission.set(Some(submission));
                    show_reveal.set(true);
                    banner.set(Some(BannerMessage::success("Review submitted successfully!")));
                    rating.set(0);
                    review_text.set(String::new());
                }
                Err(e) => banner.set(Some(BannerMessage::error(e.user_message()))),
            }
            submitting.set(false);
        });
    };

    let submit_disabled = move || {
        submitting.get() || rating.get() == 0 || review_text.with(|t| t.trim().is_empty())
    };

    view! {
        <div class="submit-page">
            <div class="intro">
                <h2>"Share Your Feedback"</h2>
                <p>"Your insights help us improve. Get an instant AI-powered response!"</p>
            </div>

            {move || banner.get().map(|b| view! { <StatusBanner banner=b/> })}

            <form class="submit-form" on:submit=on_submit>
                <label class="form-label">"How would you rate your experience?"</label>
                <StarRating value=rating on_change=Callback::new(move |star| rating.set(star))/>
                <Show when=move || (rating.get() > 0)>
                    <p class="rating-caption">{move || rating_caption(rating.get())}</p>
                </Show>

                <label class="form-label">"Tell us more about your experience"</label>
                <textarea
                    class="review-input"
                    placeholder="Share your thoughts, suggestions, or concerns..."
                    maxlength=MAX_REVIEW_LENGTH.to_string()
                    prop:value=move || review_text.get()
                    on:input=move |ev| review_text.set(event_target_value(&ev))
                    disabled=move || submitting.get()
                ></textarea>
                <CharacterCounter
                    current=Signal::derive(move || review_text.with(|t| t.chars().count()))
                    max=MAX_REVIEW_LENGTH
                />

                <button type="submit" class="submit-button" disabled=submit_disabled>
                    {move || if submitting.get() { "Submitting..." } else { "Submit Review" }}
                </button>
            </form>

            {move || {
                last_submission
                    .get()
                    .map(|submission| view! { <ResponseCard submission show_reveal/> })
            }}
        </div>
    }
}

/// The backend's response to the last successful submission
#[component]
fn ResponseCard(submission: Submission, show_reveal: RwSignal<bool>) -> impl IntoView {
    let response_text = submission
        .user_response
        .clone()
        .unwrap_or_else(|| "Thank you for your feedback!".to_string());

    let response_view = move || {
        let text = response_text.clone();
        if show_reveal.get() {
            view! {
                <TypewriterText
                    text
                    on_complete=Callback::new(move |()| show_reveal.set(false))
                />
            }
            .into_view()
        } else {
            view! { <span class="response-text">{text}</span> }.into_view()
        }
    };

    view! {
        <div class="response-card">
            <div class="response-head">
                <h3>"AI Response Received!"</h3>
                <p>"Here's what we think"</p>
            </div>
            <div class="response-body">
                <p class="response-label">"Our Response"</p>
                <p class="response-content">{response_view}</p>
                <div class="response-meta">
                    <div class="meta-cell">
                        <span class="meta-label">"Rating"</span>
                        <span class="stars">{star_string(submission.rating)}</span>
                    </div>
                    <div class="meta-cell">
                        <span class="meta-label">"ID"</span>
                        <span class="mono">{short_id(&submission.id)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rating_captions() {
        assert_eq!(rating_caption(5), "Excellent!");
        assert_eq!(rating_caption(1), "Needs improvement");
        assert_eq!(rating_caption(0), "");
        assert_eq!(rating_caption(7), "");
    }
}
