//! Wire types for the feedback backend REST API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Maximum review length accepted by the backend, in characters
pub const MAX_REVIEW_LENGTH: usize = 2000;

/// Normalized priority of a recommended action
///
/// Wire values are free-form strings; anything that is not `high`, `medium`
/// or `low` (case-insensitive) stays unrecognized and renders unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs attention first
    High,
    /// Normal follow-up
    Medium,
    /// Nice to have
    Low,
}

impl Priority {
    /// Parse a wire label, case-insensitively
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// CSS class used when rendering a priority badge
    #[must_use]
    pub const fn css_class(label: Option<Self>) -> &'static str {
        match label {
            Some(Self::High) => "priority-high",
            Some(Self::Medium) => "priority-medium",
            Some(Self::Low) => "priority-low",
            None => "priority-none",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// A backend-suggested follow-up task attached to a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedAction {
    /// What should be done
    pub action: String,

    /// Priority label as sent by the backend (see [`Priority::parse`])
    pub priority: String,

    /// Owning team name, matched against the chart palette by exact string
    pub owner: String,
}

impl RecommendedAction {
    /// Normalized priority, if the label is recognized
    #[must_use]
    pub fn normalized_priority(&self) -> Option<Priority> {
        Priority::parse(&self.priority)
    }
}

/// One customer-provided rating + review record
///
/// Immutable once created; the backend is the only writer. The AI-generated
/// fields arrive already populated on the create response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Opaque identifier assigned by the backend
    pub id: String,

    /// Star rating, 1-5
    pub rating: u8,

    /// Customer review text
    pub review_text: String,

    /// AI-generated response shown to the customer
    pub user_response: Option<String>,

    /// AI-generated summary shown to admins
    pub admin_summary: Option<String>,

    /// AI-suggested follow-up actions
    pub admin_recommended_actions: Option<Vec<RecommendedAction>>,

    /// Creation timestamp
    #[serde(with = "flexible_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// Recommended actions, empty when the backend sent none
    #[must_use]
    pub fn actions(&self) -> &[RecommendedAction] {
        self.admin_recommended_actions.as_deref().unwrap_or_default()
    }
}

/// Response of `GET /v1/submissions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionList {
    /// All submissions, newest first
    pub submissions: Vec<Submission>,

    /// Total number of submissions
    pub total: u64,
}

/// Count of submissions per rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCount {
    /// Star rating, 1-5
    pub rating: u8,

    /// Number of submissions with this rating
    pub count: u64,

    /// Share of all submissions, 0-100
    pub percentage: f64,
}

/// Daily submission volume bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyVolume {
    /// Calendar day as `YYYY-MM-DD`
    pub date: String,

    /// Number of submissions on that day
    pub count: u64,
}

/// Response of `GET /v1/analytics`
///
/// Computed server-side; the frontend only re-derives *other* breakdowns
/// joined against `daily_volume`, never these numbers themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Total number of submissions ever received
    pub total_submissions: u64,

    /// Histogram of ratings
    pub rating_distribution: Vec<RatingCount>,

    /// Mean rating across all submissions
    pub average_rating: f64,

    /// Per-day submission counts
    pub daily_volume: Vec<DailyVolume>,

    /// Submissions today
    pub today_count: u64,

    /// Submissions in the last 7 days
    pub this_week_count: u64,
}

/// Request body of `POST /v1/submissions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewSubmission {
    /// Star rating, 1-5
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,

    /// Review text, already trimmed
    #[validate(length(min = 1, max = 2000))]
    pub review_text: String,
}

/// Raw form state before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    /// Selected rating; 0 means nothing selected yet
    pub rating: u8,

    /// Review text exactly as typed
    pub review_text: String,
}

impl SubmissionDraft {
    /// Validate the draft and produce a request body
    ///
    /// Rules are checked in order and the first failure wins, so a missing
    /// rating is reported before an empty review. The returned body carries
    /// the trimmed review text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] with the user-facing message for
    /// the first rule that fails.
    pub fn validate(&self) -> crate::Result<NewSubmission> {
        if self.rating < 1 || self.rating > 5 {
            return Err(crate::Error::Validation {
                field: "rating".to_string(),
                message: "Please select a rating between 1 and 5".to_string(),
            });
        }

        let trimmed = self.review_text.trim();
        if trimmed.is_empty() {
            return Err(crate::Error::Validation {
                field: "review_text".to_string(),
                message: "Please enter your review".to_string(),
            });
        }

        if trimmed.chars().count() > MAX_REVIEW_LENGTH {
            return Err(crate::Error::Validation {
                field: "review_text".to_string(),
                message: "Review text must be 2000 characters or less".to_string(),
            });
        }

        Ok(NewSubmission {
            rating: self.rating,
            review_text: trimmed.to_string(),
        })
    }
}

/// Detail object of a backend error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable code, e.g. `VALIDATION_ERROR`
    #[serde(default)]
    pub code: Option<String>,

    /// User-facing message
    pub message: String,
}

/// Body shape of a non-2xx backend response
///
/// The `detail` field is optional; without it the caller falls back to a
/// generic HTTP status message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error detail, when the backend provided one
    #[serde(default)]
    pub detail: Option<ApiErrorDetail>,
}

/// Timestamp (de)serialization tolerant of missing UTC offsets
///
/// The backend emits ISO-8601, sometimes without an offset. Values without
/// an offset are taken as UTC.
mod flexible_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        if let Ok(with_offset) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(with_offset.with_timezone(&Utc));
        }

        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_submission_json() -> &'static str {
        r#"{
            "id": "3f2b8c61-9a1e-4f7d-b0aa-6f2d3c1e5a44",
            "rating": 2,
            "review_text": "Delivery took two weeks.",
            "user_response": "We are sorry about the delay.",
            "admin_summary": "Customer unhappy with shipping times.",
            "admin_recommended_actions": [
                {"action": "Review courier SLA", "priority": "High", "owner": "Operations"}
            ],
            "created_at": "2025-08-01T09:30:00Z"
        }"#
    }

    #[test]
    fn test_submission_deserialization() {
        let submission: Submission = serde_json::from_str(sample_submission_json()).unwrap();

        assert_eq!(submission.rating, 2);
        assert_eq!(submission.actions().len(), 1);
        assert_eq!(submission.actions()[0].owner, "Operations");
        assert_eq!(
            submission.actions()[0].normalized_priority(),
            Some(Priority::High)
        );
    }

    #[test]
    fn test_submission_without_annotations() {
        let json = r#"{
            "id": "abc",
            "rating": 5,
            "review_text": "Great",
            "user_response": null,
            "admin_summary": null,
            "admin_recommended_actions": null,
            "created_at": "2025-08-01T09:30:00"
        }"#;

        let submission: Submission = serde_json::from_str(json).unwrap();
        assert!(submission.actions().is_empty());
        assert!(submission.user_response.is_none());
    }

    #[test]
    fn test_naive_timestamp_is_read_as_utc() {
        let json = r#"{
            "id": "abc",
            "rating": 4,
            "review_text": "ok",
            "user_response": null,
            "admin_summary": null,
            "admin_recommended_actions": null,
            "created_at": "2025-08-01T09:30:00.123456"
        }"#;

        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.created_at.to_rfc3339(), "2025-08-01T09:30:00.123456+00:00");
    }

    #[test]
    fn test_submission_roundtrip() {
        let submission: Submission = serde_json::from_str(sample_submission_json()).unwrap();
        let serialized = serde_json::to_string(&submission).unwrap();
        let deserialized: Submission = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, submission);
    }

    #[test]
    fn test_priority_parse_is_case_insensitive() {
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse("Medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Priority::parse(""), None);
    }

    #[test]
    fn test_priority_css_classes() {
        assert_eq!(Priority::css_class(Some(Priority::High)), "priority-high");
        assert_eq!(Priority::css_class(None), "priority-none");
    }

    #[test]
    fn test_draft_rejects_missing_rating() {
        let draft = SubmissionDraft {
            rating: 0,
            review_text: "anything".to_string(),
        };

        let err = draft.validate().unwrap_err();
        assert_eq!(err.user_message(), "Please select a rating between 1 and 5");
    }

    #[test]
    fn test_draft_rejects_rating_above_range() {
        let draft = SubmissionDraft {
            rating: 6,
            review_text: "anything".to_string(),
        };

        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_draft_rejects_empty_review() {
        let draft = SubmissionDraft {
            rating: 3,
            review_text: String::new(),
        };

        let err = draft.validate().unwrap_err();
        assert_eq!(err.user_message(), "Please enter your review");
    }

    #[test]
    fn test_draft_rejects_whitespace_only_review() {
        let draft = SubmissionDraft {
            rating: 3,
            review_text: "   \n\t ".to_string(),
        };

        let err = draft.validate().unwrap_err();
        assert_eq!(err.user_message(), "Please enter your review");
    }

    #[test]
    fn test_draft_rejects_overlong_review() {
        let draft = SubmissionDraft {
            rating: 3,
            review_text: "x".repeat(MAX_REVIEW_LENGTH + 1),
        };

        let err = draft.validate().unwrap_err();
        assert_eq!(
            err.user_message(),
            "Review text must be 2000 characters or less"
        );
    }

    #[test]
    fn test_draft_accepts_and_trims_valid_input() {
        let draft = SubmissionDraft {
            rating: 5,
            review_text: "  Great service  ".to_string(),
        };

        let body = draft.validate().unwrap();
        assert_eq!(body.rating, 5);
        assert_eq!(body.review_text, "Great service");

        let serialized = serde_json::to_value(&body).unwrap();
        assert_eq!(
            serialized,
            serde_json::json!({"rating": 5, "review_text": "Great service"})
        );
    }

    #[test]
    fn test_new_submission_validator_bounds() {
        use validator::Validate;

        let valid = NewSubmission {
            rating: 5,
            review_text: "Great service".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_rating = NewSubmission {
            rating: 0,
            review_text: "Great service".to_string(),
        };
        assert!(bad_rating.validate().is_err());

        let empty_text = NewSubmission {
            rating: 3,
            review_text: String::new(),
        };
        assert!(empty_text.validate().is_err());
    }

    #[test]
    fn test_error_body_with_detail() {
        let json = r#"{"detail": {"code": "LLM_ERROR", "message": "Service unavailable"}}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();

        let detail = body.detail.unwrap();
        assert_eq!(detail.code.as_deref(), Some("LLM_ERROR"));
        assert_eq!(detail.message, "Service unavailable");
    }

    #[test]
    fn test_error_body_without_detail() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());

        let body: ApiErrorBody = serde_json::from_str(r#"{"detail": null}"#).unwrap();
        assert!(body.detail.is_none());
    }

    #[test]
    fn test_analytics_summary_deserialization() {
        let json = r#"{
            "total_submissions": 12,
            "rating_distribution": [
                {"rating": 5, "count": 6, "percentage": 50.0},
                {"rating": 1, "count": 2, "percentage": 16.7}
            ],
            "average_rating": 3.9,
            "daily_volume": [
                {"date": "2025-07-31", "count": 4},
                {"date": "2025-08-01", "count": 8}
            ],
            "today_count": 8,
            "this_week_count": 12
        }"#;

        let summary: AnalyticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_submissions, 12);
        assert_eq!(summary.daily_volume.len(), 2);
        assert_eq!(summary.daily_volume[1].date, "2025-08-01");
        assert!((summary.average_rating - 3.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_submission_list_default_is_empty() {
        let list = SubmissionList::default();
        assert!(list.submissions.is_empty());
        assert_eq!(list.total, 0);
    }
}
