//! Client-side aggregation of submissions into chart-ready rows
//!
//! Four pure functions over `(submissions, summary)`. The summary's daily
//! volume buckets are the grouping key for everything date-bucketed; the
//! functions never recompute numbers the backend already provides, they only
//! derive breakdowns the backend does not.

use std::collections::HashMap;

use crate::types::{AnalyticsSummary, Priority, Submission};
use crate::utils::local_day;

/// Positive/negative review counts for one daily bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Bucket date, `YYYY-MM-DD`
    pub date: String,

    /// Submissions that day with rating >= 4
    pub positive: u64,

    /// Submissions that day with rating <= 2
    pub negative: u64,

    /// Total for the day, passed through from the summary unchanged
    pub total: u64,
}

/// Recommended-action priority tallies for one daily bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityPoint {
    /// Bucket date, `YYYY-MM-DD`
    pub date: String,

    /// Actions labeled high
    pub high: u64,

    /// Actions labeled medium
    pub medium: u64,

    /// Actions labeled low
    pub low: u64,
}

/// One bar of the rating histogram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingSlice {
    /// Display label, e.g. `5 Star`
    pub label: String,

    /// Number of submissions with this rating
    pub count: u64,
}

/// Action count for one owning team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSlice {
    /// Owning team name, verbatim from the backend
    pub team: String,

    /// Number of recommended actions owned by the team
    pub actions: u64,
}

/// Positive vs negative review counts per daily-volume bucket
///
/// One output row per bucket, in bucket order. A submission belongs to a
/// bucket when its local calendar day equals the bucket date exactly.
#[must_use]
pub fn review_trends(submissions: &[Submission], summary: &AnalyticsSummary) -> Vec<TrendPoint> {
    summary
        .daily_volume
        .iter()
        .map(|day| {
            let mut positive = 0;
            let mut negative = 0;
            for submission in submissions {
                if local_day(&submission.created_at) != day.date {
                    continue;
                }
                if submission.rating >= 4 {
                    positive += 1;
                } else if submission.rating <= 2 {
                    negative += 1;
                }
            }
            TrendPoint {
                date: day.date.clone(),
                positive,
                negative,
                total: day.count,
            }
        })
        .collect()
}

/// Recommended-action priority tallies per daily-volume bucket
///
/// Unrecognized priority labels are dropped from the tally.
#[must_use]
pub fn priority_breakdown(
    submissions: &[Submission],
    summary: &AnalyticsSummary,
) -> Vec<PriorityPoint> {
    summary
        .daily_volume
        .iter()
        .map(|day| {
            let mut point = PriorityPoint {
                date: day.date.clone(),
                high: 0,
                medium: 0,
                low: 0,
            };
            for submission in submissions {
                if local_day(&submission.created_at) != day.date {
                    continue;
                }
                for action in submission.actions() {
                    match action.normalized_priority() {
                        Some(Priority::High) => point.high += 1,
                        Some(Priority::Medium) => point.medium += 1,
                        Some(Priority::Low) => point.low += 1,
                        None => {}
                    }
                }
            }
            point
        })
        .collect()
}

/// The summary's rating histogram as labeled chart bars
#[must_use]
pub fn rating_distribution(summary: &AnalyticsSummary) -> Vec<RatingSlice> {
    summary
        .rating_distribution
        .iter()
        .map(|entry| RatingSlice {
            label: format!("{} Star", entry.rating),
            count: entry.count,
        })
        .collect()
}

/// Action counts per owning team across all submissions
///
/// Not bucketed by date. Sorted by count, descending; ties break on team
/// name so the output is deterministic.
#[must_use]
pub fn team_distribution(submissions: &[Submission]) -> Vec<TeamSlice> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for submission in submissions {
        for action in submission.actions() {
            *counts.entry(action.owner.as_str()).or_insert(0) += 1;
        }
    }

    let mut teams: Vec<TeamSlice> = counts
        .into_iter()
        .map(|(team, actions)| TeamSlice {
            team: team.to_string(),
            actions,
        })
        .collect();
    teams.sort_by(|a, b| b.actions.cmp(&a.actions).then_with(|| a.team.cmp(&b.team)));
    teams
}
