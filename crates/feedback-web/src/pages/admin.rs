//! Admin analytics dashboard
//!
//! Owns the feed signals and the tab toggle; every chart receives rows
//! already shaped by `feedback_core::analytics`.

use leptos::*;

use feedback_core::analytics::{
    priority_breakdown, rating_distribution, review_trends, team_distribution,
};
use feedback_core::utils::star_string;

use crate::components::banner::ErrorBanner;
use crate::components::cards::{EmptyState, StatCard};
use crate::components::charts::{
    PriorityChart, RatingBarChart, TeamBarChart, TrendChart, VolumeLineChart,
};
use crate::components::loading::Loading;
use crate::components::submission_list::SubmissionList;
use crate::poller::{self, FeedSignals};

/// Which analytics tab is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Trends,
}

/// Main dashboard page component
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let feed = FeedSignals::new();
    poller::start(feed);

    let active_tab = create_rw_signal(Tab::Overview);

    view! {
        <div class="dashboard">
            <div class="dashboard-head">
                <h2>"Analytics Dashboard"</h2>
                {move || {
                    feed.last_updated
                        .get()
                        .map(|at| view! { <span class="updated-at">"Updated: " {at}</span> })
                }}
            </div>

            {move || {
                feed.error
                    .get()
                    .map(|message| {
                        view! {
                            <ErrorBanner
                                message
                                on_retry=Callback::new(move |()| poller::refresh(feed))
                            />
                        }
                    })
            }}

            {move || feed.analytics.get().map(|summary| view! {
                <div class="card-grid">
                    <StatCard
                        title="Total Reviews"
                        value=summary.total_submissions.to_string()
                        hint="All time submissions"
                    />
                    <StatCard
                        title="Average Rating"
                        value=format!("{:.1}", summary.average_rating)
                        hint=star_string(average_stars(summary.average_rating))
                    />
                    <StatCard
                        title="Today"
                        value=summary.today_count.to_string()
                        hint="Submissions today"
                    />
                    <StatCard
                        title="This Week"
                        value=summary.this_week_count.to_string()
                        hint="Submissions last 7 days"
                    />
                </div>
            })}

            <div class="tabs">
                <button
                    class="tab-button"
                    class:active=move || active_tab.get() == Tab::Overview
                    on:click=move |_| active_tab.set(Tab::Overview)
                >
                    "Overview"
                </button>
                <button
                    class="tab-button"
                    class:active=move || active_tab.get() == Tab::Trends
                    on:click=move |_| active_tab.set(Tab::Trends)
                >
                    "Detailed Analytics"
                </button>
            </div>

            <Show when=move || active_tab.get() == Tab::Overview>
                {move || feed.analytics.get().map(|summary| view! {
                    <div class="chart-grid">
                        <div class="chart-card">
                            <h3>"Recent Volume"</h3>
                            <p class="chart-caption">"Daily submission count for the last 7 days."</p>
                            <VolumeLineChart data=summary.daily_volume.clone()/>
                        </div>
                        <div class="chart-card">
                            <h3>"Rating Distribution"</h3>
                            <p class="chart-caption">"Breakdown of submission ratings."</p>
                            <RatingBarChart data=rating_distribution(&summary)/>
                        </div>
                    </div>
                })}
            </Show>

            <Show when=move || active_tab.get() == Tab::Trends>
                {move || feed.analytics.get().map(|summary| {
                    let submissions = feed.submissions.get();
                    view! {
                        <div class="chart-grid">
                            <div class="chart-card">
                                <h3>"Review Trends"</h3>
                                <p class="chart-caption">"Positive vs negative reviews per day."</p>
                                <TrendChart data=review_trends(&submissions, &summary)/>
                            </div>
                            <div class="chart-card">
                                <h3>"Action Priorities"</h3>
                                <p class="chart-caption">"Recommended action priorities per day."</p>
                                <PriorityChart data=priority_breakdown(&submissions, &summary)/>
                            </div>
                            <div class="chart-card">
                                <h3>"Team Action Distribution"</h3>
                                <p class="chart-caption">"Action items assigned to each team."</p>
                                <TeamBarChart data=team_distribution(&submissions)/>
                            </div>
                        </div>
                    }
                })}
            </Show>

            <div class="list-card">
                <h3>"Recent Submissions"</h3>
                <p class="chart-caption">
                    "A list of recent reviews and their AI-generated insights."
                </p>

                <Show when=move || feed.loading.get()>
                    <Loading/>
                </Show>

                {move || {
                    (!feed.loading.get()
                        && feed.error.get().is_none()
                        && feed.submissions.with(Vec::is_empty))
                        .then(|| view! { <EmptyState/> })
                }}

                {move || view! { <SubmissionList submissions=feed.submissions.get()/> }}
            </div>
        </div>
    }
}

/// Rounded star count for the average-rating card
fn average_stars(average: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let stars = average.round().clamp(0.0, 5.0) as u8;
    stars
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_average_stars_rounds_and_clamps() {
        assert_eq!(average_stars(0.0), 0);
        assert_eq!(average_stars(3.4), 3);
        assert_eq!(average_stars(3.5), 4);
        assert_eq!(average_stars(4.9), 5);
        assert_eq!(average_stars(9.9), 5);
        assert_eq!(average_stars(-1.0), 0);
    }
}
