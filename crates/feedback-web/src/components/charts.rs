//! Chart components for the admin dashboard
//!
//! Line charts are plain SVG; categorical breakdowns are proportional bar
//! rows. All components take pre-shaped rows from `feedback_core::analytics`
//! and hold no state.

use feedback_core::analytics::{PriorityPoint, RatingSlice, TeamSlice, TrendPoint};
use feedback_core::types::DailyVolume;
use feedback_core::utils::weekday_abbrev;
use leptos::*;

pub(crate) const CHART_WIDTH: f64 = 600.0;
pub(crate) const CHART_HEIGHT: f64 = 220.0;
pub(crate) const CHART_PADDING: f64 = 24.0;

/// Horizontal pixel position of point `index` out of `len` evenly spaced
pub(crate) fn x_at(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return CHART_WIDTH / 2.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let fraction = index as f64 / (len - 1) as f64;
    CHART_PADDING + fraction * (CHART_WIDTH - 2.0 * CHART_PADDING)
}

/// Vertical pixel position for `value` on a 0..=`max` axis
pub(crate) fn y_at(value: u64, max: u64) -> f64 {
    let floor = CHART_HEIGHT - CHART_PADDING;
    if max == 0 {
        return floor;
    }
    #[allow(clippy::cast_precision_loss)]
    let fraction = value as f64 / max as f64;
    floor - fraction * (CHART_HEIGHT - 2.0 * CHART_PADDING)
}

/// SVG polyline `points` attribute for a value series
pub(crate) fn polyline_points(values: &[u64], max: u64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| format!("{:.1},{:.1}", x_at(i, values.len()), y_at(*value, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bar length as a percentage of the largest value
pub(crate) fn bar_percent(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = value as f64 / max as f64 * 100.0;
    pct
}

/// Color class for a team bar, matched by exact team name
pub(crate) fn team_color_class(team: &str) -> &'static str {
    match team {
        "Support Team" => "team-support",
        "Product Team" => "team-product",
        "Operations" => "team-operations",
        "Engineering" => "team-engineering",
        "Marketing" => "team-marketing",
        _ => "team-default",
    }
}

/// Daily submission volume as a line chart
#[component]
pub fn VolumeLineChart(
    /// Daily volume buckets from the analytics summary
    data: Vec<DailyVolume>,
) -> impl IntoView {
    let max = data.iter().map(|d| d.count).max().unwrap_or(0);
    let counts: Vec<u64> = data.iter().map(|d| d.count).collect();
    let points = polyline_points(&counts, max);
    let len = data.len();

    view! {
        <svg class="chart" viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")>
            <polyline class="chart-line line-primary" points=points fill="none"/>
            {data
                .into_iter()
                .enumerate()
                .map(|(i, day)| {
                    let x = x_at(i, len);
                    view! {
                        <circle
                            class="chart-dot"
                            cx=format!("{x:.1}")
                            cy=format!("{:.1}", y_at(day.count, max))
                            r="4"
                        ></circle>
                        <text
                            class="chart-label"
                            x=format!("{x:.1}")
                            y=format!("{:.1}", CHART_HEIGHT - 6.0)
                            text-anchor="middle"
                        >
                            {weekday_abbrev(&day.date)}
                        </text>
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Positive vs negative reviews per day, as two lines over the daily total
#[component]
pub fn TrendChart(
    /// Trend rows from [`feedback_core::analytics::review_trends`]
    data: Vec<TrendPoint>,
) -> impl IntoView {
    let max = data
        .iter()
        .map(|p| p.total.max(p.positive).max(p.negative))
        .max()
        .unwrap_or(0);
    let len = data.len();

    let series = |values: Vec<u64>| polyline_points(&values, max);
    let totals = series(data.iter().map(|p| p.total).collect());
    let positives = series(data.iter().map(|p| p.positive).collect());
    let negatives = series(data.iter().map(|p| p.negative).collect());

    view! {
        <div class="trend-chart">
            <svg class="chart" viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")>
                <polyline class="chart-line line-total" points=totals fill="none"/>
                <polyline class="chart-line line-positive" points=positives fill="none"/>
                <polyline class="chart-line line-negative" points=negatives fill="none"/>
                {data
                    .into_iter()
                    .enumerate()
                    .map(|(i, point)| {
                        view! {
                            <text
                                class="chart-label"
                                x=format!("{:.1}", x_at(i, len))
                                y=format!("{:.1}", CHART_HEIGHT - 6.0)
                                text-anchor="middle"
                            >
                                {weekday_abbrev(&point.date)}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
            <div class="chart-legend">
                <span class="legend-item legend-positive">"Positive (4-5★)"</span>
                <span class="legend-item legend-negative">"Negative (1-2★)"</span>
                <span class="legend-item legend-total">"Total"</span>
            </div>
        </div>
    }
}

/// Rating histogram as horizontal bars
#[component]
pub fn RatingBarChart(
    /// Histogram rows from [`feedback_core::analytics::rating_distribution`]
    data: Vec<RatingSlice>,
) -> impl IntoView {
    let max = data.iter().map(|slice| slice.count).max().unwrap_or(0);

    view! {
        <div class="bar-chart">
            {data
                .into_iter()
                .map(|slice| {
                    view! {
                        <div class="bar-row">
                            <span class="bar-label">{slice.label.clone()}</span>
                            <div class="bar-track">
                                <div
                                    class="bar-fill bar-primary"
                                    style:width=format!("{:.1}%", bar_percent(slice.count, max))
                                ></div>
                            </div>
                            <span class="bar-value">{slice.count}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Recommended-action priorities per day, as stacked segments
#[component]
pub fn PriorityChart(
    /// Priority rows from [`feedback_core::analytics::priority_breakdown`]
    data: Vec<PriorityPoint>,
) -> impl IntoView {
    let max = data
        .iter()
        .map(|p| p.high + p.medium + p.low)
        .max()
        .unwrap_or(0);

    view! {
        <div class="bar-chart priority-chart">
            {data
                .into_iter()
                .map(|point| {
                    view! {
                        <div class="bar-row">
                            <span class="bar-label">{weekday_abbrev(&point.date)}</span>
                            <div class="bar-track">
                                <div
                                    class="bar-fill seg-high"
                                    style:width=format!("{:.1}%", bar_percent(point.high, max))
                                    title=format!("high: {}", point.high)
                                ></div>
                                <div
                                    class="bar-fill seg-medium"
                                    style:width=format!("{:.1}%", bar_percent(point.medium, max))
                                    title=format!("medium: {}", point.medium)
                                ></div>
                                <div
                                    class="bar-fill seg-low"
                                    style:width=format!("{:.1}%", bar_percent(point.low, max))
                                    title=format!("low: {}", point.low)
                                ></div>
                            </div>
                            <span class="bar-value">{point.high + point.medium + point.low}</span>
                        </div>
                    }
                })
                .collect_view()}
            <div class="chart-legend">
                <span class="legend-item legend-high">"High"</span>
                <span class="legend-item legend-medium">"Medium"</span>
                <span class="legend-item legend-low">"Low"</span>
            </div>
        </div>
    }
}

/// Action counts per owning team, colored by the fixed palette
#[component]
pub fn TeamBarChart(
    /// Team rows from [`feedback_core::analytics::team_distribution`]
    data: Vec<TeamSlice>,
) -> impl IntoView {
    let max = data.iter().map(|slice| slice.actions).max().unwrap_or(0);

    view! {
        <div class="bar-chart team-chart">
            {data
                .into_iter()
                .map(|slice| {
                    let color = team_color_class(&slice.team);
                    view! {
                        <div class="bar-row">
                            <span class="bar-label">{slice.team.clone()}</span>
                            <div class="bar-track">
                                <div
                                    class=format!("bar-fill {color}")
                                    style:width=format!("{:.1}%", bar_percent(slice.actions, max))
                                ></div>
                            </div>
                            <span class="bar-value">{slice.actions}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_x_positions_span_the_padded_width() {
        assert!((x_at(0, 8) - CHART_PADDING).abs() < f64::EPSILON);
        assert!((x_at(7, 8) - (CHART_WIDTH - CHART_PADDING)).abs() < f64::EPSILON);
        // A single point sits in the middle
        assert!((x_at(0, 1) - CHART_WIDTH / 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_y_positions_grow_downward() {
        let floor = CHART_HEIGHT - CHART_PADDING;
        assert!((y_at(0, 10) - floor).abs() < f64::EPSILON);
        assert!((y_at(10, 10) - CHART_PADDING).abs() < f64::EPSILON);
        assert!(y_at(5, 10) < floor);
        // Degenerate axis pins everything to the floor
        assert!((y_at(0, 0) - floor).abs() < f64::EPSILON);
    }

    #[test]
    fn test_polyline_points_shape() {
        let points = polyline_points(&[0, 5, 10], 10);
        let pairs: Vec<&str> = points.split(' ').collect();

        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|p| p.contains(',')));
    }

    #[test]
    fn test_polyline_points_empty_series() {
        assert_eq!(polyline_points(&[], 0), "");
    }

    #[test]
    fn test_bar_percent() {
        assert!((bar_percent(5, 10) - 50.0).abs() < f64::EPSILON);
        assert!((bar_percent(10, 10) - 100.0).abs() < f64::EPSILON);
        assert!((bar_percent(0, 10) - 0.0).abs() < f64::EPSILON);
        assert!((bar_percent(3, 0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_team_palette_matches_exact_names_only() {
        assert_eq!(team_color_class("Support Team"), "team-support");
        assert_eq!(team_color_class("Engineering"), "team-engineering");
        // Matching is by exact string, not normalized
        assert_eq!(team_color_class("support team"), "team-default");
        assert_eq!(team_color_class("Support"), "team-default");
        assert_eq!(team_color_class(""), "team-default");
    }
}
