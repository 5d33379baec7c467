//! Statistics payloads for the two dashboard audiences.
//!
//! Admins see platform-wide figures ([`GeneralStats`]); association owners
//! see figures scoped to their association ([`AssociationOwnerStats`]).
//! Derived values used by the views (totals, gauges) are computed here so
//! every renderer agrees on them.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound of the platform rating scale.
pub const RATING_SCALE_MAX: f64 = 5.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserGrowth {
    pub this_month: u64,
    pub this_week: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDistribution {
    pub volunteers: u64,
    pub association_owners: u64,
}

impl UserDistribution {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.volunteers + self.association_owners
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category_name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssociationRating {
    pub id: String,
    pub name: String,
    pub average_rating: f64,
    pub total_reviews: u64,
}

/// A value on a bounded scale, e.g. 4.17 out of 5.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RatingGauge {
    pub value: f64,
    pub max: f64,
}

impl RatingGauge {
    #[must_use]
    pub fn out_of_five(value: f64) -> Self {
        Self {
            value: value.clamp(0.0, RATING_SCALE_MAX),
            max: RATING_SCALE_MAX,
        }
    }

    /// Fill ratio in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.value / self.max
    }
}

/// Platform-wide statistics shown to admins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralStats {
    pub total_users: u64,
    pub user_growth: UserGrowth,
    pub user_distribution: UserDistribution,
    pub pending_associations: u64,
    pub approved_associations: u64,
    pub association_approval_rate: f64,
    pub total_plans: u64,
    pub active_plans: u64,
    pub plans_by_category: Vec<CategoryCount>,
    pub top_rated_associations: Vec<AssociationRating>,
    pub bottom_rated_associations: Vec<AssociationRating>,
    pub total_reviews: u64,
    pub average_platform_rating: f64,
}

impl GeneralStats {
    #[must_use]
    pub fn rating_gauge(&self) -> RatingGauge {
        RatingGauge::out_of_five(self.average_platform_rating)
    }

    /// Categories ordered by descending plan count, ties by name.
    #[must_use]
    pub fn categories_by_count(&self) -> Vec<&CategoryCount> {
        let mut categories = self.plans_by_category.iter().collect::<Vec<_>>();
        categories.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });
        categories
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopPlan {
    pub id: String,
    pub name: String,
    pub applications: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ReviewReceived,
    ApplicationReceived,
    PlanCreated,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub date: DateTime<Utc>,
}

/// Application counts by review status.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct ApplicationBreakdown {
    pub accepted: u64,
    pub pending: u64,
    pub rejected: u64,
    pub total: u64,
}

impl ApplicationBreakdown {
    /// Share of `count` in the breakdown. An empty breakdown divides by one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self, count: u64) -> f64 {
        count as f64 / self.total.max(1) as f64
    }
}

/// Statistics scoped to one association, shown to its owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AssociationOwnerStats {
    pub total_plans: u64,
    pub active_plans: u64,
    pub total_applications: u64,
    pub pending_applications: u64,
    pub accepted_applications: u64,
    pub rejected_applications: u64,
    pub total_reviews: u64,
    pub average_rating: f64,
    pub total_volunteers: u64,
    pub plans_this_month: u64,
    pub applications_this_month: u64,
    pub top_plans: Vec<TopPlan>,
    pub recent_activity: Vec<Activity>,
}

impl AssociationOwnerStats {
    #[must_use]
    pub const fn applications(&self) -> ApplicationBreakdown {
        ApplicationBreakdown {
            accepted: self.accepted_applications,
            pending: self.pending_applications,
            rejected: self.rejected_applications,
            total: self.accepted_applications
                + self.pending_applications
                + self.rejected_applications,
        }
    }

    #[must_use]
    pub fn rating_gauge(&self) -> RatingGauge {
        RatingGauge::out_of_five(self.average_rating)
    }

    /// Recent activity, newest first.
    #[must_use]
    pub fn timeline(&self) -> Vec<&Activity> {
        let mut items = self.recent_activity.iter().collect::<Vec<_>>();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn general_stats_parse_and_derive() {
        let stats: GeneralStats = serde_json::from_str(
            r#"{
                "totalUsers": 19,
                "userGrowth": {"thisMonth": 19, "thisWeek": 4},
                "userDistribution": {"volunteers": 5, "associationOwners": 12},
                "plansByCategory": [
                    {"categoryName": "Health", "count": 1},
                    {"categoryName": "Environment", "count": 3},
                    {"categoryName": "Education", "count": 1}
                ],
                "averagePlatformRating": 4.17
            }"#,
        )
        .unwrap();

        assert_eq!(stats.user_distribution.total(), 17);
        assert_eq!(stats.rating_gauge().max, 5.0);
        let names = stats
            .categories_by_count()
            .iter()
            .map(|c| c.category_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Environment", "Education", "Health"]);
        assert_eq!(stats.total_plans, 0, "missing fields default");
    }

    #[test]
    fn rating_gauge_clamps_to_scale() {
        assert_eq!(RatingGauge::out_of_five(7.0).value, 5.0);
        assert_eq!(RatingGauge::out_of_five(-1.0).value, 0.0);
        assert!((RatingGauge::out_of_five(2.5).ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_breakdown_share_does_not_divide_by_zero() {
        let stats = AssociationOwnerStats::default();
        let breakdown = stats.applications();
        assert_eq!(breakdown.total, 0);
        assert!(breakdown.share(0).abs() < f64::EPSILON);
    }

    #[test]
    fn owner_timeline_is_newest_first_and_tolerates_unknown_kinds() {
        let stats: AssociationOwnerStats = serde_json::from_str(
            r#"{
                "acceptedApplications": 1,
                "pendingApplications": 2,
                "recentActivity": [
                    {"type": "plan_created", "description": "New plan", "date": "2025-06-30T23:49:35.439Z"},
                    {"type": "review_received", "description": "4.5/5", "date": "2025-06-30T23:49:39.655Z"},
                    {"type": "plan_archived", "description": "Archived", "date": "2025-06-29T10:00:00Z"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(stats.applications().total, 3);
        let kinds = stats.timeline().iter().map(|a| a.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                ActivityKind::ReviewReceived,
                ActivityKind::PlanCreated,
                ActivityKind::Unknown
            ]
        );
    }
}
