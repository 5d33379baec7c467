use serde::Serialize;
use vola_core::Role;
use vola_core::entities::{AssociationOwnerStats, GeneralStats};

use crate::cli::GlobalFlags;
use crate::commands::shared::access;
use crate::context::AppContext;
use crate::output::table::{TableOptions, render_record, render_table};
use crate::output::{TableView, output};
use crate::progress::with_spinner;

#[derive(Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
enum StatsResponse {
    Platform {
        #[serde(flatten)]
        stats: Box<GeneralStats>,
    },
    Association {
        #[serde(flatten)]
        stats: Box<AssociationOwnerStats>,
    },
}

impl TableView for StatsResponse {
    fn render_table(&self, options: TableOptions) -> String {
        match self {
            Self::Platform { stats } => render_platform(stats, options),
            Self::Association { stats } => render_association(stats, options),
        }
    }
}

fn gauge(value: f64) -> String {
    format!("{value:.2} / 5")
}

fn percent(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}

fn render_platform(stats: &GeneralStats, options: TableOptions) -> String {
    let distribution = &stats.user_distribution;
    let summary = render_record(
        &[
            ("total users", stats.total_users.to_string()),
            ("new this month", stats.user_growth.this_month.to_string()),
            ("new this week", stats.user_growth.this_week.to_string()),
            ("volunteers", distribution.volunteers.to_string()),
            ("association owners", distribution.association_owners.to_string()),
            ("users by role", distribution.total().to_string()),
            ("approved associations", stats.approved_associations.to_string()),
            ("pending associations", stats.pending_associations.to_string()),
            ("approval rate", format!("{:.1}%", stats.association_approval_rate)),
            ("total plans", stats.total_plans.to_string()),
            ("active plans", stats.active_plans.to_string()),
            ("total reviews", stats.total_reviews.to_string()),
            ("platform rating", gauge(stats.rating_gauge().value)),
        ],
        options,
    );

    let categories = stats
        .categories_by_count()
        .into_iter()
        .map(|c| vec![c.category_name.clone(), c.count.to_string()])
        .collect::<Vec<_>>();

    let ratings = |list: &[vola_core::entities::AssociationRating]| {
        list.iter()
            .map(|a| {
                vec![
                    a.name.clone(),
                    format!("{:.2}", a.average_rating),
                    a.total_reviews.to_string(),
                ]
            })
            .collect::<Vec<_>>()
    };

    [
        summary,
        "Plans by category".to_string(),
        render_table(&["category", "plans"], &categories, options),
        "Top rated associations".to_string(),
        render_table(&["name", "rating", "reviews"], &ratings(&stats.top_rated_associations), options),
        "Lowest rated associations".to_string(),
        render_table(
            &["name", "rating", "reviews"],
            &ratings(&stats.bottom_rated_associations),
            options,
        ),
    ]
    .join("\n\n")
}

fn render_association(stats: &AssociationOwnerStats, options: TableOptions) -> String {
    let applications = stats.applications();
    let summary = render_record(
        &[
            ("total plans", stats.total_plans.to_string()),
            ("active plans", stats.active_plans.to_string()),
            ("plans this month", stats.plans_this_month.to_string()),
            ("volunteers", stats.total_volunteers.to_string()),
            ("applications", stats.total_applications.to_string()),
            ("applications this month", stats.applications_this_month.to_string()),
            ("reviews", stats.total_reviews.to_string()),
            ("rating", gauge(stats.rating_gauge().value)),
        ],
        options,
    );

    let statuses = [
        ("accepted", applications.accepted),
        ("pending", applications.pending),
        ("rejected", applications.rejected),
    ]
    .into_iter()
    .map(|(label, count)| {
        vec![
            label.to_string(),
            count.to_string(),
            percent(applications.share(count)),
        ]
    })
    .collect::<Vec<_>>();

    let top_plans = stats
        .top_plans
        .iter()
        .map(|p| vec![p.name.clone(), p.applications.to_string()])
        .collect::<Vec<_>>();

    let activity = stats
        .timeline()
        .into_iter()
        .map(|a| {
            vec![
                a.date.format("%Y-%m-%d").to_string(),
                a.description.clone(),
            ]
        })
        .collect::<Vec<_>>();

    [
        summary,
        format!("Applications by status (total {})", applications.total),
        render_table(&["status", "count", "share"], &statuses, options),
        "Top plans".to_string(),
        render_table(&["plan", "applications"], &top_plans, options),
        "Recent activity".to_string(),
        render_table(&["date", "activity"], &activity, options),
    ]
    .join("\n\n")
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(auth) = access::admit(ctx, flags)? else {
        return Ok(());
    };
    let paths = &ctx.config.stats;

    let response = if auth.role() == Some(&Role::Admin) {
        let stats = with_spinner(
            "Loading platform stats...",
            ctx.client.general_stats(&auth, &paths.general_path),
        )
        .await
        .map_err(|error| access::api_failure(&error, "Failed to load stats", flags.verbose))?;
        StatsResponse::Platform {
            stats: Box::new(stats),
        }
    } else {
        let stats = with_spinner(
            "Loading association stats...",
            ctx.client.association_stats(&auth, &paths.association_path),
        )
        .await
        .map_err(|error| access::api_failure(&error, "Failed to load stats", flags.verbose))?;
        StatsResponse::Association {
            stats: Box::new(stats),
        }
    };

    output(&response, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn json_is_tagged_with_scope() {
        let response = StatsResponse::Association {
            stats: Box::default(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["scope"], "association");
        assert_eq!(json["totalPlans"], 0);
    }

    #[test]
    fn empty_application_breakdown_renders_zero_shares() {
        let table = render_association(&AssociationOwnerStats::default(), PLAIN);
        assert!(table.contains("Applications by status (total 0)"));
        assert!(table.contains("0%"));
    }

    #[test]
    fn platform_table_includes_rating_gauge() {
        let stats = GeneralStats {
            average_platform_rating: 4.17,
            ..GeneralStats::default()
        };
        let table = render_platform(&stats, PLAIN);
        assert!(table.contains("4.17 / 5"));
        assert!(table.contains("Plans by category"));
    }
}
