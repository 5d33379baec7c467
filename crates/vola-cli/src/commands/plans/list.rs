use serde::Serialize;
use vola_core::Role;
use vola_core::entities::{Plan, PlanAction};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::plans::PlanListArgs;
use crate::commands::shared::access;
use crate::context::AppContext;
use crate::output::table::{TableOptions, render_table};
use crate::output::{TableView, output, yes_no};
use crate::progress::with_spinner;

#[derive(Serialize)]
struct PlanRow {
    id: String,
    name: String,
    start_date: String,
    is_active: bool,
}

#[derive(Serialize)]
struct PlanListResponse {
    page: u32,
    total_pages: u32,
    total: usize,
    can_add: bool,
    actions: Vec<&'static str>,
    plans: Vec<PlanRow>,
}

impl TableView for PlanListResponse {
    fn render_table(&self, options: TableOptions) -> String {
        if self.total == 0 {
            return "No plans found.".to_string();
        }
        let actions = self.actions.join(", ");
        let rows = self
            .plans
            .iter()
            .map(|plan| {
                vec![
                    plan.name.clone(),
                    plan.start_date.clone(),
                    yes_no(plan.is_active),
                    actions.clone(),
                    plan.id.clone(),
                ]
            })
            .collect::<Vec<_>>();
        let mut out = render_table(&["name", "start date", "active", "actions", "id"], &rows, options);
        out.push_str(&format!(
            "\n\nPage {} of {} ({} plans)",
            self.page, self.total_pages, self.total
        ));
        if self.can_add {
            out.push_str("\nAdd Plan: available to association owners");
        }
        out
    }
}

/// One page of plans. Pages past the end are clamped to the last page.
fn paginate(plans: &[Plan], page: u32, limit: u32) -> (u32, u32, &[Plan]) {
    let limit = limit.max(1) as usize;
    let total_pages = u32::try_from(plans.len().div_ceil(limit)).unwrap_or(u32::MAX).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page as usize - 1) * limit;
    let end = (start + limit).min(plans.len());
    (page, total_pages, plans.get(start..end).unwrap_or_default())
}

fn build_response(plans: &[Plan], role: Option<&Role>, page: u32, limit: u32) -> PlanListResponse {
    let (page, total_pages, slice) = paginate(plans, page, limit);
    PlanListResponse {
        page,
        total_pages,
        total: plans.len(),
        can_add: role.is_some_and(Role::manages_plans),
        actions: PlanAction::available_for(role)
            .into_iter()
            .map(PlanAction::as_str)
            .collect(),
        plans: slice
            .iter()
            .map(|plan| PlanRow {
                id: plan.id.clone(),
                name: plan.name.clone(),
                start_date: plan.start_date.format("%Y-%m-%d").to_string(),
                is_active: plan.is_active,
            })
            .collect(),
    }
}

pub async fn handle(args: &PlanListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(auth) = access::admit(ctx, flags)? else {
        return Ok(());
    };

    let plans = with_spinner("Loading plans...", ctx.client.list_plans(&auth))
        .await
        .map_err(|error| access::api_failure(&error, "Failed to fetch plans", flags.verbose))?;

    let response = build_response(&plans, auth.role(), args.page, ctx.page_limit(flags.limit));
    output(&response, flags.format)
}
