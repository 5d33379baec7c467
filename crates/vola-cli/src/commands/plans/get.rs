use serde::Serialize;
use vola_core::entities::Plan;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::plans::PlanGetArgs;
use crate::commands::shared::access;
use crate::context::AppContext;
use crate::output::table::{TableOptions, render_record};
use crate::output::{TableView, cell, output, yes_no};
use crate::progress::with_spinner;

const NOT_FOUND: &str = "Plan not found.";

#[derive(Serialize)]
#[serde(untagged)]
enum PlanDetailResponse {
    Found(Box<Plan>),
    Missing { found: bool, message: &'static str },
}

const TIMESTAMP: &str = "%Y-%m-%d %H:%M UTC";

impl TableView for PlanDetailResponse {
    fn render_table(&self, options: TableOptions) -> String {
        let plan = match self {
            Self::Found(plan) => plan,
            Self::Missing { message, .. } => return (*message).to_string(),
        };
        render_record(
            &[
                ("id", plan.id.clone()),
                ("name", plan.name.clone()),
                ("description", plan.description.clone()),
                ("start date", plan.start_date.format(TIMESTAMP).to_string()),
                ("end date", plan.end_date.format(TIMESTAMP).to_string()),
                ("volunteers", plan.volunteer_number.to_string()),
                ("destination id", cell(plan.destination_id.as_deref())),
                ("category id", cell(plan.category_id.as_deref())),
                ("association id", cell(plan.association_id.as_deref())),
                ("active", yes_no(plan.is_active)),
                ("created at", plan.created_at.format(TIMESTAMP).to_string()),
                ("updated at", plan.updated_at.format(TIMESTAMP).to_string()),
            ],
            options,
        )
    }
}

impl From<Option<Plan>> for PlanDetailResponse {
    fn from(plan: Option<Plan>) -> Self {
        plan.map_or(
            Self::Missing {
                found: false,
                message: NOT_FOUND,
            },
            |plan| Self::Found(Box::new(plan)),
        )
    }
}

pub async fn handle(args: &PlanGetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(auth) = access::admit(ctx, flags)? else {
        return Ok(());
    };

    let plan = with_spinner("Loading plan...", ctx.client.get_plan(&auth, &args.id))
        .await
        .map_err(|error| access::api_failure(&error, "Failed to fetch plan", flags.verbose))?;

    output(&PlanDetailResponse::from(plan), flags.format)
}
