use clap::{Args, Subcommand};

/// Plan commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlanCommands {
    /// List plans, one page at a time.
    List(PlanListArgs),
    /// Show every field of one plan.
    Get(PlanGetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PlanListArgs {
    /// Page to show, starting at 1.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

#[derive(Clone, Debug, Args)]
pub struct PlanGetArgs {
    pub id: String,
}
