use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{AuthCommands, PlanCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign up, and inspect the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Dashboard home: who is signed in and where to go.
    Dashboard,
    /// Volunteering plans.
    Plans {
        #[command(subcommand)]
        action: PlanCommands,
    },
    /// Statistics for the signed-in role.
    Stats,
    /// Print the JSON schema of a request or resource type.
    Schema(SchemaArgs),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Plan,
    LoginRequest,
    RegisterRequest,
    GeneralStats,
    AssociationStats,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to describe.
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
