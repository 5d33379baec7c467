use clap::{Args, Subcommand, ValueEnum};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(AuthLoginArgs),
    /// Register a new association owner account.
    Signup(AuthSignupArgs),
    /// Clear the stored session.
    Logout,
    /// Show the stored session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Password; read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
    /// Sign in again even when a session is stored.
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub email: String,
    /// Password; read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub age: u32,
    #[arg(long, value_enum)]
    pub gender: GenderArg,
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub city: String,
    /// URL of the profile picture.
    #[arg(long)]
    pub profile_picture: Option<String>,
    #[arg(long)]
    pub association_name: String,
    #[arg(long)]
    pub association_description: String,
    #[arg(long)]
    pub force: bool,
}
