use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `vola` binary.
#[derive(Debug, Parser)]
#[command(name = "vola", version, about = "Vola - admin console for the volunteering platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max rows per page
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colorize table output
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Show a spinner while requests are in flight
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AuthCommands, PlanCommands};
    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "vola", "--format", "table", "--limit", "25", "--verbose", "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(25));
        assert!(cli.verbose);
        assert!(cli.global_flags().verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["vola", "stats", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["vola", "--format", "xml", "dashboard"]).is_err());
    }

    #[test]
    fn color_defaults_to_auto() {
        let cli = Cli::try_parse_from(["vola", "dashboard"]).unwrap();
        assert_eq!(cli.global_flags().color, ColorMode::Auto);
        assert_eq!(cli.global_flags().format, OutputFormat::Json);
    }

    #[test]
    fn plans_list_takes_page() {
        let cli = Cli::try_parse_from(["vola", "plans", "list", "--page", "3", "-l", "5"]).unwrap();
        let Commands::Plans { action: PlanCommands::List(args) } = cli.command else {
            panic!("expected plans list");
        };
        assert_eq!(args.page, 3);
        assert_eq!(cli.limit, Some(5));
    }

    #[test]
    fn plans_page_must_be_positive() {
        assert!(Cli::try_parse_from(["vola", "plans", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn login_takes_email_and_force() {
        let cli = Cli::try_parse_from([
            "vola", "auth", "login", "--email", "a@b.org", "--force",
        ])
        .unwrap();
        let Commands::Auth { action: AuthCommands::Login(args) } = cli.command else {
            panic!("expected auth login");
        };
        assert_eq!(args.email, "a@b.org");
        assert!(args.force);
        assert!(args.password.is_none());
    }

    #[test]
    fn signup_requires_association_details() {
        let missing = Cli::try_parse_from([
            "vola", "auth", "signup", "--email", "o@b.org", "--name", "Owner",
        ]);
        assert!(missing.is_err());
    }
}
