use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vitrine", bin_name = "vitrine", version)]
#[command(
    about = "Edit the portfolio, services, team and copy of the agency site",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the site data (overrides VITRINE_HOME)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in to the dashboard
    Login {
        /// Account e-mail (e.g. admin@example.com)
        email: String,

        /// Password
        password: String,
    },

    /// Sign out
    Logout,

    /// Show who is signed in
    Whoami,

    /// Count portfolio items, services and team members
    Overview,

    /// Manage portfolio items
    #[command(subcommand)]
    Portfolio(PortfolioCommands),

    /// Manage services
    #[command(subcommand)]
    Services(ServiceCommands),

    /// Manage team members
    #[command(subcommand)]
    Team(TeamCommands),

    /// Show or replace landing page sections
    #[command(subcommand)]
    Content(ContentCommands),

    /// Show or change site settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (login-delay-ms, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PortfolioCommands {
    /// List portfolio items
    #[command(alias = "ls")]
    List,

    /// Show one portfolio item
    Show { id: String },

    /// Add a portfolio item
    Add(PortfolioFields),

    /// Change fields of a portfolio item
    Update {
        id: String,

        #[command(flatten)]
        fields: PortfolioFields,
    },

    /// Delete a portfolio item
    #[command(alias = "rm")]
    Delete { id: String },
}

#[derive(Args, Debug, Default)]
pub struct PortfolioFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,

    /// The challenge (empty string clears it)
    #[arg(long)]
    pub desafio: Option<String>,

    /// The solution (empty string clears it)
    #[arg(long)]
    pub solucao: Option<String>,

    /// The results (empty string clears it)
    #[arg(long)]
    pub resultados: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    /// List services
    #[command(alias = "ls")]
    List,

    /// Show one service
    Show { id: String },

    /// Add a service
    Add(ServiceFields),

    /// Change fields of a service
    Update {
        id: String,

        #[command(flatten)]
        fields: ServiceFields,
    },

    /// Delete a service
    #[command(alias = "rm")]
    Delete { id: String },
}

#[derive(Args, Debug, Default)]
pub struct ServiceFields {
    /// Inline SVG markup
    #[arg(long, conflicts_with = "icon_file")]
    pub icon: Option<String>,

    /// Read the SVG icon from a file
    #[arg(long, value_name = "PATH")]
    pub icon_file: Option<PathBuf>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List team members
    #[command(alias = "ls")]
    List,

    /// Show one team member
    Show { id: String },

    /// Add a team member
    Add(TeamFields),

    /// Change fields of a team member
    Update {
        id: String,

        #[command(flatten)]
        fields: TeamFields,
    },

    /// Delete a team member
    #[command(alias = "rm")]
    Delete { id: String },
}

#[derive(Args, Debug, Default)]
pub struct TeamFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,

    /// LinkedIn profile (empty string clears it)
    #[arg(long, value_name = "URL")]
    pub linkedin: Option<String>,

    /// Twitter profile (empty string clears it)
    #[arg(long, value_name = "URL")]
    pub twitter: Option<String>,

    /// GitHub profile (empty string clears it)
    #[arg(long, value_name = "URL")]
    pub github: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ContentCommands {
    /// Print the whole document, or one section
    Show {
        /// hero, techStack, about or process
        section: Option<String>,
    },

    /// Replace one section with a JSON payload
    Set {
        /// hero, techStack, about or process
        section: String,

        /// JSON file with the full section, or - for stdin
        source: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Print the site settings
    Show,

    /// Change site settings
    Set {
        #[arg(long)]
        site_name: Option<String>,

        /// WhatsApp number, digits only
        #[arg(long)]
        whatsapp: Option<String>,

        /// Accent color as #rrggbb
        #[arg(long)]
        accent: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vitrine",
            "portfolio",
            "list",
            "-vv",
            "--data-dir",
            "/tmp/x",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Commands::Portfolio(PortfolioCommands::List)));
    }

    #[test]
    fn update_takes_id_and_optional_fields() {
        let cli = Cli::try_parse_from([
            "vitrine", "team", "update", "abc", "--role", "CTO", "--twitter", "",
        ])
        .unwrap();
        match cli.command {
            Commands::Team(TeamCommands::Update { id, fields }) => {
                assert_eq!(id, "abc");
                assert_eq!(fields.role.as_deref(), Some("CTO"));
                assert_eq!(fields.twitter.as_deref(), Some(""));
                assert!(fields.name.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn icon_and_icon_file_conflict() {
        let parsed = Cli::try_parse_from([
            "vitrine",
            "services",
            "add",
            "--icon",
            "<svg></svg>",
            "--icon-file",
            "icon.svg",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn login_needs_both_arguments() {
        assert!(Cli::try_parse_from(["vitrine", "login", "admin@example.com"]).is_err());
        assert!(Cli::try_parse_from(["vitrine", "login", "admin@example.com", "pw"]).is_ok());
    }

    #[test]
    fn config_key_and_value_are_optional() {
        let cli = Cli::try_parse_from(["vitrine", "config"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                key: None,
                value: None
            }
        ));
    }
}
