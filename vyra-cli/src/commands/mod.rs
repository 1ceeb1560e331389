mod chat;
mod config_cmd;
mod dashboard;
mod key;
mod onboard;
mod plan;
mod profile;
mod reset;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vyra::config::Config;
use vyra::services::AthleteSession;
use vyra::storage::SledStore;

pub use chat::ChatCommand;
pub use dashboard::DashboardCommand;
pub use onboard::OnboardCommand;
pub use plan::PlanArgs;
pub use profile::ProfileField;

#[derive(Parser)]
#[command(name = "vyra")]
#[command(about = "Your AI fitness coach in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "VYRA_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up your athlete profile
    Onboard(OnboardCommand),

    /// View or edit your athlete profile
    #[command(subcommand)]
    Profile(ProfileSubcommands),

    /// Show this week's training plan
    Plan(PlanArgs),

    /// Show today's workout
    Today(PlanArgs),

    /// Show weekly training statistics
    Stats(PlanArgs),

    /// Chat with your coach
    Chat(ChatCommand),

    /// Manage the OpenAI API key
    #[command(subcommand)]
    Key(KeySubcommands),

    /// Clear profile and onboarding state
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Launch interactive dashboard
    Dashboard(DashboardCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ProfileSubcommands {
    /// Show your profile
    Show,

    /// Change a single profile field
    Set {
        #[arg(value_enum)]
        field: ProfileField,

        value: String,
    },

    /// Add a sport, or change its level if already present
    AddSport {
        /// Sport name (e.g. running, crossfit)
        sport: String,

        /// beginner, moderate or advanced
        #[arg(default_value = "beginner")]
        level: String,
    },

    /// Remove a sport
    RemoveSport { sport: String },
}

#[derive(Subcommand)]
enum KeySubcommands {
    /// Store an API key (prompts when omitted)
    Set { key: Option<String> },

    /// Remove the stored API key
    Clear,

    /// Show whether an API key is stored
    Status,
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Edit configuration file
    Edit,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let config_file = match self.config {
            Some(path) => path,
            None => Config::config_file()?,
        };

        match self.command {
            Commands::Onboard(cmd) => cmd.execute().await,
            Commands::Profile(subcmd) => match subcmd {
                ProfileSubcommands::Show => profile::show_profile().await,
                ProfileSubcommands::Set { field, value } => {
                    profile::set_field(field, &value).await
                }
                ProfileSubcommands::AddSport { sport, level } => {
                    profile::add_sport(&sport, &level).await
                }
                ProfileSubcommands::RemoveSport { sport } => profile::remove_sport(&sport).await,
            },
            Commands::Plan(args) => {
                let config = Config::load_from(config_file)?;
                plan::show_plan(&config, args).await
            }
            Commands::Today(args) => {
                let config = Config::load_from(config_file)?;
                plan::show_today(&config, args).await
            }
            Commands::Stats(args) => {
                let config = Config::load_from(config_file)?;
                plan::show_stats(&config, args).await
            }
            Commands::Chat(cmd) => cmd.execute(Config::load_from(config_file)?).await,
            Commands::Key(subcmd) => match subcmd {
                KeySubcommands::Set { key } => key::set_key(key).await,
                KeySubcommands::Clear => key::clear_key().await,
                KeySubcommands::Status => key::key_status().await,
            },
            Commands::Reset { force } => reset::reset(force).await,
            Commands::Dashboard(cmd) => cmd.execute(Config::load_from(config_file)?).await,
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(&config_file).await,
                ConfigSubcommands::Edit => config_cmd::edit_config(&config_file).await,
                ConfigSubcommands::Init { force } => {
                    config_cmd::init_config(&config_file, force).await
                }
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Open the athlete session stored in the local database
pub(crate) fn open_session() -> Result<AthleteSession<SledStore>> {
    Ok(AthleteSession::open(SledStore::init()?))
}

/// Print a hint and return false when the athlete has not onboarded yet
pub(crate) fn ensure_onboarded(session: &AthleteSession<SledStore>) -> bool {
    if session.is_onboarded() {
        return true;
    }

    println!("You haven't set up your profile yet.");
    println!();
    println!("Use 'vyra onboard' to get started.");
    false
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plan_with_date_and_seed() {
        let cli = Cli::try_parse_from(["vyra", "plan", "--date", "2024-05-15", "--seed", "7"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_parse_profile_set() {
        let cli = Cli::try_parse_from(["vyra", "profile", "set", "first-name", "Sam"]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["vyra", "profile", "set", "shoe-size", "44"]);
        assert!(cli.is_err());
    }
}
