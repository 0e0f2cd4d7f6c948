mod appointments;
mod coaches;
mod config_cmd;
mod contact;
mod feedback;
mod login;
mod profile;
mod render;
mod schedule;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use feedback::FeedbackCommand;
pub use login::LoginCommand;
pub use profile::ProfileCommand;
pub use schedule::{RescheduleCommand, ScheduleCommand};

#[derive(Parser)]
#[command(name = "wecare")]
#[command(about = "Terminal client for the WeCare life-coaching platform", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Login to WeCare
    Login(LoginCommand),

    /// Browse coaches
    #[command(subcommand)]
    Coaches(CoachesSubcommands),

    /// Book an appointment
    Schedule(ScheduleCommand),

    /// Reschedule your appointment
    Reschedule(RescheduleCommand),

    /// Show your appointments
    Appointments,

    /// Show your profile, or a coach's
    Profile(ProfileCommand),

    /// Cancel your appointment
    Cancel {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Submit feedback
    Feedback(FeedbackCommand),

    /// Show contact information
    Contact,

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
enum CoachesSubcommands {
    /// List available coaches
    List {
        /// Filter by specialty
        #[arg(short, long)]
        specialty: Option<String>,
    },

    /// Show coach details
    Show {
        /// Coach ID
        id: String,
    },
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
            tracing::info!("Verbose mode enabled");
        }

        match self.command {
            Commands::Login(cmd) => cmd.execute().await,
            Commands::Coaches(subcmd) => match subcmd {
                CoachesSubcommands::List { specialty } => coaches::list_coaches(specialty).await,
                CoachesSubcommands::Show { id } => coaches::show_coach(&id).await,
            },
            Commands::Schedule(cmd) => cmd.execute().await,
            Commands::Reschedule(cmd) => cmd.execute().await,
            Commands::Appointments => appointments::show_appointments().await,
            Commands::Profile(cmd) => cmd.execute().await,
            Commands::Cancel { force } => appointments::cancel_appointment(force).await,
            Commands::Feedback(cmd) => cmd.execute().await,
            Commands::Contact => contact::show_contact().await,
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config().await,
                ConfigSubcommands::Edit => config_cmd::edit_config().await,
                ConfigSubcommands::Init { force } => config_cmd::init_config(force).await,
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
