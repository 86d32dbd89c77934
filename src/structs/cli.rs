use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "rasa-launcher", version)]
#[clap(about = "Checks dependencies, trains and serves a Rasa assistant", long_about = None)]
pub struct Cli {
    /// Rasa project directory (must contain domain.yml)
    #[clap(short = 'd', long, default_value = ".", global = true)]
    pub project_dir: PathBuf,

    /// Launcher config file (defaults to ./rasa-launcher.toml, then ~/rasa-launcher/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Start)
    }
}
