use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Check, train, then serve (the default)
    Start,
    /// Check dependencies and the spaCy model only
    Check,
    /// Check dependencies and train the model
    Train,
    /// Check dependencies and serve the last trained model
    Serve,
    /// Write a sample rasa-launcher.toml into the project directory
    Init,
    /// Load and validate the launcher configuration
    Validate,
}

impl Commands {
    /// Whether the command operates on a Rasa project and so needs domain.yml.
    pub fn requires_project(&self) -> bool {
        !matches!(self, Commands::Init | Commands::Validate)
    }
}
