use std::process::ExitCode;
use std::sync::Arc;
use clap::Parser;
use env_logger::Env;
use rasa_launcher::errors::ErrorHandler;
use rasa_launcher::services::system_process_runner::SystemProcessRunner;
use rasa_launcher::structs::cli::Cli;
use rasa_launcher::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let mut runner = CommandRunner::new(Arc::new(SystemProcessRunner::new()), cli.project_dir.clone(), cli.config.clone());
    let result = runner.run_command(cli.selected_command()).await;

    ExitCode::from(ErrorHandler::exit_status(&result))
}
