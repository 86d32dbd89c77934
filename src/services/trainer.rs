use std::path::PathBuf;
use std::sync::Arc;
use crate::errors::{LauncherError, LauncherResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::structs::command_output::CommandOutput;
use crate::structs::command_spec::CommandSpec;
use crate::structs::config::launcher_config::LauncherConfig;
use crate::traits::process_runner::ProcessRunner;

pub struct Trainer {
    runner: Arc<dyn ProcessRunner>,
    config: Arc<LauncherConfig>,
    project_dir: PathBuf,
}

impl Trainer {
    pub fn new(runner: Arc<dyn ProcessRunner>, config: Arc<LauncherConfig>, project_dir: PathBuf) -> Self {
        Self {
            runner,
            config,
            project_dir,
        }
    }

    pub fn train_command(&self) -> CommandSpec {
        CommandSpec::new(&self.config.rasa, &self.project_dir).arg("train")
    }

    /// Runs `rasa train` with captured output. Only exit code 0 counts as
    /// success.
    pub async fn train(&self) -> LauncherResult<CommandOutput> {
        log::info!("🤖 Training Rasa model...");

        let mut spinner = AnimatedLogger::new("Training Rasa model".to_string());
        spinner.start();

        let output = match self.runner.output(&self.train_command()).await {
            Ok(output) => output,
            Err(e) => {
                spinner.error("Could not start training").await;
                return Err(e);
            }
        };

        if !output.stdout.trim().is_empty() {
            log::debug!("rasa train output:\n{}", output.stdout.trim_end());
        }

        if output.success() {
            spinner.stop("Model training completed successfully").await;
            Ok(output)
        } else {
            spinner.error("Model training failed").await;
            Err(LauncherError::training_failed(output.code, &output.stderr))
        }
    }
}
