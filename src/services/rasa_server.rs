use std::path::{Path, PathBuf};
use std::sync::Arc;
use crate::config::constants::{SERVER_CORS, SERVER_HOST, SERVER_PORT};
use crate::enums::serve_outcome::ServeOutcome;
use crate::errors::LauncherResult;
use crate::structs::command_spec::CommandSpec;
use crate::structs::config::launcher_config::LauncherConfig;
use crate::structs::credentials::Credentials;
use crate::traits::process_runner::ProcessRunner;

/// Writes the REST channel credentials and runs the Rasa HTTP server in the
/// foreground.
pub struct RasaServer {
    runner: Arc<dyn ProcessRunner>,
    config: Arc<LauncherConfig>,
    project_dir: PathBuf,
}

impl RasaServer {
    pub fn new(runner: Arc<dyn ProcessRunner>, config: Arc<LauncherConfig>, project_dir: PathBuf) -> Self {
        Self {
            runner,
            config,
            project_dir,
        }
    }

    /// Arguments passed to `rasa`. These never depend on configuration.
    pub fn server_args() -> Vec<String> {
        let port = SERVER_PORT.to_string();
        ["run", "--enable-api", "--cors", SERVER_CORS, "--port", port.as_str(), "--host", SERVER_HOST, "--debug"]
            .iter()
            .map(|a| a.to_string())
            .collect()
    }

    pub fn server_command(&self) -> CommandSpec {
        CommandSpec::new(&self.config.rasa, &self.project_dir).args(Self::server_args())
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.project_dir.join(&self.config.credentials_file)
    }

    pub fn write_credentials(&self) -> LauncherResult<PathBuf> {
        let path = self.credentials_path();
        Credentials::default().write_to(&path)?;
        log::info!("📝 Wrote REST credentials to {}", Self::display_name(&path));
        Ok(path)
    }

    pub async fn serve(&self) -> LauncherResult<ServeOutcome> {
        log::info!("🚀 Starting Rasa server...");
        self.write_credentials()?;

        let command = self.server_command();
        log::info!("Starting server with command: {}", command);

        let outcome = self.runner.serve(&command).await?;
        match outcome {
            ServeOutcome::Interrupted => log::info!("👋 Server stopped by user"),
            ServeOutcome::Exited(Some(0)) => log::info!("Rasa server exited"),
            ServeOutcome::Exited(Some(code)) => log::warn!("⚠️ Rasa server exited with code {}", code),
            ServeOutcome::Exited(None) => log::warn!("⚠️ Rasa server was terminated by a signal"),
        }

        Ok(outcome)
    }

    fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
