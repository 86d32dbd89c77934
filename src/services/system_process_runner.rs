use std::process::Stdio;
use std::time::Duration;
use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use crate::config::constants::SERVER_SHUTDOWN_GRACE_PERIOD_SECS;
use crate::enums::serve_outcome::ServeOutcome;
use crate::errors::{LauncherError, LauncherResult};
use crate::structs::command_output::CommandOutput;
use crate::structs::command_spec::CommandSpec;
use crate::traits::process_runner::ProcessRunner;

/// Runs commands as real child processes on the tokio runtime.
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args).current_dir(&spec.current_dir);
        command
    }
}

impl Default for SystemProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessRunner for SystemProcessRunner {

    async fn output(&self, spec: &CommandSpec) -> LauncherResult<CommandOutput> {
        log::debug!("Running (captured): {}", spec);
        let output = Self::command(spec)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| LauncherError::process_error(&spec.program, "run command", &e.to_string()))?;

        Ok(CommandOutput::from(output))
    }

    async fn status(&self, spec: &CommandSpec) -> LauncherResult<Option<i32>> {
        log::debug!("Running: {}", spec);
        let status = Self::command(spec)
            .status()
            .await
            .map_err(|e| LauncherError::process_error(&spec.program, "run command", &e.to_string()))?;

        Ok(status.code())
    }

    async fn serve(&self, spec: &CommandSpec) -> LauncherResult<ServeOutcome> {
        let mut child = Self::command(spec)
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| LauncherError::process_error(&spec.program, "start the server", &e.to_string()))?;

        let interrupted = tokio::select! {
            status = child.wait() => {
                let status = status
                    .map_err(|e| LauncherError::process_error(&spec.program, "wait for the server", &e.to_string()))?;
                return Ok(ServeOutcome::Exited(status.code()));
            }
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("⚠️ Could not listen for Ctrl+C: {}", e);
                    false
                }
            }
        };

        if !interrupted {
            let status = child
                .wait()
                .await
                .map_err(|e| LauncherError::process_error(&spec.program, "wait for the server", &e.to_string()))?;
            return Ok(ServeOutcome::Exited(status.code()));
        }

        // A terminal interrupt reaches the server too; give it time to shut down.
        log::debug!("Interrupt received, waiting for {} to exit", spec.program);
        let grace = Duration::from_secs(SERVER_SHUTDOWN_GRACE_PERIOD_SECS);
        match timeout(grace, child.wait()).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => log::warn!("⚠️ Could not wait for {} after interrupt: {}", spec.program, e),
            Err(_) => {
                log::warn!("⚠️ {} did not stop within {}s, killing it", spec.program, grace.as_secs());
                if let Err(e) = child.kill().await {
                    log::warn!("⚠️ Could not kill {}: {}", spec.program, e);
                }
            }
        }

        Ok(ServeOutcome::Interrupted)
    }
}
