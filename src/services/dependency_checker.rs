use std::path::PathBuf;
use std::sync::Arc;
use crate::errors::{LauncherError, LauncherResult};
use crate::structs::command_spec::CommandSpec;
use crate::structs::config::launcher_config::LauncherConfig;
use crate::traits::process_runner::ProcessRunner;

/// Verifies that the configured Python modules can be imported.
pub struct DependencyChecker {
    runner: Arc<dyn ProcessRunner>,
    config: Arc<LauncherConfig>,
    project_dir: PathBuf,
}

impl DependencyChecker {
    pub fn new(runner: Arc<dyn ProcessRunner>, config: Arc<LauncherConfig>, project_dir: PathBuf) -> Self {
        Self {
            runner,
            config,
            project_dir,
        }
    }

    pub fn import_command(&self, module: &str) -> CommandSpec {
        CommandSpec::new(&self.config.python, &self.project_dir)
            .arg("-c")
            .arg(&format!("import {}", module))
    }

    /// Imports every module in turn and fails with the full list of missing ones.
    pub async fn check(&self) -> LauncherResult<()> {
        log::info!("🔍 Checking dependencies...");
        let mut missing = Vec::new();

        for module in &self.config.required_modules {
            let output = self.runner.output(&self.import_command(module)).await?;
            if output.success() {
                log::debug!("Module '{}' is importable", module);
                continue;
            }

            let reason = output.stderr.lines().last().unwrap_or("").trim().to_string();
            if reason.is_empty() {
                log::error!("❌ Missing dependency: {}", module);
            } else {
                log::error!("❌ Missing dependency: {} ({})", module, reason);
            }
            missing.push(module.clone());
        }

        if !missing.is_empty() {
            return Err(LauncherError::missing_dependency(missing, &self.config.python));
        }

        log::info!("✅ {} installed", Self::describe(&self.config.required_modules));
        Ok(())
    }

    fn describe(modules: &[String]) -> String {
        match modules {
            [only] => format!("{} is", only),
            [init @ .., last] => format!("{} and {} are", init.join(", "), last),
            [] => "No modules".to_string(),
        }
    }
}
