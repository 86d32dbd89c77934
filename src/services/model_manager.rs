use std::path::PathBuf;
use std::sync::Arc;
use crate::enums::model_status::ModelStatus;
use crate::errors::LauncherResult;
use crate::structs::command_spec::CommandSpec;
use crate::structs::config::launcher_config::LauncherConfig;
use crate::traits::process_runner::ProcessRunner;

/// Makes sure the spaCy language model used by the NLU pipeline is installed.
pub struct ModelManager {
    runner: Arc<dyn ProcessRunner>,
    config: Arc<LauncherConfig>,
    project_dir: PathBuf,
}

impl ModelManager {
    pub fn new(runner: Arc<dyn ProcessRunner>, config: Arc<LauncherConfig>, project_dir: PathBuf) -> Self {
        Self {
            runner,
            config,
            project_dir,
        }
    }

    /// The model name travels through `sys.argv` so it never has to be quoted
    /// as Python source.
    pub fn load_command(&self) -> CommandSpec {
        CommandSpec::new(&self.config.python, &self.project_dir)
            .args(["-c", "import sys, spacy; spacy.load(sys.argv[1])"])
            .arg(&self.config.spacy_model)
    }

    pub fn download_command(&self) -> CommandSpec {
        CommandSpec::new(&self.config.python, &self.project_dir)
            .args(["-m", "spacy", "download"])
            .arg(&self.config.spacy_model)
    }

    /// Downloads the model when it cannot be loaded. The download is best
    /// effort: a failed or unstartable download is reported, never returned
    /// as an error.
    pub async fn ensure_model(&self) -> LauncherResult<ModelStatus> {
        let model = &self.config.spacy_model;

        if self.runner.output(&self.load_command()).await?.success() {
            log::info!("✅ spaCy model '{}' is available", model);
            return Ok(ModelStatus::Available);
        }

        log::info!("📥 Downloading spaCy model '{}'...", model);
        match self.runner.status(&self.download_command()).await {
            Ok(Some(0)) => {
                log::info!("✅ spaCy model '{}' downloaded", model);
                Ok(ModelStatus::Downloaded)
            }
            Ok(code) => {
                log::warn!("⚠️ Download of '{}' did not succeed (exit code {:?}); continuing anyway", model, code);
                Ok(ModelStatus::DownloadFailed(code))
            }
            Err(e) => {
                log::warn!("⚠️ Could not run the spaCy download: {}; continuing anyway", e);
                Ok(ModelStatus::DownloadFailed(None))
            }
        }
    }
}
