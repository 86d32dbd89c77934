use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{BANNER_TITLE, BANNER_WIDTH};
use crate::enums::commands::Commands;
use crate::enums::model_status::ModelStatus;
use crate::errors::{LauncherError, LauncherResult};
use crate::services::dependency_checker::DependencyChecker;
use crate::services::model_manager::ModelManager;
use crate::services::rasa_server::RasaServer;
use crate::services::trainer::Trainer;
use crate::structs::config::launcher_config::LauncherConfig;
use crate::traits::process_runner::ProcessRunner;

pub struct CommandRunner {
    runner: Arc<dyn ProcessRunner>,
    project_dir: PathBuf,
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(runner: Arc<dyn ProcessRunner>, project_dir: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            runner,
            project_dir,
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> LauncherResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Start => self.start_command().await,
            Commands::Check => self.check_command().await,
            Commands::Train => self.train_command().await,
            Commands::Serve => self.serve_command().await,
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn start_command(&self) -> LauncherResult<()> {
        let config = self.prepare(Commands::Start)?;

        self.dependency_checker(&config).check().await?;
        self.model_manager(&config).ensure_model().await?;
        self.trainer(&config).train().await?;
        self.serve(&config).await
    }

    async fn check_command(&self) -> LauncherResult<()> {
        let config = self.prepare(Commands::Check)?;

        self.dependency_checker(&config).check().await?;
        match self.model_manager(&config).ensure_model().await? {
            ModelStatus::DownloadFailed(_) => log::warn!("⚠️ Dependencies are installed but the spaCy model is still missing"),
            _ => log::info!("✅ Environment is ready"),
        }
        Ok(())
    }

    async fn train_command(&self) -> LauncherResult<()> {
        let config = self.prepare(Commands::Train)?;

        self.dependency_checker(&config).check().await?;
        self.trainer(&config).train().await?;
        Ok(())
    }

    async fn serve_command(&self) -> LauncherResult<()> {
        let config = self.prepare(Commands::Serve)?;

        self.dependency_checker(&config).check().await?;
        self.serve(&config).await
    }

    fn init_command(&self) -> LauncherResult<()> {
        log::info!("🚀 Initializing rasa-launcher configuration...");
        self.ensure_project_dir()?;

        match ConfigManager::create_sample_config(&self.project_dir) {
            Ok(path) => {
                log::info!("📝 Edit {} to point at your Python environment.", path.display());
                log::info!("🔧 Run 'rasa-launcher validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> LauncherResult<()> {
        let config = self.load_config()?;
        log::info!("✅ Configuration is valid");
        log::info!("   python:           {}", config.python);
        log::info!("   rasa:             {}", config.rasa);
        log::info!("   required modules: {}", config.required_modules.join(", "));
        log::info!("   spaCy model:      {}", config.spacy_model);
        Ok(())
    }

    /// Prints the banner, loads the config and checks for the project marker.
    /// Nothing external runs before this succeeds.
    fn prepare(&self, command: Commands) -> LauncherResult<Arc<LauncherConfig>> {
        log::info!("{}", BANNER_TITLE);
        log::info!("{}", "=".repeat(BANNER_WIDTH));

        let config = self.load_config()?;
        if command.requires_project() {
            Self::ensure_marker(&self.project_dir, &config.marker_file)?;
        }
        Ok(config)
    }

    fn load_config(&self) -> LauncherResult<Arc<LauncherConfig>> {
        self.ensure_project_dir()?;

        let config = ConfigManager::load(&self.project_dir, self.config_path.as_deref())?;
        ConfigManager::validate_config(&config).map_err(|errors| LauncherError::ValidationError { errors })?;
        Ok(Arc::new(config))
    }

    fn ensure_project_dir(&self) -> LauncherResult<()> {
        if self.project_dir.is_dir() {
            return Ok(());
        }

        Err(LauncherError::config_error(
            &format!("project directory '{}' does not exist", self.project_dir.display()),
            Some("--project-dir"),
            Some("Point --project-dir at your Rasa project"),
        ))
    }

    pub fn ensure_marker(project_dir: &Path, marker: &str) -> LauncherResult<()> {
        if project_dir.join(marker).exists() {
            return Ok(());
        }

        Err(LauncherError::marker_missing(marker, &project_dir.display().to_string()))
    }

    async fn serve(&self, config: &Arc<LauncherConfig>) -> LauncherResult<()> {
        // Both an interrupt and a server that exits by itself end the run cleanly.
        self.server(config).serve().await?;
        Ok(())
    }

    fn dependency_checker(&self, config: &Arc<LauncherConfig>) -> DependencyChecker {
        DependencyChecker::new(Arc::clone(&self.runner), Arc::clone(config), self.project_dir.clone())
    }

    fn model_manager(&self, config: &Arc<LauncherConfig>) -> ModelManager {
        ModelManager::new(Arc::clone(&self.runner), Arc::clone(config), self.project_dir.clone())
    }

    fn trainer(&self, config: &Arc<LauncherConfig>) -> Trainer {
        Trainer::new(Arc::clone(&self.runner), Arc::clone(config), self.project_dir.clone())
    }

    fn server(&self, config: &Arc<LauncherConfig>) -> RasaServer {
        RasaServer::new(Arc::clone(&self.runner), Arc::clone(config), self.project_dir.clone())
    }
}
