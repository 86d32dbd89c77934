use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILE, PROJECT_CONFIG_FILE};
use crate::errors::{LauncherError, LauncherResult};
use crate::structs::config::launcher_config::LauncherConfig;

pub struct ConfigManager;

impl ConfigManager {

    /// Loads the launcher config. An explicit path must exist; otherwise the
    /// project file wins over the per-user file, and defaults apply when neither
    /// is present.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> LauncherResult<LauncherConfig> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(LauncherError::config_file_error(&path.display().to_string(), "file does not exist"));
            }
            return Self::load_from(path);
        }

        match Self::discover(project_dir) {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("No launcher config found, using defaults");
                Ok(LauncherConfig::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> LauncherResult<LauncherConfig> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| LauncherError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: LauncherConfig = toml::from_str(&content)?;
        Ok(config)
    }

    fn discover(project_dir: &Path) -> Option<PathBuf> {
        let project_config = project_dir.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            return Some(project_config);
        }

        Self::global_config_path().filter(|p| p.exists())
    }

    pub fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILE))
    }

    pub fn create_sample_config(project_dir: &Path) -> LauncherResult<PathBuf> {
        let config_file_path = project_dir.join(PROJECT_CONFIG_FILE);
        if config_file_path.exists() {
            return Err(LauncherError::config_file_error(
                &config_file_path.display().to_string(),
                "a launcher config already exists; remove it first to regenerate",
            ));
        }

        let sample_config = format!(
            "# rasa-launcher configuration\n\
             #\n\
             # Server flags (--enable-api --cors * --port 5005 --host 0.0.0.0 --debug)\n\
             # are fixed and cannot be changed here.\n\n{}",
            toml::to_string_pretty(&LauncherConfig::default())?
        );

        fs::write(&config_file_path, sample_config)
            .map_err(|e| LauncherError::file_error(&config_file_path.display().to_string(), "write", &e.to_string()))?;
        log::info!("✅ Created sample launcher config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &LauncherConfig) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.python.trim().is_empty() {
            errors.push("'python' must name an interpreter".to_string());
        }

        if config.rasa.trim().is_empty() {
            errors.push("'rasa' must name the Rasa executable".to_string());
        }

        if config.required_modules.is_empty() {
            errors.push("'required_modules' must list at least one module".to_string());
        }

        let mut names = HashSet::new();
        for module in &config.required_modules {
            if module.trim().is_empty() {
                errors.push("'required_modules' contains an empty module name".to_string());
            } else if !names.insert(module) {
                errors.push(format!("Duplicate required module: {}", module));
            }
        }

        if config.spacy_model.trim().is_empty() {
            errors.push("'spacy_model' must not be empty".to_string());
        }

        for (field, value) in [("marker_file", &config.marker_file), ("credentials_file", &config.credentials_file)] {
            if value.trim().is_empty() {
                errors.push(format!("'{}' must not be empty", field));
            } else if Path::new(value).is_absolute() {
                errors.push(format!("'{}' must be relative to the project directory: {}", field, value));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
