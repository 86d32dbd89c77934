use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::config::constants::REST_WEBHOOK_URL;
use crate::errors::{LauncherError, LauncherResult};

/// Channel credentials handed to `rasa run`. Only the REST channel is
/// configured.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub rest: RestChannel,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RestChannel {
    pub webhook_url: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            rest: RestChannel {
                webhook_url: REST_WEBHOOK_URL.to_string(),
            },
        }
    }
}

impl Credentials {
    pub fn to_yaml(&self) -> LauncherResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Overwrites `path` with the YAML form of these credentials.
    pub fn write_to(&self, path: &Path) -> LauncherResult<()> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml)
            .map_err(|e| LauncherError::file_error(&path.display().to_string(), "write credentials", &e.to_string()))?;
        log::debug!("Wrote credentials to {}", path.display());
        Ok(())
    }
}
