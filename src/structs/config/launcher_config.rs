use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Launcher settings read from `rasa-launcher.toml`. Every field is optional in
/// the file; missing fields fall back to the stock Rasa project layout.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LauncherConfig {
    /// Interpreter used for import checks and the spaCy download.
    #[serde(default = "ConfigHelper::default_python")]
    pub python: String,

    /// The Rasa executable used for `train` and `run`.
    #[serde(default = "ConfigHelper::default_rasa")]
    pub rasa: String,

    #[serde(default = "ConfigHelper::default_required_modules")]
    pub required_modules: Vec<String>,

    #[serde(default = "ConfigHelper::default_spacy_model")]
    pub spacy_model: String,

    #[serde(default = "ConfigHelper::default_marker_file")]
    pub marker_file: String,

    #[serde(default = "ConfigHelper::default_credentials_file")]
    pub credentials_file: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            python: ConfigHelper::default_python(),
            rasa: ConfigHelper::default_rasa(),
            required_modules: ConfigHelper::default_required_modules(),
            spacy_model: ConfigHelper::default_spacy_model(),
            marker_file: ConfigHelper::default_marker_file(),
            credentials_file: ConfigHelper::default_credentials_file(),
        }
    }
}
