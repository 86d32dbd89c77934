use crate::config::constants::{
    CREDENTIALS_FILE, DEFAULT_PYTHON, DEFAULT_RASA, DEFAULT_REQUIRED_MODULES, DEFAULT_SPACY_MODEL, MARKER_FILE,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_python() -> String {
        DEFAULT_PYTHON.to_string()
    }

    pub fn default_rasa() -> String {
        DEFAULT_RASA.to_string()
    }

    pub fn default_required_modules() -> Vec<String> {
        DEFAULT_REQUIRED_MODULES.iter().map(|m| m.to_string()).collect()
    }

    pub fn default_spacy_model() -> String {
        DEFAULT_SPACY_MODEL.to_string()
    }

    pub fn default_marker_file() -> String {
        MARKER_FILE.to_string()
    }

    pub fn default_credentials_file() -> String {
        CREDENTIALS_FILE.to_string()
    }
}
