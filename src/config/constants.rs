pub const DEFAULT_PYTHON: &str = "python3";
pub const DEFAULT_RASA: &str = "rasa";
pub const DEFAULT_REQUIRED_MODULES: &[&str] = &["rasa", "spacy"];
pub const DEFAULT_SPACY_MODEL: &str = "en_core_web_sm";

pub const MARKER_FILE: &str = "domain.yml";
pub const CREDENTIALS_FILE: &str = "credentials.yml";

pub const PROJECT_CONFIG_FILE: &str = "rasa-launcher.toml";
pub const GLOBAL_CONFIG_DIR: &str = "rasa-launcher";
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

pub const REST_WEBHOOK_URL: &str = "http://localhost:5005/webhooks/rest/webhook";

pub const SERVER_PORT: u16 = 5005;
pub const SERVER_HOST: &str = "0.0.0.0";
pub const SERVER_CORS: &str = "*";

pub const INSTALL_HINT: &str = "pip install -r requirements.txt";
pub const BANNER_TITLE: &str = "🤖 Maninfini Intelligent Chatbot - Rasa Server";
pub const BANNER_WIDTH: usize = 50;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_SECS: u64 = 5;
