use std::fmt;
use std::error::Error as StdError;
use crate::config::constants::INSTALL_HINT;

#[derive(Debug, Clone, PartialEq)]
pub enum LauncherError {
    // Project layout errors
    MarkerMissing {
        marker: String,
        directory: String,
    },

    // Environment errors
    MissingDependency {
        modules: Vec<String>,
        interpreter: String,
    },

    // External command errors
    TrainingFailed {
        exit_code: Option<i32>,
        stderr: String,
    },
    ProcessError {
        program: String,
        operation: String,
        reason: String,
    },

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Validation errors
    ValidationError {
        errors: Vec<String>,
    },
}

impl LauncherError {
    pub fn marker_missing(marker: &str, directory: &str) -> Self {
        Self::MarkerMissing {
            marker: marker.to_string(),
            directory: directory.to_string(),
        }
    }

    pub fn missing_dependency(modules: Vec<String>, interpreter: &str) -> Self {
        Self::MissingDependency {
            modules,
            interpreter: interpreter.to_string(),
        }
    }

    pub fn training_failed(exit_code: Option<i32>, stderr: &str) -> Self {
        Self::TrainingFailed {
            exit_code,
            stderr: stderr.to_string(),
        }
    }

    pub fn process_error(program: &str, operation: &str, reason: &str) -> Self {
        Self::ProcessError {
            program: program.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ProcessError { .. } => ErrorSeverity::Critical,
            Self::TrainingFailed { .. } => ErrorSeverity::High,
            Self::MissingDependency { .. } => ErrorSeverity::High,
            Self::FileOperationError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::MarkerMissing { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
        }
    }

    /// Every fatal launcher error terminates the process with status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MarkerMissing { marker, directory } => {
                format!("No '{}' found in '{}'\n💡 Please run this from the Rasa project directory (the one containing {})", marker, directory, marker)
            }
            Self::MissingDependency { modules, interpreter } => {
                format!("Missing dependency: {} (checked with '{}')\n💡 Please install dependencies with: {}", modules.join(", "), interpreter, INSTALL_HINT)
            }
            Self::TrainingFailed { exit_code, stderr } => {
                let mut msg = match exit_code {
                    Some(code) => format!("Model training failed with exit code {}", code),
                    None => "Model training was terminated by a signal".to_string(),
                };
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    msg.push_str(&format!(":\n{}", stderr));
                }
                msg.push_str("\n💡 Failed to train model. Please check the configuration.");
                msg
            }
            Self::ProcessError { program, operation, reason } => {
                format!("Failed to {} with '{}': {}\n💡 Check that '{}' is installed and on your PATH", operation, program, reason, program)
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check file permissions and path", operation, file_path, reason)
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg.push_str("\n💡 Check the format and syntax of the input");
                msg
            }
            Self::ValidationError { errors } => {
                let mut msg = format!("Configuration is invalid ({} problems):\n", errors.len());
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for LauncherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for LauncherError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for launcher operations
pub type LauncherResult<T> = Result<T, LauncherError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Log the technical details and print the user-facing message to stderr.
    pub fn handle_error(error: &LauncherError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("❌ {} {}", severity.emoji(), error.user_message());
    }

    /// Maps a command result to the process exit status, reporting the error
    /// on the way.
    pub fn exit_status(result: &LauncherResult<()>) -> u8 {
        match result {
            Ok(()) => 0,
            Err(error) => {
                Self::handle_error(error);
                error.exit_code()
            }
        }
    }
}

impl From<toml::de::Error> for LauncherError {
    fn from(error: toml::de::Error) -> Self {
        LauncherError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for LauncherError {
    fn from(error: toml::ser::Error) -> Self {
        LauncherError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for LauncherError {
    fn from(error: serde_yaml::Error) -> Self {
        LauncherError::ParseError {
            content_type: "YAML".to_string(),
            line_number: error.location().map(|l| l.line()),
            reason: error.to_string(),
        }
    }
}
