use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use async_trait::async_trait;
use rasa_launcher::enums::serve_outcome::ServeOutcome;
use rasa_launcher::errors::LauncherResult;
use rasa_launcher::structs::command_output::CommandOutput;
use rasa_launcher::structs::command_spec::CommandSpec;
use rasa_launcher::traits::process_runner::ProcessRunner;
use tempfile::TempDir;

/// Scripted stand-in for the Python and Rasa executables. Every command is
/// recorded, and the credentials file is captured at the moment the server
/// starts.
pub struct RecordingRunner {
    pub missing_modules: HashSet<String>,
    pub model_installed: bool,
    pub download_code: Option<i32>,
    pub train_code: Option<i32>,
    pub train_stderr: String,
    pub serve_outcome: ServeOutcome,
    pub(crate) calls: Mutex<Vec<CommandSpec>>,
    pub(crate) credentials_at_serve: Mutex<Option<String>>,
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self {
            missing_modules: HashSet::new(),
            model_installed: true,
            download_code: Some(0),
            train_code: Some(0),
            train_stderr: String::new(),
            serve_outcome: ServeOutcome::Interrupted,
            calls: Mutex::new(Vec::new()),
            credentials_at_serve: Mutex::new(None),
        }
    }
}

impl RecordingRunner {
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(CommandSpec::command_line).collect()
    }

    pub fn rasa_calls(&self) -> Vec<CommandSpec> {
        self.calls().into_iter().filter(|c| c.program == "rasa").collect()
    }

    pub fn credentials_at_serve(&self) -> Option<String> {
        self.credentials_at_serve.lock().unwrap().clone()
    }

    fn record(&self, spec: &CommandSpec) {
        self.calls.lock().unwrap().push(spec.clone());
    }
}

#[async_trait]
impl ProcessRunner for RecordingRunner {
    async fn output(&self, spec: &CommandSpec) -> LauncherResult<CommandOutput> {
        self.record(spec);

        let args: Vec<&str> = spec.args.iter().map(String::as_str).collect();
        let output = match args.as_slice() {
            ["-c", code, _model] if code.contains("spacy.load") => {
                if self.model_installed {
                    CommandOutput::with_code(0)
                } else {
                    CommandOutput::with_code(1).with_stderr("OSError: [E050] Can't find model 'en_core_web_sm'")
                }
            }
            ["-c", code] => {
                let module = code.trim_start_matches("import ").trim();
                if self.missing_modules.contains(module) {
                    CommandOutput::with_code(1)
                        .with_stderr(&format!("ModuleNotFoundError: No module named '{}'", module))
                } else {
                    CommandOutput::with_code(0)
                }
            }
            ["train"] => CommandOutput {
                code: self.train_code,
                stdout: "Your Rasa model is trained and saved at 'models/'.".to_string(),
                stderr: self.train_stderr.clone(),
            },
            _ => CommandOutput::with_code(127),
        };

        Ok(output)
    }

    async fn status(&self, spec: &CommandSpec) -> LauncherResult<Option<i32>> {
        self.record(spec);
        Ok(self.download_code)
    }

    async fn serve(&self, spec: &CommandSpec) -> LauncherResult<ServeOutcome> {
        self.record(spec);
        let credentials = fs::read_to_string(spec.current_dir.join("credentials.yml")).ok();
        *self.credentials_at_serve.lock().unwrap() = credentials;
        Ok(self.serve_outcome)
    }
}

pub fn rasa_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("domain.yml"),
        "version: \"3.1\"\nintents:\n  - greet\nresponses:\n  utter_greet:\n    - text: \"Hello!\"\n",
    )
    .unwrap();
    dir
}

pub fn write_config(dir: &Path, contents: &str) {
    fs::write(dir.join("rasa-launcher.toml"), contents).unwrap();
}
