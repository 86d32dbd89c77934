use async_trait::async_trait;
use crate::enums::serve_outcome::ServeOutcome;
use crate::errors::LauncherResult;
use crate::structs::command_output::CommandOutput;
use crate::structs::command_spec::CommandSpec;

/// Runs external commands. Errors are reserved for commands that could not be
/// started or waited on; a non-zero exit is reported through the result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcessRunner: Send + Sync {

    /// Runs to completion with stdout and stderr captured.
    async fn output(&self, spec: &CommandSpec) -> LauncherResult<CommandOutput>;

    /// Runs to completion with the launcher's stdio inherited.
    async fn status(&self, spec: &CommandSpec) -> LauncherResult<Option<i32>>;

    /// Runs in the foreground with inherited stdio until the child exits or
    /// the user interrupts it.
    async fn serve(&self, spec: &CommandSpec) -> LauncherResult<ServeOutcome>;
}
