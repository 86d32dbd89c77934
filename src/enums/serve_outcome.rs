/// How a foreground server process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeOutcome {
    Exited(Option<i32>),  // The server exited by itself
    Interrupted,          // The user pressed Ctrl+C
}
