use std::io::{IsTerminal, Write};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spinner on stderr for long-running steps such as `rasa train`. When stderr
/// is not a terminal only the final line is written.
pub struct AnimatedLogger {
    message: String,
    interactive: bool,
    animation_chars: Vec<&'static str>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        Self::with_terminal(message, std::io::stderr().is_terminal())
    }

    pub fn with_terminal(message: String, interactive: bool) -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

        Self {
            message,
            interactive,
            animation_chars,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        if !self.interactive {
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();
        let animation_chars = self.animation_chars.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(150));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, animation_chars[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % animation_chars.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        self.finish("✅", final_message);
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        self.finish("❌", error_message);
    }

    fn finish(&self, symbol: &str, message: &str) {
        if self.interactive {
            eprint!("\r\x1b[K{} {}\n", symbol, message);
        } else {
            eprintln!("{} {}", symbol, message);
        }
        let _ = std::io::stderr().flush();
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }
}
