/// Result of making sure the spaCy model is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    Available,                    // Loaded without downloading
    Downloaded,                   // Download command exited 0
    DownloadFailed(Option<i32>),  // Download attempted, did not succeed
}
