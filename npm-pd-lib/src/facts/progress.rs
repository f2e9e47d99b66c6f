/// Reports progress of long-running requests to the user.
pub trait Progress: Send + Sync {
    /// Set the label describing the current operation (e.g., "Fetching").
    fn set_phase(&self, phase: &str);

    /// Replace the detail message shown next to the phase label.
    fn set_message(&self, message: &str);

    /// Finish and clear the progress indicator.
    fn done(&self);
}
