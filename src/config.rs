use std::time::Duration;

/// Assembly settings shared by the library entry points and the binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Assemble top-level statements on worker threads instead of the calling thread
    pub concurrent: bool,
    /// Give up on a concurrent assembly that has not finished within this duration
    pub deadline: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrent: false,
            deadline: None,
        }
    }
}

impl Config {
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn concurrent(mut self) -> Self {
        self.concurrent = true;
        self
    }
}
