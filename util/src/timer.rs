use std::time::{Duration, SystemTime, SystemTimeError};

/// Utility for keeping track of how long a step of the run took.
pub struct Timer {
    start_time: SystemTime,
}

impl Timer {
    /// Create a new `Timer` started now.
    pub fn now() -> Self {
        Self {
            start_time: SystemTime::now(),
        }
    }

    /// Restart the timer.
    pub fn reset(&mut self) {
        self.start_time = SystemTime::now();
    }

    /// Time since the timer was created or last reset.
    pub fn elapsed(&self) -> Result<Duration, SystemTimeError> {
        self.start_time.elapsed()
    }

    /// Print a message with the elapsed time since the timer was last reset.
    pub fn print_elapsed(&self, step: &str) -> Result<(), SystemTimeError> {
        eprintln!("{} took {:?}", step, self.elapsed()?);
        Ok(())
    }
}
