//!
//! A simple timer capable of measuring time intervals.
//!

type TimeStamp = chrono::DateTime<chrono::Utc>;

///
/// A timer measuring the interval between its creation with `[started]`
/// and the invocation of `[stop]`.
///
#[derive(Clone, Default, Debug)]
pub struct Timer {
    /// Start time.
    start: Option<TimeStamp>,
    /// End time.
    end: Option<TimeStamp>,
}

impl Timer {
    ///
    /// Creates a started timer.
    ///
    pub fn started() -> Self {
        Self {
            start: Some(chrono::Utc::now()),
            end: None,
        }
    }

    /// Stops the timer from ticking.
    ///
    /// # Errors
    ///
    /// If the timer has not been started or if it was already stopped.
    ///
    pub fn stop(&mut self) -> anyhow::Result<()> {
        match (self.start, self.end) {
            (Some(_), None) => {
                self.end = Some(chrono::Utc::now());
                Ok(())
            }
            _ => anyhow::bail!("Malformed timer state: {self:?}"),
        }
    }

    /// Returns the start time, if the timer has been started.
    pub fn get_start(&self) -> Option<TimeStamp> {
        self.start
    }

    /// Returns the end time, if the timer has been stopped.
    pub fn get_end(&self) -> Option<TimeStamp> {
        self.end
    }

    ///
    /// Returns the elapsed time between the start and the end of the timer,
    /// or until now if the timer is still running.
    ///
    pub fn elapsed(&self) -> anyhow::Result<chrono::TimeDelta> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(end - start),
            (Some(start), None) => Ok(chrono::Utc::now() - start),
            _ => anyhow::bail!("Malformed timer state: {self:?}"),
        }
    }

    ///
    /// Formats the elapsed time in seconds, e.g. `12.34s`.
    ///
    pub fn elapsed_seconds(&self) -> anyhow::Result<String> {
        let elapsed = self.elapsed()?;
        Ok(format!(
            "{:.2}s",
            (elapsed.num_milliseconds() as f64) / 1000.0
        ))
    }
}
