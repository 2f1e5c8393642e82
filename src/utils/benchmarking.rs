use std::fmt::Write as _;
use std::time::{Duration, Instant};
use tracing::debug;

/// A completed phase with its duration
#[derive(Debug, Clone)]
pub struct TimingInfo {
    pub name: String,
    pub duration: Duration,
}

/// Records how long each phase of a run takes
///
/// Phases are kept in execution order; `report` renders them for the debug log.
#[derive(Debug, Default)]
pub struct OperationTimer {
    completed: Vec<TimingInfo>,
}

impl OperationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `operation` and records its duration under `name`
    pub fn time<T>(&mut self, name: &str, operation: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = operation();
        let duration = start.elapsed();

        debug!("{} took {:?}", name, duration);
        self.completed.push(TimingInfo {
            name: name.to_string(),
            duration,
        });
        result
    }

    pub fn completed(&self) -> &[TimingInfo] {
        &self.completed
    }

    pub fn total(&self) -> Duration {
        self.completed.iter().map(|op| op.duration).sum()
    }

    /// Generate a report of all completed phases
    pub fn report(&self) -> String {
        let mut report = String::new();
        for (idx, op) in self.completed.iter().enumerate() {
            let _ = writeln!(report, "{}. {} - {} ms", idx + 1, op.name, op.duration.as_millis());
        }
        let _ = write!(report, "Total: {} ms", self.total().as_millis());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_recorded_in_order() {
        let mut timer = OperationTimer::new();
        let value = timer.time("read", || 42);
        timer.time("write", || ());

        assert_eq!(value, 42);
        let names: Vec<&str> = timer.completed().iter().map(|op| op.name.as_str()).collect();
        assert_eq!(names, vec!["read", "write"]);
    }

    #[test]
    fn test_report_lists_every_phase() {
        let mut timer = OperationTimer::new();
        timer.time("extract", || ());
        let report = timer.report();
        assert!(report.starts_with("1. extract - "));
        assert!(report.contains("Total: "));
    }
}
