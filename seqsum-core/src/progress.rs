//! Progress reporting for analysis runs.
//!
//! The engine reports phase transitions through an injected [`Progress`]
//! observer instead of a process-wide logger, so reporting can never
//! influence results and tests can run without touching global state.
//! [`StderrProgress`] prints informational messages on stderr;
//! [`SilentProgress`] is the `quiet` mode.

/// Observer for analysis progress.
///
/// Implementations must be safe to call from rayon worker threads.
pub trait Progress: Send + Sync {
    /// Called when the engine enters a new phase.
    fn phase(&self, message: &str);

    /// Called once per sequence as profiling starts. Default: ignored.
    fn sequence(&self, _index: usize, _total: usize) {}
}

/// Discards all progress reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn phase(&self, _message: &str) {}
}

/// Writes phase transitions to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn phase(&self, message: &str) {
        eprintln!("{message}...");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProgress {
        phases: Mutex<Vec<String>>,
    }

    impl Progress for RecordingProgress {
        fn phase(&self, message: &str) {
            self.phases.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_observers_are_object_safe() {
        let observers: Vec<Box<dyn Progress>> =
            vec![Box::new(SilentProgress), Box::new(StderrProgress)];
        for observer in &observers {
            observer.phase("test");
            observer.sequence(0, 1);
        }
    }

    #[test]
    fn test_custom_observer_receives_phases() {
        let recorder = RecordingProgress::default();
        recorder.phase("Analyzing sequences");
        recorder.phase("Generating summary");
        assert_eq!(
            *recorder.phases.lock().unwrap(),
            vec!["Analyzing sequences", "Generating summary"]
        );
    }
}
