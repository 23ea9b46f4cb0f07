//! User-facing notification seam. Every mutating store operation reports
//! its outcome here; the store never decides how notifications render.

use std::sync::Mutex;

use log::{error, info};

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Notifier that routes outcomes to the log facade.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{message}");
    }

    fn failure(&self, message: &str) {
        error!("{message}");
    }
}

/// Outcome kind recorded by [`RecordingNotifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Notifier that records every outcome, for asserting the notification
/// contract in tests.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(Outcome, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(Outcome, String)> {
        self.events.lock().unwrap().clone()
    }

    pub fn successes(&self) -> usize {
        self.count(Outcome::Success)
    }

    pub fn failures(&self) -> usize {
        self.count(Outcome::Failure)
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(o, _)| *o == outcome)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((Outcome::Success, message.to_string()));
    }

    fn failure(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((Outcome::Failure, message.to_string()));
    }
}
