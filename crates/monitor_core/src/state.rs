use crate::view_model::MonitorViewModel;

/// One poll response's progress/message/error triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub percent: u8,
    pub message: String,
    pub error: bool,
}

/// Terminal disposition of the monitored job. Set at most once per lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalOutcome {
    Completed,
    BackendError,
    TransportError,
}

/// Logical rotator state.
///
/// The enum shape makes "at most one of pending-start and active-interval"
/// hold by construction; the raw timer handles live in the driver, which
/// drops both on `Effect::CancelRotatorTimers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotatorState {
    #[default]
    Idle,
    PendingStart,
    Cycling {
        index: usize,
    },
}

/// Visual tone of the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorTone {
    #[default]
    Normal,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonitorState {
    outcome: Option<TerminalOutcome>,
    rotator: RotatorState,
    percent: u8,
    status_line: String,
    narrative_line: String,
    error_text: Option<String>,
    tone: IndicatorTone,
    recovery_offered: bool,
    dirty: bool,
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> MonitorViewModel {
        MonitorViewModel {
            percent: self.percent,
            tone: self.tone,
            status_line: self.status_line.clone(),
            narrative_line: self.narrative_line.clone(),
            error_text: self.error_text.clone(),
            recovery_offered: self.recovery_offered,
            dirty: self.dirty,
        }
    }

    pub fn outcome(&self) -> Option<TerminalOutcome> {
        self.outcome
    }

    pub fn rotator(&self) -> RotatorState {
        self.rotator
    }

    pub fn recovery_offered(&self) -> bool {
        self.recovery_offered
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn record_status(&mut self, percent: u8, message: String) {
        self.percent = percent.min(100);
        self.status_line = message;
        self.dirty = true;
    }

    pub(crate) fn set_narrative(&mut self, text: &str) {
        self.narrative_line = text.to_owned();
        self.dirty = true;
    }

    pub(crate) fn set_status_line(&mut self, text: &str) {
        self.status_line = text.to_owned();
        self.dirty = true;
    }

    pub(crate) fn set_error_text(&mut self, text: String) {
        self.error_text = Some(text);
        self.dirty = true;
    }

    pub(crate) fn mark_failed(&mut self) {
        self.tone = IndicatorTone::Failed;
        self.dirty = true;
    }

    /// Rotator bookkeeping is not user-visible on its own, so this does not
    /// mark the state dirty.
    pub(crate) fn set_rotator(&mut self, rotator: RotatorState) {
        self.rotator = rotator;
    }

    pub(crate) fn set_outcome(&mut self, outcome: TerminalOutcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }

    /// Latches the recovery action. Installing is idempotent.
    pub(crate) fn offer_recovery(&mut self) {
        if !self.recovery_offered {
            self.recovery_offered = true;
            self.dirty = true;
        }
    }
}
