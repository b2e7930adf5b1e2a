use std::time::Duration;

/// Delay between the end of one poll response and the next request.
pub const POLL_DELAY: Duration = Duration::from_millis(1000);
/// Grace period before the rotator shows its first message.
pub const ROTATOR_START_DELAY: Duration = Duration::from_millis(5000);
/// Cadence of rotating messages once the rotator is live.
pub const ROTATOR_PERIOD: Duration = Duration::from_millis(7000);
/// Grace delay between a terminal outcome and the results submission.
pub const REDIRECT_GRACE: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a status request now.
    RequestStatus,
    /// Arm the one-shot poll timer; it posts `Msg::PollDue` when it fires.
    SchedulePoll { delay: Duration },
    /// Arm the rotator's one-shot start timer (`Msg::RotatorStartDue`).
    StartRotatorDelay { delay: Duration },
    /// Begin the rotator's repeating interval (`Msg::RotatorTick`).
    StartRotatorInterval { period: Duration },
    /// Cancel the rotator's start timer and interval, whichever exist.
    CancelRotatorTimers,
    /// Arm the one-shot redirect timer (`Msg::RedirectDue`).
    ScheduleRedirect { delay: Duration },
    /// Submit the synthesized results form; navigation follows.
    SubmitResults,
    /// Clear persisted job state on the server, then return to the start page.
    ResetAndRestart,
}
