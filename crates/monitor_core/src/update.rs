use crate::effect::{POLL_DELAY, REDIRECT_GRACE, ROTATOR_PERIOD, ROTATOR_START_DELAY};
use crate::narrative::{self, NarrativeBucket};
use crate::{Effect, MonitorState, Msg, ProgressSnapshot, RotatorState, TerminalOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: MonitorState, msg: Msg) -> (MonitorState, Vec<Effect>) {
    let effects = match msg {
        Msg::PollDue => {
            if state.outcome().is_some() {
                Vec::new()
            } else {
                vec![Effect::RequestStatus]
            }
        }
        Msg::SnapshotReceived(snapshot) => {
            if state.outcome().is_some() {
                // A response that raced a terminal transition changes nothing.
                Vec::new()
            } else {
                apply_snapshot(&mut state, snapshot)
            }
        }
        Msg::PollFailed => match state.outcome() {
            None | Some(TerminalOutcome::TransportError) => fail_transport(&mut state),
            Some(_) => Vec::new(),
        },
        Msg::RotatorStartDue => {
            // A start timer that raced a cancellation finds the rotator no
            // longer pending and must not begin cycling.
            if state.rotator() == RotatorState::PendingStart {
                state.set_rotator(RotatorState::Cycling { index: 0 });
                state.set_narrative(narrative::ROTATING_MESSAGES[0]);
                vec![Effect::StartRotatorInterval {
                    period: ROTATOR_PERIOD,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::RotatorTick => {
            if let RotatorState::Cycling { index } = state.rotator() {
                let next = (index + 1) % narrative::ROTATING_MESSAGES.len();
                state.set_rotator(RotatorState::Cycling { index: next });
                state.set_narrative(narrative::ROTATING_MESSAGES[next]);
            }
            Vec::new()
        }
        Msg::RedirectDue => match state.outcome() {
            Some(TerminalOutcome::Completed) | Some(TerminalOutcome::BackendError) => {
                vec![Effect::SubmitResults]
            }
            _ => Vec::new(),
        },
        Msg::RecoveryRequested => {
            if state.recovery_offered() {
                vec![Effect::ResetAndRestart]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn apply_snapshot(state: &mut MonitorState, snapshot: ProgressSnapshot) -> Vec<Effect> {
    let ProgressSnapshot {
        percent,
        message,
        error,
    } = snapshot;

    // Every successful tick drives the indicator and the status line,
    // whatever the bucket. The error flag outranks the percent value.
    state.record_status(percent, message.clone());

    if error {
        return fail_backend(state, message);
    }

    let bucket = narrative::bucket_for(percent);
    if bucket == NarrativeBucket::Done {
        return complete(state);
    }

    let mut effects = Vec::new();
    match bucket {
        NarrativeBucket::Rotating => {
            // Re-entering while pending or cycling is a no-op; the previous
            // narrative line stays until the first rotating message lands.
            if state.rotator() == RotatorState::Idle {
                state.set_rotator(RotatorState::PendingStart);
                effects.push(Effect::StartRotatorDelay {
                    delay: ROTATOR_START_DELAY,
                });
            }
        }
        bucket => {
            effects.extend(stop_rotator(state));
            if let Some(text) = bucket.static_message() {
                state.set_narrative(text);
            }
        }
    }

    effects.push(Effect::SchedulePoll { delay: POLL_DELAY });
    effects
}

fn complete(state: &mut MonitorState) -> Vec<Effect> {
    state.set_outcome(TerminalOutcome::Completed);
    let mut effects = stop_rotator(state);
    state.set_narrative(narrative::COMPLETION_MESSAGE);
    effects.push(Effect::ScheduleRedirect {
        delay: REDIRECT_GRACE,
    });
    effects
}

fn fail_backend(state: &mut MonitorState, message: String) -> Vec<Effect> {
    state.set_outcome(TerminalOutcome::BackendError);
    state.mark_failed();
    let mut effects = stop_rotator(state);
    state.set_narrative(narrative::BACKEND_ERROR_NARRATIVE);
    // The server-supplied message is the authoritative error text; the
    // results page renders the final disposition after the redirect.
    state.set_error_text(message);
    effects.push(Effect::ScheduleRedirect {
        delay: REDIRECT_GRACE,
    });
    effects
}

fn fail_transport(state: &mut MonitorState) -> Vec<Effect> {
    state.set_outcome(TerminalOutcome::TransportError);
    state.mark_failed();
    let effects = stop_rotator(state);
    state.set_status_line(narrative::TRANSPORT_ERROR_STATUS);
    state.set_narrative(narrative::TRANSPORT_ERROR_NARRATIVE);
    state.set_error_text(narrative::TRANSPORT_ERROR_PANEL.to_owned());
    state.offer_recovery();
    // No auto-redirect here: recovery is an explicit user action.
    effects
}

fn stop_rotator(state: &mut MonitorState) -> Vec<Effect> {
    if state.rotator() == RotatorState::Idle {
        Vec::new()
    } else {
        state.set_rotator(RotatorState::Idle);
        vec![Effect::CancelRotatorTimers]
    }
}
