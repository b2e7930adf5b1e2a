use std::sync::Once;
use std::time::Duration;

use monitor_core::{
    update, Effect, MonitorState, Msg, ProgressSnapshot, RotatorState, ROTATING_MESSAGES,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(monitor_logging::initialize_for_tests);
}

fn snapshot(percent: u8) -> Msg {
    Msg::SnapshotReceived(ProgressSnapshot {
        percent,
        message: format!("at {percent}"),
        error: false,
    })
}

const START_DELAY: Effect = Effect::StartRotatorDelay {
    delay: Duration::from_millis(5000),
};
const NEXT_POLL: Effect = Effect::SchedulePoll {
    delay: Duration::from_millis(1000),
};

#[test]
fn entering_rotating_schedules_a_single_start_delay() {
    init_logging();
    let state = MonitorState::new();

    let (state, effects) = update(state, snapshot(45));
    assert_eq!(effects, vec![START_DELAY, NEXT_POLL]);
    assert_eq!(state.rotator(), RotatorState::PendingStart);

    // Held in the same bucket across further polls: no second start timer.
    let (state, effects) = update(state, snapshot(45));
    assert_eq!(effects, vec![NEXT_POLL]);
    let (state, effects) = update(state, snapshot(52));
    assert_eq!(effects, vec![NEXT_POLL]);
    assert_eq!(state.rotator(), RotatorState::PendingStart);
}

#[test]
fn start_delay_begins_cycling_with_the_first_message() {
    init_logging();
    let state = MonitorState::new();
    let (state, _effects) = update(state, snapshot(45));

    let (state, effects) = update(state, Msg::RotatorStartDue);

    assert_eq!(state.rotator(), RotatorState::Cycling { index: 0 });
    assert_eq!(state.view().narrative_line, ROTATING_MESSAGES[0]);
    assert_eq!(
        effects,
        vec![Effect::StartRotatorInterval {
            period: Duration::from_millis(7000),
        }]
    );

    // Later polls in the same bucket leave the running rotator alone.
    let (state, effects) = update(state, snapshot(55));
    assert_eq!(effects, vec![NEXT_POLL]);
    assert_eq!(state.rotator(), RotatorState::Cycling { index: 0 });
}

#[test]
fn interval_ticks_advance_and_wrap_cyclically() {
    init_logging();
    let state = MonitorState::new();
    let (state, _effects) = update(state, snapshot(45));
    let (mut state, _effects) = update(state, Msg::RotatorStartDue);

    for expected in 1..ROTATING_MESSAGES.len() {
        let (next, effects) = update(state, Msg::RotatorTick);
        assert!(effects.is_empty());
        assert_eq!(next.view().narrative_line, ROTATING_MESSAGES[expected]);
        state = next;
    }

    // One more tick wraps back to the first entry.
    let (state, _effects) = update(state, Msg::RotatorTick);
    assert_eq!(state.view().narrative_line, ROTATING_MESSAGES[0]);
    assert_eq!(state.rotator(), RotatorState::Cycling { index: 0 });
}

#[test]
fn leaving_rotating_cancels_timers_and_silences_stale_ticks() {
    init_logging();
    let state = MonitorState::new();
    let (state, _effects) = update(state, snapshot(45));
    let (state, _effects) = update(state, Msg::RotatorStartDue);
    let (state, _effects) = update(state, Msg::RotatorTick);

    let (mut state, effects) = update(state, snapshot(65));

    assert_eq!(effects, vec![Effect::CancelRotatorTimers, NEXT_POLL]);
    assert_eq!(state.rotator(), RotatorState::Idle);
    assert_eq!(state.view().narrative_line, "Compiling your top album list…");
    assert!(state.consume_dirty());

    // An interval tick that raced the cancellation must not change anything,
    // however much later it arrives.
    let (mut state, effects) = update(state, Msg::RotatorTick);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view().narrative_line, "Compiling your top album list…");
}

#[test]
fn stale_start_delay_after_cancellation_is_ignored() {
    init_logging();
    let state = MonitorState::new();
    let (state, _effects) = update(state, snapshot(45));
    let (state, effects) = update(state, snapshot(20));
    assert_eq!(effects, vec![Effect::CancelRotatorTimers, NEXT_POLL]);

    let (state, effects) = update(state, Msg::RotatorStartDue);

    assert!(effects.is_empty());
    assert_eq!(state.rotator(), RotatorState::Idle);
}

#[test]
fn reentry_restarts_the_cycle_from_the_first_message() {
    init_logging();
    let state = MonitorState::new();
    let (state, _effects) = update(state, snapshot(45));
    let (state, _effects) = update(state, Msg::RotatorStartDue);
    let (state, _effects) = update(state, Msg::RotatorTick);
    let (state, _effects) = update(state, Msg::RotatorTick);

    // Leave, then come back: a fresh start delay, and the index resets.
    let (state, _effects) = update(state, snapshot(70));
    let (state, effects) = update(state, snapshot(45));
    assert_eq!(effects, vec![START_DELAY, NEXT_POLL]);

    let (state, _effects) = update(state, Msg::RotatorStartDue);
    assert_eq!(state.rotator(), RotatorState::Cycling { index: 0 });
    assert_eq!(state.view().narrative_line, ROTATING_MESSAGES[0]);
}

#[test]
fn percent_decrease_is_a_normal_bucket_reevaluation() {
    init_logging();
    let state = MonitorState::new();
    let (state, _effects) = update(state, snapshot(55));
    assert_eq!(state.rotator(), RotatorState::PendingStart);

    // A dip below the indeterminate range cancels the pending start.
    let (state, effects) = update(state, snapshot(35));
    assert_eq!(effects, vec![Effect::CancelRotatorTimers, NEXT_POLL]);
    assert_eq!(
        state.view().narrative_line,
        "Putting your albums together…"
    );
}

#[test]
fn interval_tick_without_a_running_rotator_is_a_noop() {
    init_logging();
    let state = MonitorState::new();

    let (mut state, effects) = update(state, Msg::RotatorTick);

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
