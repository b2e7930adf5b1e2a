use monitor_core::Effect;
use monitor_engine::{EngineCommand, EngineHandle, MonitorEvent};
use monitor_logging::monitor_info;

use super::timers::TimerSet;

/// Executes the effects the state machine returns: engine commands for IO,
/// timer operations for everything scheduled.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    timers: TimerSet,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, timers: TimerSet) -> Self {
        Self { engine, timers }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestStatus => {
                    self.engine.submit(EngineCommand::FetchStatus);
                }
                Effect::SchedulePoll { delay } => {
                    self.timers.schedule_poll(delay);
                }
                Effect::StartRotatorDelay { delay } => {
                    self.timers.start_rotator_delay(delay);
                }
                Effect::StartRotatorInterval { period } => {
                    self.timers.start_rotator_interval(period);
                }
                Effect::CancelRotatorTimers => {
                    self.timers.cancel_rotator();
                }
                Effect::ScheduleRedirect { delay } => {
                    self.timers.schedule_redirect(delay);
                }
                Effect::SubmitResults => {
                    monitor_info!("Submitting synthesized results form");
                    self.engine.submit(EngineCommand::SubmitResults);
                }
                Effect::ResetAndRestart => {
                    monitor_info!("Requesting server-side job state reset");
                    self.engine.submit(EngineCommand::ResetProgress);
                }
            }
        }
    }

    pub fn try_event(&self) -> Option<MonitorEvent> {
        self.engine.try_recv()
    }
}
