use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::anyhow;
use monitor_core::{update, MonitorState, Msg, ProgressSnapshot};
use monitor_engine::{Endpoints, EngineHandle, MonitorEvent, StatusSnapshot};
use monitor_logging::{monitor_info, monitor_warn};

use super::config::MonitorConfig;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::surface::{RenderSurface, TerminalSurface};
use super::theme;
use super::timers::TimerSet;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("monitor.json"));
    let config = MonitorConfig::load(&config_path)?;

    let endpoints = Endpoints::from_base(&config.base_url)
        .map_err(|err| anyhow!("resolving endpoints for {}: {err}", config.base_url))?;
    monitor_info!(
        "Monitoring {} for user {}",
        endpoints.status,
        config.params.username
    );

    let dark_mode = theme::resolve_preference(&config);

    let engine = EngineHandle::new(config.client_settings(), endpoints, config.params.clone());

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(engine, TimerSet::new(msg_tx.clone()));
    let mut surface: Option<Box<dyn RenderSurface>> =
        Some(Box::new(TerminalSurface::new(dark_mode)));
    let mut state = MonitorState::new();

    spawn_recovery_input(msg_tx.clone());

    // The first poll fires immediately; every later one is scheduled by the
    // state machine from the previous response.
    let _ = msg_tx.send(Msg::PollDue);

    loop {
        while let Some(event) = runner.try_event() {
            match event {
                MonitorEvent::StatusFetched {
                    result: Ok(snapshot),
                } => {
                    let _ = msg_tx.send(Msg::SnapshotReceived(into_core_snapshot(snapshot)));
                }
                MonitorEvent::StatusFetched { result: Err(err) } => {
                    monitor_warn!("Status poll failed: {err}");
                    let _ = msg_tx.send(Msg::PollFailed);
                }
                MonitorEvent::ResetFinished { result: Ok(()) } => {
                    monitor_info!("Job state cleared; returning to the start page");
                    return Ok(());
                }
                MonitorEvent::ResetFinished { result: Err(_) } => {
                    // Already logged by the engine; the transport path keeps
                    // the recovery action armed for another attempt.
                    let _ = msg_tx.send(Msg::PollFailed);
                }
                MonitorEvent::SubmitFinished { result } => {
                    if result.is_ok() {
                        monitor_info!("Handed off to the results page");
                    }
                    // Navigation follows whether or not the POST succeeded.
                    return Ok(());
                }
            }
        }

        match msg_rx.recv_timeout(Duration::from_millis(20)) {
            Ok(msg) => dispatch_msg(&mut state, msg, &mut runner, &mut surface),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

fn dispatch_msg(
    state: &mut MonitorState,
    msg: Msg,
    runner: &mut EffectRunner,
    surface: &mut Option<Box<dyn RenderSurface>>,
) {
    let (mut next, effects) = update(std::mem::take(state), msg);
    // Cancellations land before the new frame renders, so a stale rotating
    // message can never overwrite a newer static one.
    runner.run(effects);
    if next.consume_dirty() {
        if let Some(surface) = surface {
            surface.apply(&next.view());
        }
    }
    *state = next;
}

fn spawn_recovery_input(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            if line.is_err() {
                break;
            }
            // The state machine ignores this unless recovery is offered.
            if msg_tx.send(Msg::RecoveryRequested).is_err() {
                break;
            }
        }
    });
}

fn into_core_snapshot(snapshot: StatusSnapshot) -> ProgressSnapshot {
    ProgressSnapshot {
        percent: snapshot.percent,
        message: snapshot.message,
        error: snapshot.error,
    }
}
