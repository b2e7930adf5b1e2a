use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use monitor_core::Msg;

/// Handle to a running timer thread. Dropping the handle cancels the
/// timer; a cancelled timer wakes, sees the flag, and exits without
/// posting its message.
struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

fn spawn_oneshot(msg_tx: mpsc::Sender<Msg>, delay: Duration, msg: Msg) -> TimerHandle {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = cancelled.clone();
    thread::spawn(move || {
        thread::sleep(delay);
        if !flag.load(Ordering::Relaxed) {
            let _ = msg_tx.send(msg);
        }
    });
    TimerHandle { cancelled }
}

fn spawn_interval(msg_tx: mpsc::Sender<Msg>, period: Duration, msg: Msg) -> TimerHandle {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = cancelled.clone();
    thread::spawn(move || loop {
        thread::sleep(period);
        if flag.load(Ordering::Relaxed) {
            break;
        }
        if msg_tx.send(msg.clone()).is_err() {
            break;
        }
    });
    TimerHandle { cancelled }
}

/// Owner of every timer the state machine can schedule. No timer exists
/// here that this set cannot also cancel.
pub(crate) struct TimerSet {
    msg_tx: mpsc::Sender<Msg>,
    poll: Option<TimerHandle>,
    rotator_delay: Option<TimerHandle>,
    rotator_interval: Option<TimerHandle>,
    redirect: Option<TimerHandle>,
}

impl TimerSet {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        Self {
            msg_tx,
            poll: None,
            rotator_delay: None,
            rotator_interval: None,
            redirect: None,
        }
    }

    pub fn schedule_poll(&mut self, delay: Duration) {
        self.poll = Some(spawn_oneshot(self.msg_tx.clone(), delay, Msg::PollDue));
    }

    pub fn start_rotator_delay(&mut self, delay: Duration) {
        self.rotator_delay = Some(spawn_oneshot(
            self.msg_tx.clone(),
            delay,
            Msg::RotatorStartDue,
        ));
    }

    pub fn start_rotator_interval(&mut self, period: Duration) {
        // The start delay has fired by now; its slot is spent either way.
        self.rotator_delay.take();
        self.rotator_interval = Some(spawn_interval(
            self.msg_tx.clone(),
            period,
            Msg::RotatorTick,
        ));
    }

    pub fn cancel_rotator(&mut self) {
        self.rotator_delay.take();
        self.rotator_interval.take();
    }

    pub fn schedule_redirect(&mut self, delay: Duration) {
        self.redirect = Some(spawn_oneshot(self.msg_tx.clone(), delay, Msg::RedirectDue));
    }
}
