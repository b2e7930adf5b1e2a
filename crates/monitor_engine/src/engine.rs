use std::sync::{mpsc, Arc};
use std::thread;

use monitor_logging::monitor_warn;

use crate::status::{ReqwestStatusApi, StatusApi};
use crate::{ClientSettings, Endpoints, MonitorEvent, ResultParameters};

/// Work the driver can hand to the engine. Each command produces exactly
/// one `MonitorEvent` on the event channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    FetchStatus,
    ResetProgress,
    SubmitResults,
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<MonitorEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings, endpoints: Endpoints, params: ResultParameters) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestStatusApi::new(settings, endpoints));
        let params = Arc::new(params);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let params = params.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), &params, command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }

    pub fn try_recv(&self) -> Option<MonitorEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn StatusApi,
    params: &ResultParameters,
    command: EngineCommand,
    event_tx: mpsc::Sender<MonitorEvent>,
) {
    let event = match command {
        EngineCommand::FetchStatus => MonitorEvent::StatusFetched {
            result: api.fetch_status().await,
        },
        EngineCommand::ResetProgress => {
            let result = api.reset_progress().await;
            if let Err(err) = &result {
                monitor_warn!("reset request failed: {err}");
            }
            MonitorEvent::ResetFinished { result }
        }
        EngineCommand::SubmitResults => {
            let result = api.submit_results(params).await;
            if let Err(err) = &result {
                monitor_warn!("results submission failed: {err}");
            }
            MonitorEvent::SubmitFinished { result }
        }
    };
    let _ = event_tx.send(event);
}
