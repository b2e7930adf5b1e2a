//! Monitor core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod narrative;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, POLL_DELAY, REDIRECT_GRACE, ROTATOR_PERIOD, ROTATOR_START_DELAY};
pub use msg::Msg;
pub use narrative::{
    bucket_for, NarrativeBucket, BACKEND_ERROR_NARRATIVE, COMPLETION_MESSAGE, ROTATING_MESSAGES,
    TRANSPORT_ERROR_NARRATIVE, TRANSPORT_ERROR_PANEL, TRANSPORT_ERROR_STATUS,
};
pub use state::{
    IndicatorTone, MonitorState, ProgressSnapshot, RotatorState, TerminalOutcome,
};
pub use update::update;
pub use view_model::MonitorViewModel;
