//! Monitor engine: HTTP plumbing and effect execution.
mod engine;
mod persist;
mod redirect;
mod status;
mod types;

pub use engine::{EngineCommand, EngineHandle};
pub use persist::{ensure_store_dir, AtomicFileWriter, PersistError};
pub use redirect::ResultParameters;
pub use status::{ClientSettings, ReqwestStatusApi, StatusApi};
pub use types::{
    Endpoints, MonitorEvent, StatusError, StatusSnapshot, TransportFailureKind,
};
