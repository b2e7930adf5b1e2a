use std::fmt;

use serde::Deserialize;
use url::Url;

/// Decoded status-endpoint payload, clamped to the documented 0–100 domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub percent: u8,
    pub message: String,
    pub error: bool,
}

/// Raw wire form of the status payload. The backend omits `error` in the
/// nominal case and may report out-of-range progress while resetting.
#[derive(Debug, Deserialize)]
pub(crate) struct WireStatus {
    pub progress: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error: bool,
}

impl From<WireStatus> for StatusSnapshot {
    fn from(wire: WireStatus) -> Self {
        Self {
            percent: wire.progress.clamp(0, 100) as u8,
            message: wire.message,
            error: wire.error,
        }
    }
}

/// Events reported by the engine back to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    StatusFetched {
        result: Result<StatusSnapshot, StatusError>,
    },
    ResetFinished {
        result: Result<(), StatusError>,
    },
    SubmitFinished {
        result: Result<(), StatusError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    pub kind: TransportFailureKind,
    pub message: String,
}

impl StatusError {
    pub(crate) fn new(kind: TransportFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    InvalidBody,
    Network,
}

impl fmt::Display for TransportFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportFailureKind::InvalidUrl => write!(f, "invalid url"),
            TransportFailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            TransportFailureKind::Timeout => write!(f, "timeout"),
            TransportFailureKind::InvalidBody => write!(f, "invalid response body"),
            TransportFailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Backend endpoints resolved once from the injected base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub status: Url,
    pub reset: Url,
    pub results: Url,
    pub start_page: Url,
}

impl Endpoints {
    pub fn from_base(base: &str) -> Result<Self, StatusError> {
        let base = Url::parse(base)
            .map_err(|err| StatusError::new(TransportFailureKind::InvalidUrl, err.to_string()))?;
        let join = |path: &str| {
            base.join(path)
                .map_err(|err| StatusError::new(TransportFailureKind::InvalidUrl, err.to_string()))
        };
        Ok(Self {
            status: join("/progress")?,
            reset: join("/reset_progress")?,
            results: join("/results_complete")?,
            start_page: join("/")?,
        })
    }
}
