/// Discrete narrative phase derived from a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeBucket {
    Connecting,
    Fetching,
    Preparing,
    Assembling,
    Rotating,
    Compiling,
    Finalizing,
    Done,
}

/// Maps a progress percentage to its narrative bucket.
///
/// Total over the whole input domain; values above 100 fold into `Done`.
pub fn bucket_for(percent: u8) -> NarrativeBucket {
    match percent {
        0..=9 => NarrativeBucket::Connecting,
        10..=19 => NarrativeBucket::Fetching,
        20..=29 => NarrativeBucket::Preparing,
        30..=39 => NarrativeBucket::Assembling,
        40..=59 => NarrativeBucket::Rotating,
        60..=79 => NarrativeBucket::Compiling,
        80..=99 => NarrativeBucket::Finalizing,
        _ => NarrativeBucket::Done,
    }
}

impl NarrativeBucket {
    /// Static narrative line for this bucket.
    ///
    /// `Rotating` has none: the previous line stays in place until the
    /// rotator's first message lands after its start delay.
    pub fn static_message(self) -> Option<&'static str> {
        match self {
            NarrativeBucket::Connecting => Some("Connecting to last.fm…"),
            NarrativeBucket::Fetching => Some("Getting your tracks…"),
            NarrativeBucket::Preparing => Some("Getting ready…"),
            NarrativeBucket::Assembling => Some("Putting your albums together…"),
            NarrativeBucket::Rotating => None,
            NarrativeBucket::Compiling => Some("Compiling your top album list…"),
            NarrativeBucket::Finalizing => Some("Almost there! Finalizing results…"),
            NarrativeBucket::Done => Some(COMPLETION_MESSAGE),
        }
    }
}

/// Final narrative line once the job reports 100%.
pub const COMPLETION_MESSAGE: &str = "All done! Redirecting in 3 seconds…";

/// "Still working" lines cycled during the indeterminate middle phase.
pub const ROTATING_MESSAGES: [&str; 6] = [
    "Crunching metadata in the background…",
    "Hang tight, this may take a moment…",
    "Still working on your albums…",
    "Checking album data, please wait…",
    "Almost done compiling your albums…",
    "Just a bit longer, we're finalizing your results…",
];

/// Narrative line while a backend-reported failure awaits its redirect.
pub const BACKEND_ERROR_NARRATIVE: &str = "An error occurred. Redirecting shortly…";

/// Status line shown when a status request cannot be completed.
pub const TRANSPORT_ERROR_STATUS: &str = "An error occurred while checking progress.";

/// Narrative guidance accompanying a transport failure.
pub const TRANSPORT_ERROR_NARRATIVE: &str =
    "Please try again, or reset to return to the start page.";

/// Error-panel text for a transport failure. The backend never supplies
/// this one; it is client copy.
pub const TRANSPORT_ERROR_PANEL: &str = "Failed to connect to the server. Please try again.";
