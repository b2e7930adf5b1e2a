#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The poll delay elapsed (or initial kick-off); time to request status.
    PollDue,
    /// A status response arrived and decoded cleanly.
    SnapshotReceived(crate::ProgressSnapshot),
    /// The status request failed at the transport level.
    PollFailed,
    /// The rotator's one-shot start delay fired.
    RotatorStartDue,
    /// The rotator's repeating interval fired.
    RotatorTick,
    /// The pre-redirect grace delay fired.
    RedirectDue,
    /// The user invoked the transport-recovery action.
    RecoveryRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}
