use thiserror::Error;

/// Failures reported by a [`Surface`](crate::Surface). These are logged by the
/// caller and never propagated out of the core.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("mount point `{0}` is missing")]
    MissingMount(&'static str),
    #[error("host refused to create a {kind} node: {reason}")]
    CreateFailed { kind: &'static str, reason: String },
}

/// Host signals that could not be read at startup.
#[derive(Debug, Error)]
pub enum HostError {
    /// No frame clock or visibility primitive: the core runs inert.
    #[error("host frame clock is unavailable")]
    ClockUnavailable,
    /// A capability hint could not be read: mid-tier defaults are assumed.
    #[error("capability hint `{0}` is unavailable")]
    MissingSignal(&'static str),
}
