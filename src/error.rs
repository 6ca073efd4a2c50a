use thiserror::Error;

/// The anchor element could not be measured, e.g. it is not part of the
/// visible layout. Recoverable: the prompt opens with default placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissingAnchorError {
    #[error("no anchor was supplied")]
    Absent,
    #[error("anchor `{0}` is not in the visible layout")]
    Detached(String),
    #[error("anchor `{0}` has a degenerate bounding box")]
    Degenerate(String),
}
