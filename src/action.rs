#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NavigateUp,
    NavigateDown,
    Delete,
    ConfirmYes,
    ConfirmNo,
    /// Esc while the prompt is up.
    Dismiss,
    ToggleDirection,
    CycleSide,
    Click { column: u16, row: u16 },
    None,
}
