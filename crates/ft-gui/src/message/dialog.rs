//! Modal dialog messages.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMessage {
    /// Close the open dialog.
    Dismiss,
}
