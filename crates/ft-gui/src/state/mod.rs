//! Application state management.
//!
//! - **AppState**: root state owning the auth service and the navigator
//! - **MainWindow**: the display surface screens are presented on
//! - **Alert**: the modal dialog currently shown, if any

mod app_state;
mod dialog;
mod window;

pub use app_state::AppState;
pub use dialog::{Alert, AlertKind};
pub use window::MainWindow;
