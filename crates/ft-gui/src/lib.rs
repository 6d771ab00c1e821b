//! Finance Tracker - GUI library.
//!
//! Desktop shell built with iced 0.14 on the Elm architecture: account
//! screens (login, registration, dashboard) over [`ft_core`]'s auth service
//! and navigator.

pub mod app;
pub mod component;
pub mod handler;
pub mod message;
pub mod screen;
pub mod state;
pub mod theme;

pub use app::App;
