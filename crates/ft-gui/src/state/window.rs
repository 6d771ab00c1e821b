//! The single main window screens are shown on.

use ft_core::Surface;

/// Tracks which screen the main window shows. `App::view` renders the
/// cached view of that screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainWindow {
    screen: Option<String>,
}

impl MainWindow {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for MainWindow {
    fn present(&mut self, name: &str) {
        self.screen = Some(name.to_string());
    }

    fn presented(&self) -> Option<&str> {
        self.screen.as_deref()
    }
}
