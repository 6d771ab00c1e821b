//! View cache and screen switching.

use std::cell::Cell;

use ft_core::error::NavigationError;
use ft_core::navigation::{Navigator, Surface, ViewFactory};

#[derive(Debug)]
struct TestView {
    name: String,
    serial: usize,
}

/// Builds views for a fixed set of names and counts constructions.
#[derive(Default)]
struct CountingFactory {
    built: Cell<usize>,
}

impl ViewFactory for CountingFactory {
    type View = TestView;
    type Context = ();

    fn build(&self, name: &str, _context: &()) -> Result<TestView, NavigationError> {
        match name {
            "login" | "register" | "dashboard" => {
                let serial = self.built.get() + 1;
                self.built.set(serial);
                Ok(TestView {
                    name: name.to_string(),
                    serial,
                })
            }
            "broken" => Err(NavigationError::malformed("layouts/broken.toml", "bad")),
            _ => Err(NavigationError::UnknownScreen {
                name: name.to_string(),
            }),
        }
    }
}

/// Records every screen it is asked to present.
#[derive(Default)]
struct RecordingSurface {
    shown: Vec<String>,
}

impl Surface for RecordingSurface {
    fn present(&mut self, name: &str) {
        self.shown.push(name.to_string());
    }

    fn presented(&self) -> Option<&str> {
        self.shown.last().map(String::as_str)
    }
}

fn navigator() -> Navigator<CountingFactory, RecordingSurface> {
    let mut nav = Navigator::new(CountingFactory::default());
    nav.initialize(RecordingSurface::default());
    nav
}

fn address(view: &TestView) -> *const TestView {
    view
}

#[test]
fn repeated_switch_reuses_instance() {
    let mut nav = navigator();

    let first = address(nav.switch_scene("login", &()).expect("login"));
    nav.switch_scene("register", &()).expect("register");
    nav.switch_scene("dashboard", &()).expect("dashboard");
    let second = address(nav.switch_scene("login", &()).expect("login again"));

    assert_eq!(first, second);
    assert_eq!(nav.active().map(|v| v.serial), Some(1));
}

#[test]
fn clear_cache_rebuilds() {
    let mut nav = navigator();

    let first_serial = nav.switch_scene("login", &()).expect("login").serial;
    assert_eq!(nav.switch_scene("login", &()).expect("login").serial, first_serial);

    nav.clear_cache();
    assert!(!nav.is_cached("login"));
    assert_eq!(nav.active_name(), Some("login"));
    assert!(nav.active().is_none());

    let rebuilt = nav.switch_scene("login", &()).expect("login rebuilt");
    assert_ne!(rebuilt.serial, first_serial);
}

#[test]
fn failed_build_keeps_previous_screen() {
    let mut nav = navigator();
    nav.switch_scene("login", &()).expect("login");

    assert!(nav.switch_scene("reports", &()).is_none());
    assert!(nav.switch_scene("broken", &()).is_none());

    assert_eq!(nav.active_name(), Some("login"));
    assert_eq!(nav.active().map(|v| v.name.as_str()), Some("login"));
    assert!(!nav.is_cached("reports"));
    assert_eq!(nav.surface().map(|s| s.shown.len()), Some(1));
}

#[test]
fn errors_are_reported_by_try_variant() {
    let mut nav = navigator();
    assert_eq!(
        nav.try_switch_scene("reports", &()).map(|_| ()),
        Err(NavigationError::UnknownScreen {
            name: "reports".to_string()
        })
    );
    assert!(matches!(
        nav.try_switch_scene("broken", &()),
        Err(NavigationError::MalformedResource { .. })
    ));
}

#[test]
fn switch_before_initialize_fails() {
    let mut nav: Navigator<CountingFactory, RecordingSurface> =
        Navigator::new(CountingFactory::default());

    assert_eq!(
        nav.try_switch_scene("login", &()).map(|_| ()),
        Err(NavigationError::NotInitialized)
    );
    assert!(nav.switch_scene("login", &()).is_none());
    assert!(!nav.is_cached("login"));
}

#[test]
fn cached_views_are_mutable_in_place() {
    let mut nav = navigator();
    nav.switch_scene("login", &()).expect("login").name.push_str("-edited");
    nav.switch_scene("register", &()).expect("register");

    assert_eq!(
        nav.cached("login").map(|v| v.name.as_str()),
        Some("login-edited")
    );
    if let Some(view) = nav.active_mut() {
        view.name.push('!');
    }
    assert_eq!(
        nav.cached_mut("register").map(|v| v.name.clone()),
        Some("register!".to_string())
    );
}
