//! Finance Tracker - desktop application entry point.

use iced::window;
use iced::{Size, Task};

use ft_core::Config;
use ft_gui::App;
use ft_gui::message::Message;
use tracing_subscriber::EnvFilter;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    tracing::info!(title = %config.window.title, "Starting Finance Tracker");

    let window_config = config.window.clone();
    let boot = move || -> (App, Task<Message>) { App::new(config.clone()) };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(window_config.width, window_config.height),
            min_size: Some(Size::new(window_config.min_width, window_config.min_height)),
            ..Default::default()
        })
        .run()
}
