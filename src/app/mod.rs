// SPDX-License-Identifier: MPL-2.0
//! Demo dashboard wiring the feedback utilities into an Iced application.
//!
//! The `App` owns the notification `Manager` and the dialog `Controller`,
//! installs their process-wide handles at boot and layers both overlays over
//! a course list whose row actions confirm first and report with a toast.

pub mod courses;
mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::Config;
use crate::ui::confirm::{self, ConfirmMessage, Confirmer, Controller};
use crate::ui::notifications::{self, Manager, Notification, NotificationMessage, Notifier};
use crate::ui::theming::ThemeMode;
use courses::Catalog;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    config: Config,
    theme_mode: ThemeMode,
    catalog: Catalog,
    notifications: Manager,
    dialog: Controller,
    notifier: Notifier,
    confirmer: Confirmer,
    /// Timestamp used for rendering countdowns and fades.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("courses", &self.catalog.len())
            .field("toasts", &self.notifications.len())
            .field("dialog", &self.dialog.phase())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, config: Config, config_warning: Option<String>) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot; hand the startup state over only once
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, warning) = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(|| (Flags::default(), Config::default(), None));
        App::new(flags, config, warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the application and installs the process-wide notifier and
    /// confirmer.
    pub fn new(flags: Flags, config: Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);

        let notifier = notifications::install(config.notifications.default_lifetime());
        let confirmer = confirm::install();

        let mut app = Self {
            theme_mode,
            catalog: Catalog::sample(),
            notifications: Manager::new()
                .with_close_animation(config.notifications.close_animation()),
            dialog: Controller::new().with_exit_animation(config.dialog.exit_animation()),
            notifier,
            confirmer,
            now: Instant::now(),
            config,
        };

        if let Some(warning) = config_warning {
            app.notifications.push(
                Notification::warning(warning).with_title("Settings not loaded"),
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Institute Dashboard - Courses")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_inbox_subscriptions(),
            subscription::create_dialog_keyboard_subscription(self.dialog.is_open()),
            subscription::create_toast_frame_subscription(self.notifications.needs_frames()),
            subscription::create_dialog_frame_subscription(self.dialog.needs_frames()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        // Frames carry the redraw timestamp; everything else uses the clock
        self.now = match &message {
            Message::Notification(NotificationMessage::Frame(at))
            | Message::Confirm(ConfirmMessage::Frame(at)) => *at,
            _ => Instant::now(),
        };

        match message {
            Message::Notification(message) => {
                self.notifications.handle_message(message);
                Task::none()
            }
            Message::Confirm(message) => {
                self.dialog.handle_message(message);
                Task::none()
            }
            Message::DeleteCourse(id) => {
                update::handle_delete_course(&self.catalog, &self.confirmer, id)
            }
            Message::DeleteConfirmed(id, confirmed) => {
                update::handle_delete_confirmed(&mut self.catalog, &self.notifier, id, confirmed);
                Task::none()
            }
            Message::UpdateCourse(id) => {
                update::handle_update_course(&self.catalog, &self.confirmer, id)
            }
            Message::UpdateConfirmed(id, confirmed) => {
                update::handle_update_confirmed(&mut self.catalog, &self.notifier, id, confirmed);
                Task::none()
            }
            Message::SimulateFailure => {
                update::handle_simulated_failure(&self.notifier);
                Task::none()
            }
            Message::RaiseWarning => {
                update::handle_raise_warning(&self.notifier);
                Task::none()
            }
            Message::SyncCatalog => {
                update::handle_sync_catalog(&self.catalog);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            catalog: &self.catalog,
            notifications: &self.notifications,
            dialog: &self.dialog,
            position: self.config.notifications.position,
            now: self.now,
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        notifications::uninstall();
        confirm::uninstall();
    }
}
