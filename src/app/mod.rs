//! Interactive menu driver.
//!
//! This module follows The Elm Architecture (TEA):
//! - [`Model`]: the document plus queued output
//! - [`Message`]: every command a user can issue
//! - [`update`]: pure state transition
//! - [`App::run`]: prompt loop, rendering and file side effects

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, Notice, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

/// Owns the session settings and runs the prompt loop.
#[derive(Debug, Clone)]
pub struct App {
    initial_file: Option<PathBuf>,
    show_menu: bool,
}

impl App {
    /// Create an app that starts with an empty document and shows the menu.
    pub const fn new() -> Self {
        Self {
            initial_file: None,
            show_menu: true,
        }
    }

    /// Load `path` before the first prompt.
    pub fn with_initial_file(mut self, path: Option<PathBuf>) -> Self {
        self.initial_file = path;
        self
    }

    /// Show or hide the menu before each prompt.
    pub const fn with_menu(mut self, visible: bool) -> Self {
        self.show_menu = visible;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
