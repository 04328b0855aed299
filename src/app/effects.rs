use std::path::Path;

use crate::app::{App, Message, Model, ToastLevel};

impl App {
    /// Carry out the file access that [`crate::app::update`] leaves to the app.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::Save(path) => Self::save_document(model, path),
            Message::Open(path) => Self::open_document(model, path),
            _ => {}
        }
    }

    pub(super) fn save_document(model: &mut Model, path: &Path) {
        let _scope = crate::perf::scope("storage.save");
        match model.save_to(path) {
            Ok(count) => {
                model.notify(
                    ToastLevel::Info,
                    format!("Saved {count} lines to {}.", path.display()),
                );
                crate::perf::log_event("save.ok", format!("path={} lines={count}", path.display()));
            }
            Err(err) => {
                tracing::warn!(%err, "save failed");
                crate::perf::log_event("save.error", format!("path={} err={err}", path.display()));
                model.notify(ToastLevel::Error, err.to_string());
            }
        }
    }

    pub(super) fn open_document(model: &mut Model, path: &Path) {
        let _scope = crate::perf::scope("storage.load");
        match model.load_from(path) {
            Ok(count) => {
                model.notify(
                    ToastLevel::Info,
                    format!("Loaded {count} lines from {}.", path.display()),
                );
                crate::perf::log_event("load.ok", format!("path={} lines={count}", path.display()));
            }
            Err(err) => {
                tracing::warn!(%err, "load failed");
                crate::perf::log_event("load.error", format!("path={} err={err}", path.display()));
                model.notify(ToastLevel::Error, err.to_string());
            }
        }
    }
}
