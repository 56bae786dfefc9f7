pub mod actions;

use eframe::egui;
use std::path::PathBuf;
use crate::gui::registry::ComponentRegistry;
use crate::gui::widgets::{StatusDisplay, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use crate::session::Session;
use crate::translator::Translator;

/// Fills the registered output slots with a result picked from disk.
pub struct ResultsPanel {
    status: StatusDisplay,
    load_label: String,
    no_slot_message: String,
    unsupported_message: String,
}

impl ResultsPanel {
    pub fn new(translator: &Translator) -> Self {
        Self {
            status: StatusDisplay::default(),
            load_label: translator.get("uis.load_result"),
            no_slot_message: translator.get("uis.no_result_slot"),
            unsupported_message: translator.get("uis.unsupported_media"),
        }
    }

    pub fn status(&self) -> &StatusDisplay {
        &self.status
    }

    pub fn load_result(&mut self, registry: &ComponentRegistry, path: PathBuf) {
        match actions::publish_result(registry, &path) {
            Ok(_) => self.status.set_info(path.to_string_lossy().to_string()),
            Err(e @ actions::Error::UnsupportedMedia { .. }) => {
                log::warn!("{}", e);
                self.status.set_error(format!("{}: {}", self.unsupported_message, path.display()));
            }
            Err(e @ actions::Error::MissingSlot { .. }) => {
                log::warn!("{}", e);
                self.status.set_error(self.no_slot_message.clone());
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, registry: &ComponentRegistry, session: &Session) {
        ui.horizontal(|ui| {
            if ui.button(&self.load_label).clicked() {
                let extensions: Vec<&str> = IMAGE_EXTENSIONS.iter().chain(VIDEO_EXTENSIONS).copied().collect();
                let mut dialog = rfd::FileDialog::new()
                    .set_title(self.load_label.as_str())
                    .add_filter("Media", extensions.as_slice());
                if let Some(output_path) = session.output_path() {
                    dialog = dialog.set_directory(output_path);
                }
                if let Some(path) = dialog.pick_file() {
                    self.load_result(registry, path);
                }
            }
            self.status.show(ui);
        });
    }
}
