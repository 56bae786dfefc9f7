use eframe::egui;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp"];
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "mov", "webm", "avi"];

/// Slot handle shared between the panel that owns it and the panels filling it.
pub type SharedSlot = Rc<RefCell<MediaSlot>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_string_lossy().to_lowercase();
        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Image)
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// Preview slot for a generated image or video.
#[derive(Debug, Clone)]
pub struct MediaSlot {
    label: String,
    visible: bool,
    media: Option<PathBuf>,
}

impl MediaSlot {
    pub fn new(label: impl Into<String>, visible: bool) -> Self {
        Self {
            label: label.into(),
            visible,
            media: None,
        }
    }

    pub fn into_shared(self) -> SharedSlot {
        Rc::new(RefCell::new(self))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn media(&self) -> Option<&Path> {
        self.media.as_deref()
    }

    /// Shows `path` in the slot and makes the slot visible.
    pub fn set_media(&mut self, path: impl Into<PathBuf>) {
        self.media = Some(path.into());
        self.visible = true;
    }

    pub fn clear(&mut self) {
        self.media = None;
    }

    pub fn show(&self, ui: &mut egui::Ui, open_label: &str) {
        if !self.visible {
            return;
        }

        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.strong(&self.label);
            match &self.media {
                Some(path) => {
                    ui.horizontal(|ui| {
                        ui.label(path.to_string_lossy().to_string());
                        if ui.button(open_label).clicked() {
                            if let Err(e) = open::that(path) {
                                log::error!("Failed to open {}: {}", path.display(), e);
                            }
                        }
                    });
                }
                None => {
                    ui.weak("-");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_extension() {
        assert_eq!(MediaKind::from_path(Path::new("/out/a.PNG")), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_path(Path::new("/out/a.mp4")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("/out/a.txt")), None);
        assert_eq!(MediaKind::from_path(Path::new("/out/noext")), None);
    }

    #[test]
    fn test_set_media_reveals_slot() {
        let mut slot = MediaSlot::new("Output", false);
        assert!(!slot.is_visible());
        slot.set_media("/out/face.png");
        assert!(slot.is_visible());
        assert_eq!(slot.media(), Some(Path::new("/out/face.png")));
        slot.clear();
        assert_eq!(slot.media(), None);
    }
}
