pub mod folder_browser;
pub mod free_text;
pub mod results;

use eframe::egui;
use std::rc::Rc;
use crate::config::{Settings, Variant};
use crate::gui::registry::{ComponentName, ComponentRegistry};
use crate::gui::widgets::{MediaSlot, SharedSlot};
use crate::session::Session;
use crate::translator::Translator;

/// Image slot (hidden until a result arrives) and video slot.
pub(crate) fn create_output_slots(translator: &Translator) -> (SharedSlot, SharedSlot) {
    let label = translator.get("uis.output_image_or_video");
    (
        MediaSlot::new(label.clone(), false).into_shared(),
        MediaSlot::new(label, true).into_shared(),
    )
}

pub(crate) fn register_output_slots(registry: &mut ComponentRegistry, image: &SharedSlot, video: &SharedSlot) {
    registry.register_ui_component(ComponentName::OutputImage, Rc::clone(image));
    registry.register_ui_component(ComponentName::OutputVideo, Rc::clone(video));
}

/// One of the two output path panels, already rendered and bound.
pub enum OutputPanel {
    FolderBrowser(folder_browser::FolderBrowserPanel),
    FreeText(free_text::FreeTextPanel),
}

impl OutputPanel {
    pub fn build(
        variant: Variant,
        session: &mut Session,
        translator: &Translator,
        settings: &Settings,
        registry: &mut ComponentRegistry,
    ) -> Self {
        match variant {
            Variant::FolderBrowser => {
                let components = folder_browser::render(session, translator, settings);
                Self::FolderBrowser(folder_browser::listen(components, registry))
            }
            Variant::FreeText => {
                let components = free_text::render(session, translator, settings);
                Self::FreeText(free_text::listen(components, registry, settings))
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, session: &mut Session) {
        match self {
            Self::FolderBrowser(panel) => panel.show(ui, session),
            Self::FreeText(panel) => panel.show(ui, session),
        }
    }
}
