use eframe::egui;
use crate::config::Settings;
use crate::gui::registry::ComponentRegistry;
use crate::gui::widgets::{PathTextbox, SharedSlot};
use crate::paths;
use crate::session::Session;
use crate::translator::Translator;
use super::actions;

pub struct FreeTextComponents {
    pub output_path_textbox: PathTextbox,
    pub output_image: SharedSlot,
    pub output_video: SharedSlot,
    open_label: String,
}

pub fn render(session: &mut Session, translator: &Translator, settings: &Settings) -> FreeTextComponents {
    let output_path = actions::ensure_output_path(session, settings);
    let placeholder = paths::to_string(&actions::resolve_default_output_directory(settings));

    let output_path_textbox = PathTextbox::new(translator.get("uis.output_path_textbox"), output_path)
        .with_placeholder(placeholder);
    let (output_image, output_video) = super::super::create_output_slots(translator);

    FreeTextComponents {
        output_path_textbox,
        output_image,
        output_video,
        open_label: translator.get("uis.open_media"),
    }
}

pub fn listen(components: FreeTextComponents, registry: &mut ComponentRegistry, settings: &Settings) -> FreeTextPanel {
    super::super::register_output_slots(registry, &components.output_image, &components.output_video);
    FreeTextPanel {
        components,
        settings: settings.clone(),
    }
}

pub struct FreeTextPanel {
    components: FreeTextComponents,
    settings: Settings,
}

impl FreeTextPanel {
    pub fn components(&self) -> &FreeTextComponents {
        &self.components
    }

    /// Runs the textbox change handler and shows the normalized path.
    pub fn on_output_path_changed(&mut self, session: &mut Session, output_path: &str) {
        let output_path = actions::update_output_path_from_textbox(session, &self.settings, output_path);
        self.components.output_path_textbox.set_value(output_path);
    }

    pub fn show(&mut self, ui: &mut egui::Ui, session: &mut Session) {
        if let Some(output_path) = self.components.output_path_textbox.show(ui) {
            self.on_output_path_changed(session, &output_path);
        }
        ui.add_space(8.0);

        let open_label = &self.components.open_label;
        self.components.output_image.borrow().show(ui, open_label);
        self.components.output_video.borrow().show(ui, open_label);
    }
}
