use eframe::egui;
use crate::config::Settings;
use crate::folders::FolderTree;
use crate::gui::registry::ComponentRegistry;
use crate::gui::widgets::{PathTextbox, SearchableDropdown, SharedSlot};
use crate::session::Session;
use crate::translator::Translator;
use super::actions;

/// Widgets built by [`render`], handed to [`listen`] to be wired up.
pub struct FolderBrowserComponents {
    pub folder_dropdown: SearchableDropdown,
    pub output_path_textbox: PathTextbox,
    pub output_image: SharedSlot,
    pub output_video: SharedSlot,
    open_label: String,
}

pub fn render(session: &mut Session, translator: &Translator, settings: &Settings) -> FolderBrowserComponents {
    let selected_output_path = actions::ensure_output_path(session, settings);
    let tree = FolderTree::new(&settings.base_directory);
    let choices = actions::choices_with_current(&tree, &selected_output_path);

    let dropdown_label = format!(
        "{} {}",
        translator.get("uis.output_path_textbox"),
        translator.get("uis.output_path_searchable")
    );
    let folder_dropdown = SearchableDropdown::new("output_folder_dropdown", dropdown_label, choices, selected_output_path.as_str())
        .search_hint(translator.get("uis.search_placeholder"))
        .allow_custom_value(translator.get("uis.use_custom_value"));
    let output_path_textbox = PathTextbox::new(translator.get("uis.selected_output_path"), selected_output_path)
        .interactive(false);
    let (output_image, output_video) = super::super::create_output_slots(translator);

    FolderBrowserComponents {
        folder_dropdown,
        output_path_textbox,
        output_image,
        output_video,
        open_label: translator.get("uis.open_media"),
    }
}

pub fn listen(components: FolderBrowserComponents, registry: &mut ComponentRegistry) -> FolderBrowserPanel {
    super::super::register_output_slots(registry, &components.output_image, &components.output_video);
    FolderBrowserPanel { components }
}

pub struct FolderBrowserPanel {
    components: FolderBrowserComponents,
}

impl FolderBrowserPanel {
    pub fn components(&self) -> &FolderBrowserComponents {
        &self.components
    }

    /// Runs the dropdown change handler and mirrors the result into the textbox.
    pub fn on_folder_selected(&mut self, session: &mut Session, selected: Option<&str>) {
        let output_path = actions::update_output_path(session, selected);
        self.components.output_path_textbox.set_value(output_path);
    }

    pub fn show(&mut self, ui: &mut egui::Ui, session: &mut Session) {
        if let Some(selected) = self.components.folder_dropdown.show(ui) {
            self.on_folder_selected(session, Some(&selected));
        }
        ui.add_space(4.0);
        self.components.output_path_textbox.show(ui);
        ui.add_space(8.0);

        let open_label = &self.components.open_label;
        self.components.output_image.borrow().show(ui, open_label);
        self.components.output_video.borrow().show(ui, open_label);
    }
}
