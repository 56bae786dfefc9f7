use eframe::egui;
use crate::folders::FolderChoice;

/// Combo box over folder choices with a filter field on top.
pub struct SearchableDropdown {
    id_salt: String,
    label: String,
    choices: Vec<FolderChoice>,
    value: String,
    filter: String,
    search_hint: String,
    custom_label: String,
    allow_custom_value: bool,
}

impl SearchableDropdown {
    pub fn new(
        id_salt: impl Into<String>,
        label: impl Into<String>,
        choices: Vec<FolderChoice>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id_salt: id_salt.into(),
            label: label.into(),
            choices,
            value: value.into(),
            filter: String::new(),
            search_hint: String::new(),
            custom_label: String::new(),
            allow_custom_value: false,
        }
    }

    /// Lets the filter text be picked as a value of its own.
    pub fn allow_custom_value(mut self, custom_label: impl Into<String>) -> Self {
        self.allow_custom_value = true;
        self.custom_label = custom_label.into();
        self
    }

    pub fn search_hint(mut self, hint: impl Into<String>) -> Self {
        self.search_hint = hint.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn choices(&self) -> &[FolderChoice] {
        &self.choices
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn allows_custom_value(&self) -> bool {
        self.allow_custom_value
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn selected_label(&self) -> &str {
        self.choices
            .iter()
            .find(|choice| choice.path == self.value)
            .map(|choice| choice.label.as_str())
            .unwrap_or(&self.value)
    }

    /// Choices whose label or path contains the filter, ignoring case.
    pub fn filtered(&self) -> Vec<&FolderChoice> {
        let needle = self.filter.trim().to_lowercase();
        self.choices
            .iter()
            .filter(|choice| {
                needle.is_empty()
                    || choice.label.to_lowercase().contains(&needle)
                    || choice.path.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Selects `value`; returns it when the selection changed.
    pub fn select(&mut self, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        self.filter.clear();
        if value == self.value {
            return None;
        }
        self.value = value.clone();
        Some(value)
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<String> {
        let mut picked: Option<String> = None;
        let selected_text = self.selected_label().to_string();

        ui.label(&self.label);
        egui::ComboBox::from_id_salt(self.id_salt.as_str())
            .selected_text(selected_text)
            .width(ui.available_width())
            .close_behavior(egui::PopupCloseBehavior::CloseOnClickOutside)
            .show_ui(ui, |ui| {
                ui.add(egui::TextEdit::singleline(&mut self.filter).hint_text(self.search_hint.as_str()));

                let custom = self.filter.trim();
                if self.allow_custom_value && !custom.is_empty() {
                    if ui.button(format!("{} \"{}\"", self.custom_label, custom)).clicked() {
                        picked = Some(custom.to_string());
                    }
                }
                ui.separator();

                egui::ScrollArea::vertical()
                    .max_height(300.0)
                    .id_salt("folder_choices")
                    .show(ui, |ui| {
                        for choice in self.filtered() {
                            let selected = choice.path == self.value;
                            if ui
                                .selectable_label(selected, &choice.label)
                                .on_hover_text(&choice.path)
                                .clicked()
                            {
                                picked = Some(choice.path.clone());
                            }
                        }
                    });

                if picked.is_some() {
                    ui.memory_mut(|mem| mem.close_popup());
                }
            });

        picked.and_then(|value| self.select(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dropdown() -> SearchableDropdown {
        SearchableDropdown::new(
            "folders",
            "Output Path",
            vec![
                FolderChoice::new("pCloudDrive", "/cloud"),
                FolderChoice::new("Music", "/cloud/Music"),
                FolderChoice::new("Video / Renders", "/cloud/Video/Renders"),
            ],
            "/cloud/Music",
        )
    }

    #[test]
    fn test_selected_label() {
        let mut dropdown = dropdown();
        assert_eq!(dropdown.selected_label(), "Music");
        dropdown.select("/elsewhere");
        assert_eq!(dropdown.selected_label(), "/elsewhere");
    }

    #[test]
    fn test_filter_matches_label_or_path() {
        let mut dropdown = dropdown();
        dropdown.set_filter("renders");
        let labels: Vec<_> = dropdown.filtered().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Video / Renders"]);

        dropdown.set_filter("");
        assert_eq!(dropdown.filtered().len(), 3);
    }

    fn run_frame(ctx: &egui::Context, dropdown: &mut SearchableDropdown, events: Vec<egui::Event>) -> Option<String> {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let mut changed = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = dropdown.show(ui);
            });
        });
        changed
    }

    fn click(ctx: &egui::Context, dropdown: &mut SearchableDropdown, pos: egui::Pos2) {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        run_frame(ctx, dropdown, vec![egui::Event::PointerMoved(pos), button(true)]);
        run_frame(ctx, dropdown, vec![button(false)]);
        run_frame(ctx, dropdown, vec![]);
    }

    #[test]
    fn test_filter_field_keeps_popup_open_and_takes_text() {
        let ctx = egui::Context::default();
        let mut dropdown = dropdown().allow_custom_value("Use");
        run_frame(&ctx, &mut dropdown, vec![]);

        click(&ctx, &mut dropdown, egui::pos2(40.0, 25.0));
        assert!(ctx.memory(|mem| mem.any_popup_open()));

        click(&ctx, &mut dropdown, egui::pos2(40.0, 51.0));
        assert!(ctx.memory(|mem| mem.any_popup_open()));
        assert!(ctx.memory(|mem| mem.focused()).is_some());

        run_frame(&ctx, &mut dropdown, vec![egui::Event::Text("renders".into())]);
        assert_eq!(dropdown.filter, "renders");
        assert_eq!(dropdown.filtered().len(), 1);
        assert!(ctx.memory(|mem| mem.any_popup_open()));
    }

    #[test]
    fn test_select_reports_changes_once() {
        let mut dropdown = dropdown();
        dropdown.set_filter("vid");
        assert_eq!(dropdown.select("/cloud/Video/Renders"), Some("/cloud/Video/Renders".to_string()));
        assert_eq!(dropdown.filtered().len(), 3);
        assert_eq!(dropdown.select("/cloud/Video/Renders"), None);
    }
}
