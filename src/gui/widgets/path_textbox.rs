use eframe::egui;

/// Single-line path field. Edits are reported once the user is done with them.
pub struct PathTextbox {
    label: String,
    value: String,
    committed: String,
    placeholder: String,
    interactive: bool,
}

impl PathTextbox {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: label.into(),
            committed: value.clone(),
            value,
            placeholder: String::new(),
            interactive: true,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.committed = self.value.clone();
    }

    // Returns the new text when it differs from the last committed value
    fn commit(&mut self) -> Option<String> {
        if self.value == self.committed {
            return None;
        }
        self.committed = self.value.clone();
        Some(self.value.clone())
    }

    /// Draws the field and returns the edited text when the user leaves it or
    /// presses Enter after changing it.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<String> {
        ui.label(&self.label);
        let edit = egui::TextEdit::singleline(&mut self.value)
            .hint_text(self.placeholder.as_str())
            .desired_width(f32::INFINITY);
        let response = ui.add_enabled(self.interactive, edit);

        if self.interactive && response.lost_focus() {
            self.commit()
        } else {
            None
        }
    }
}
