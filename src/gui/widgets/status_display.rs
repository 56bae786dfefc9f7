use eframe::egui;

#[derive(Default)]
pub struct StatusDisplay {
    message: Option<String>,
    is_error: bool,
}

impl StatusDisplay {
    pub fn set_message(&mut self, message: impl Into<String>, is_error: bool) {
        self.message = Some(message.into());
        self.is_error = is_error;
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.set_message(message, false);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.set_message(message, true);
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if let Some(message) = &self.message {
            let color = if self.is_error {
                ui.style().visuals.error_fg_color
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(color, message);
        }
    }
}
