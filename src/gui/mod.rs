pub mod panels;
pub mod registry;
pub mod widgets;


use eframe::egui;
use std::path::PathBuf;
use crate::config::Settings;
use crate::gui::panels::{results::ResultsPanel, OutputPanel};
use crate::gui::registry::ComponentRegistry;
use crate::session::Session;
use crate::translator::Translator;

pub struct OutputApp {
    settings: Settings,
    settings_path: PathBuf,
    session: Session,
    registry: ComponentRegistry,
    output_panel: OutputPanel,
    results_panel: ResultsPanel,
    saved_revision: u64,
}

impl OutputApp {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        let translator = Translator::load_or_default(&settings.locale);
        let mut session = Session::new();
        if let Some(path) = settings.last_output_path.as_deref().filter(|p| !p.is_empty()) {
            session.set_output_path(path);
        }

        let mut registry = ComponentRegistry::new();
        let output_panel = OutputPanel::build(settings.variant, &mut session, &translator, &settings, &mut registry);
        let results_panel = ResultsPanel::new(&translator);

        Self {
            settings,
            settings_path,
            saved_revision: session.revision(),
            session,
            registry,
            output_panel,
            results_panel,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    // Persist the output path whenever the session changed since the last save
    fn save_if_changed(&mut self) {
        if self.session.revision() == self.saved_revision {
            return;
        }
        self.saved_revision = self.session.revision();
        self.settings.last_output_path = self.session.output_path().map(str::to_string);
        if let Err(e) = self.settings.save(&self.settings_path) {
            log::error!("Failed to save config: {}", e);
        }
    }
}

impl eframe::App for OutputApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Outpick");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.output_panel.show(ui, &mut self.session);
                    ui.separator();
                    self.results_panel.show(ui, &self.registry, &self.session);
                });
        });

        self.save_if_changed();
    }
}
