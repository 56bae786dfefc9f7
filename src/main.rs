use std::path::PathBuf;

use clap::Parser;
use eframe::egui::ViewportBuilder;
use outpick::config::{Settings, Variant};
use outpick::gui::OutputApp;

#[derive(Parser)]
#[clap(version, about = "Pick where generated images and videos are written")]
struct Args {
    /// Panel flavour to show
    #[clap(short, long, value_enum)]
    variant: Option<Variant>,

    /// Root directory listed by the folder browser
    #[clap(short, long)]
    base_dir: Option<PathBuf>,

    #[clap(short, long)]
    locale: Option<String>,

    /// Config file to read and update
    #[clap(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(Settings::default_path);
    let mut settings = Settings::load(&config_path);
    if let Some(variant) = args.variant {
        settings.variant = variant;
    }
    if let Some(base_dir) = args.base_dir {
        settings.base_directory = base_dir;
    }
    if let Some(locale) = args.locale {
        settings.locale = locale;
    }
    log::info!("Using config {}", config_path.display());

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size(settings.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Outpick",
        options,
        Box::new(|_cc| Ok(Box::new(OutputApp::new(settings, config_path)))),
    )
}
