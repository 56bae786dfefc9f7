use std::path::PathBuf;
use crate::config::Settings;
use crate::folders::{FolderChoice, FolderTree};
use crate::paths;
use crate::session::Session;

/// Preferred output directory when present on disk, the temp directory otherwise.
pub fn resolve_default_output_path(settings: &Settings) -> PathBuf {
    paths::existing_or_temp(&settings.preferred_output_directory)
}

/// Seeds the session's output path when it is unset and returns the current one.
pub fn ensure_output_path(session: &mut Session, settings: &Settings) -> String {
    if let Some(path) = session.output_path() {
        return path.to_string();
    }
    let default = paths::to_string(&resolve_default_output_path(settings));
    log::info!("Output path defaults to {}", default);
    session.set_output_path(default.clone());
    default
}

/// Folder choices with `current` prepended when the scan did not find it.
pub fn choices_with_current(tree: &FolderTree, current: &str) -> Vec<FolderChoice> {
    let mut choices = tree.create_folder_choices();
    if !current.is_empty() && !choices.iter().any(|choice| choice.path == current) {
        let label = tree.format_label(std::path::Path::new(current));
        choices.insert(0, FolderChoice::new(label, current));
    }
    choices
}

/// Stores a non-empty selection; otherwise leaves the session untouched and
/// returns the stored path.
pub fn update_output_path(session: &mut Session, selected_path: Option<&str>) -> String {
    match selected_path.filter(|path| !path.is_empty()) {
        Some(path) => {
            session.set_output_path(path);
            path.to_string()
        }
        None => session.output_path().unwrap_or_default().to_string(),
    }
}
