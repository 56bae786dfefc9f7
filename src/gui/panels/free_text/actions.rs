use std::path::PathBuf;
use crate::config::Settings;
use crate::paths;
use crate::session::Session;

/// `<installation dir>/output` when it exists, the temp directory otherwise.
pub fn resolve_default_output_directory(settings: &Settings) -> PathBuf {
    paths::resolve_default_output_directory(settings.installation_directory().as_deref())
}

/// Seeds the session's output path when it is unset and returns the current one.
pub fn ensure_output_path(session: &mut Session, settings: &Settings) -> String {
    if let Some(path) = session.output_path() {
        return path.to_string();
    }
    let default = paths::to_string(&resolve_default_output_directory(settings));
    log::info!("Output path defaults to {}", default);
    session.set_output_path(default.clone());
    default
}

/// Stores the expanded, absolute form of `output_path`. An empty entry resets
/// the session to the default output directory.
pub fn update_output_path_from_textbox(session: &mut Session, settings: &Settings, output_path: &str) -> String {
    if output_path.is_empty() {
        session.clear_output_path();
        return ensure_output_path(session, settings);
    }

    let normalized = paths::to_string(&paths::expand_and_normalize(output_path));
    session.set_output_path(normalized.clone());
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_for(install: &std::path::Path) -> Settings {
        Settings {
            installation_directory: Some(install.to_path_buf()),
            ..Settings::default()
        }
    }

    #[test]
    fn test_empty_entry_resets_to_default() {
        let install = tempfile::tempdir().unwrap();
        std::fs::create_dir(install.path().join("output")).unwrap();
        let settings = settings_for(install.path());
        let mut session = Session::new();
        session.set_output_path("/srv/renders");
        let revision = session.revision();

        let default = update_output_path_from_textbox(&mut session, &settings, "");
        assert_eq!(default, install.path().join("output").to_string_lossy());
        assert_eq!(session.output_path(), Some(default.as_str()));
        // cleared, then reseeded
        assert_eq!(session.revision(), revision + 2);
    }

    #[test]
    fn test_home_is_expanded() {
        let install = tempfile::tempdir().unwrap();
        let settings = settings_for(install.path());
        let mut session = Session::new();

        let stored = update_output_path_from_textbox(&mut session, &settings, "~/media");
        let expected = dirs::home_dir().unwrap().join("media");
        assert_eq!(stored, expected.to_string_lossy());
        assert_eq!(session.output_path(), Some(stored.as_str()));
    }

    #[test]
    fn test_relative_entry_is_made_absolute() {
        let install = tempfile::tempdir().unwrap();
        let settings = settings_for(install.path());
        let mut session = Session::new();

        let stored = update_output_path_from_textbox(&mut session, &settings, "./renders/../final");
        let expected = std::env::current_dir().unwrap().join("final");
        assert_eq!(stored, expected.to_string_lossy());
    }

    #[test]
    fn test_default_without_output_directory_is_temp() {
        let install = tempfile::tempdir().unwrap();
        let settings = settings_for(install.path());
        assert_eq!(resolve_default_output_directory(&settings), std::env::temp_dir());
    }
}
