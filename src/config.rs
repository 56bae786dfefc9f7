use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to create config directory: {}", source))]
    DirCreation { source: std::io::Error },
    #[snafu(display("failed to write config file: {}", source))]
    FileWrite { source: std::io::Error },
    #[snafu(display("serde failed to serialize: {}", source))]
    Serialization { source: serde_json::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    FolderBrowser,
    FreeText,
}

impl Default for Variant {
    fn default() -> Self {
        Self::FolderBrowser
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: Variant,
    /// Root of the folder dropdown.
    pub base_directory: PathBuf,
    /// Output directory used by the folder browser when it exists.
    pub preferred_output_directory: PathBuf,
    /// Overrides the executable's directory when resolving `<dir>/output`.
    pub installation_directory: Option<PathBuf>,
    pub locale: String,
    pub window_size: (f32, f32),
    pub last_output_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let base_directory = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pCloudDrive");
        let preferred_output_directory = base_directory
            .join("Code")
            .join("Applications")
            .join("Facefusion")
            .join("Output");
        Self {
            variant: Variant::default(),
            base_directory,
            preferred_output_directory,
            installation_directory: None,
            locale: crate::translator::DEFAULT_LOCALE.to_string(),
            window_size: (900.0, 700.0),
            last_output_path: None,
        }
    }
}

impl Settings {
    /// Reads settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Settings::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                log::warn!("Failed to read config {}: {}", path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(DirCreationSnafu)?;
        }
        let contents = serde_json::to_string_pretty(self).context(SerializationSnafu)?;
        fs::write(path, contents).context(FileWriteSnafu)
    }

    pub fn installation_directory(&self) -> Option<PathBuf> {
        self.installation_directory
            .clone()
            .or_else(crate::paths::installation_directory)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("outpick")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("config.json"));
        assert_eq!(settings.variant, Variant::FolderBrowser);
        assert!(settings.base_directory.ends_with("pCloudDrive"));
        assert!(settings.preferred_output_directory.starts_with(&settings.base_directory));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let settings = Settings {
            variant: Variant::FreeText,
            locale: "ja".into(),
            last_output_path: Some("/srv/renders".into()),
            ..Settings::default()
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path);
        assert_eq!(loaded.variant, Variant::FreeText);
        assert_eq!(loaded.locale, "ja");
        assert_eq!(loaded.last_output_path.as_deref(), Some("/srv/renders"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "variant": "free-text" }"#).unwrap();

        let loaded = Settings::load(&path);
        assert_eq!(loaded.variant, Variant::FreeText);
        assert_eq!(loaded.locale, "en");
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(Settings::load(&path).variant, Variant::FolderBrowser);
    }

    #[test]
    fn test_unreadable_path_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::create_dir(&path).unwrap();
        let loaded = Settings::load(&path);
        assert_eq!(loaded.variant, Variant::FolderBrowser);
        assert_eq!(loaded.last_output_path, None);
    }
}
