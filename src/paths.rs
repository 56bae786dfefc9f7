use std::path::{Component, Path, PathBuf};

/// Name of the output directory next to the installed executable.
pub const OUTPUT_DIRECTORY_NAME: &str = "output";

/// Expands a leading `~` to the user's home directory.
///
/// `~user` forms are left untouched, as is everything when no home directory
/// can be determined.
pub fn expand_home(input: &str) -> PathBuf {
    let rest = if input == "~" {
        Some("")
    } else {
        input
            .strip_prefix("~/")
            .or_else(|| input.strip_prefix("~\\").filter(|_| cfg!(windows)))
    };

    match (rest, dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}

/// Makes `path` absolute against the current directory and collapses `.` and
/// `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                log::warn!("Failed to read current directory: {}", e);
                path.to_path_buf()
            }
        }
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// `~` expansion followed by [`normalize`].
pub fn expand_and_normalize(input: &str) -> PathBuf {
    normalize(&expand_home(input))
}

pub fn temp_directory() -> PathBuf {
    std::env::temp_dir()
}

/// Returns `preferred` when it exists on disk, the system temp directory otherwise.
pub fn existing_or_temp(preferred: &Path) -> PathBuf {
    if preferred.exists() {
        preferred.to_path_buf()
    } else {
        log::info!(
            "{} does not exist, falling back to {}",
            preferred.display(),
            temp_directory().display()
        );
        temp_directory()
    }
}

/// Directory holding the running executable.
pub fn installation_directory() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// `<installation dir>/output` if it exists, the system temp directory otherwise.
pub fn resolve_default_output_directory(installation_dir: Option<&Path>) -> PathBuf {
    match installation_dir {
        Some(dir) => existing_or_temp(&dir.join(OUTPUT_DIRECTORY_NAME)),
        None => temp_directory(),
    }
}

pub fn to_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        let home = dirs::home_dir().expect("home directory");
        assert_eq!(expand_home("~"), home);
        assert_eq!(expand_home("~/media"), home.join("media"));
        assert_eq!(expand_home("/srv/media"), PathBuf::from("/srv/media"));
        assert_eq!(expand_home("media/~"), PathBuf::from("media/~"));
        assert_eq!(expand_home("~other/media"), PathBuf::from("~other/media"));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_collapses_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_normalize_relative_uses_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(normalize(Path::new("renders")), cwd.join("renders"));
    }

    #[test]
    fn test_resolve_default_output_directory() {
        let install = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_default_output_directory(Some(install.path())),
            temp_directory()
        );

        std::fs::create_dir(install.path().join(OUTPUT_DIRECTORY_NAME)).unwrap();
        assert_eq!(
            resolve_default_output_directory(Some(install.path())),
            install.path().join(OUTPUT_DIRECTORY_NAME)
        );
        assert_eq!(resolve_default_output_directory(None), temp_directory());
    }
}
