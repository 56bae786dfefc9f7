use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Deepest level below the base directory that is listed.
pub const MAX_DEPTH: usize = 3;
/// Upper bound on the number of folder choices.
pub const MAX_CHOICES: usize = 150;
pub const HIDDEN_MARKER: char = '.';
pub const LABEL_SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderChoice {
    pub label: String,
    pub path: String,
}

impl FolderChoice {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Directory tree below a base directory, listed for the folder dropdown.
#[derive(Debug, Clone)]
pub struct FolderTree {
    base: PathBuf,
    base_label: String,
}

impl FolderTree {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        let base_label = base
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| base.to_string_lossy().to_string());
        Self { base, base_label }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn base_label(&self) -> &str {
        &self.base_label
    }

    /// Lists the directories below the base, logging any filesystem error.
    pub fn create_folder_choices(&self) -> Vec<FolderChoice> {
        self.create_folder_choices_with(|e| {
            log::warn!("Skipping entry while listing {}: {}", self.base.display(), e)
        })
    }

    /// Lists the base directory and its non-hidden subdirectories up to
    /// [`MAX_DEPTH`] levels deep, sorted by path and capped at [`MAX_CHOICES`].
    ///
    /// The listing is best effort: every error met during the walk is handed to
    /// `on_error` and the walk carries on with whatever is still readable.
    pub fn create_folder_choices_with(&self, mut on_error: impl FnMut(&walkdir::Error)) -> Vec<FolderChoice> {
        let mut folders: BTreeMap<String, String> = BTreeMap::new();

        let walker = WalkDir::new(&self.base)
            .max_depth(MAX_DEPTH)
            .into_iter()
            .filter_entry(|e| e.file_type().is_dir() && !is_hidden(e));

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    folders
                        .entry(path.to_string_lossy().to_string())
                        .or_insert_with(|| self.format_label(path));
                }
                Err(e) => on_error(&e),
            }
        }

        folders
            .into_iter()
            .take(MAX_CHOICES)
            .map(|(path, label)| FolderChoice { label, path })
            .collect()
    }

    pub fn format_label(&self, path: &Path) -> String {
        if path == self.base {
            return self.base_label.clone();
        }
        match path.strip_prefix(&self.base) {
            Ok(relative) => relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join(LABEL_SEPARATOR),
            Err(_) => path.to_string_lossy().to_string(),
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_string_lossy()
            .starts_with(HIDDEN_MARKER)
}
