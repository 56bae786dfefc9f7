use std::collections::HashMap;

pub const OUTPUT_PATH: &str = "output_path";

/// Key/value state shared by the panels for the lifetime of the application.
#[derive(Debug, Default, Clone)]
pub struct Session {
    items: HashMap<String, String>,
    revision: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        log::debug!("session: {} = {}", key, value);
        self.items.insert(key.to_string(), value);
        self.revision += 1;
    }

    pub fn clear_item(&mut self, key: &str) {
        if self.items.remove(key).is_some() {
            log::debug!("session: cleared {}", key);
        }
        self.revision += 1;
    }

    /// Number of writes (`set_item`/`clear_item`) performed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The current output path, `None` when unset or empty.
    pub fn output_path(&self) -> Option<&str> {
        self.get_item(OUTPUT_PATH).filter(|path| !path.is_empty())
    }

    pub fn set_output_path(&mut self, path: impl Into<String>) {
        self.set_item(OUTPUT_PATH, path);
    }

    pub fn clear_output_path(&mut self) {
        self.clear_item(OUTPUT_PATH);
    }
}
