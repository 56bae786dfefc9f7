use snafu::{ResultExt, Snafu};
use std::collections::HashMap;

const EN: &str = include_str!("../locales/en.json");
const JA: &str = include_str!("../locales/ja.json");

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("unknown locale: {}", locale))]
    UnknownLocale { locale: String },
    #[snafu(display("failed to parse locale {}: {}", locale, source))]
    Parse {
        locale: String,
        source: serde_json::Error,
    },
}

/// Localized UI labels, keyed like `uis.output_path_textbox`.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    locale: String,
    labels: HashMap<String, String>,
}

impl Translator {
    pub fn load(locale: &str) -> Result<Self, Error> {
        let source = match locale {
            "en" => EN,
            "ja" => JA,
            _ => {
                return Err(Error::UnknownLocale {
                    locale: locale.to_string(),
                })
            }
        };
        Self::from_json(locale, source)
    }

    /// Loads `locale`, falling back to English when it is not bundled.
    pub fn load_or_default(locale: &str) -> Self {
        match Self::load(locale) {
            Ok(translator) => translator,
            Err(e) => {
                log::warn!("{}, using {}", e, DEFAULT_LOCALE);
                Self::load(DEFAULT_LOCALE).unwrap_or_default()
            }
        }
    }

    pub fn from_json(locale: &str, json: &str) -> Result<Self, Error> {
        let labels = serde_json::from_str(json).context(ParseSnafu { locale })?;
        Ok(Self {
            locale: locale.to_string(),
            labels,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The label for `key`, or the key itself when it has no translation.
    pub fn get(&self, key: &str) -> String {
        self.labels
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
