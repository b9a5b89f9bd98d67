use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A language the catalog carries localized text for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ja,
    En,
}

impl Language {
    /// All supported languages, in the order they appear in aggregated
    /// views.
    pub const SUPPORTED: [Language; 2] = [Language::Ja, Language::En];

    /// The lowercase code used as the wire key and the database value.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
