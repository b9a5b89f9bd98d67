use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ExampleData;

/// Per-language name and description of a location. Both fields may be
/// empty; the default value doubles as the fallback for a missing
/// translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LocalizedInfo {
    pub name: String,
    pub description: String,
}

impl ExampleData for LocalizedInfo {
    fn example_data() -> Self {
        LocalizedInfo {
            name: "Gastown Public Toilet".to_owned(),
            description: "Public restrooms in the Historic Gastown area, \
                          available 24 hours a day."
                .to_owned(),
        }
    }
}
