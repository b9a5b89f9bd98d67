use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::ExampleData;

/// An image attached to a location. Image ids are assigned by whoever
/// inserts them, not by the store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Image {
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl HasId for Image {
    type IdType = String;
}

impl ExampleData for Image {
    fn example_data() -> Self {
        Image {
            url: "https://example.org/toilet-images/images.jpeg".to_owned(),
            created_at: DateTime::UNIX_EPOCH,
        }
    }
}
