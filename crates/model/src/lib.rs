use std::fmt::Debug;

use schemars::JsonSchema;
use serde::Serialize;
use utility::id::{HasId, Id};

pub mod bounding_box;
pub mod image;
pub mod language;
pub mod localized_info;
pub mod location;

/// Hand-written example values, served by the web layer's schema routes.
pub trait ExampleData {
    fn example_data() -> Self;
}

/// Pairs a value with its store-assigned identifier. The content is
/// flattened, so the id appears as a sibling of the value's own fields.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub id: Id<V>,
    #[serde(flatten)]
    pub content: V,
}

impl<V> WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub fn new(id: Id<V>, content: V) -> Self {
        Self { id, content }
    }
}
