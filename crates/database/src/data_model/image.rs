use chrono::{DateTime, Utc};
use model::image::Image;
use utility::id::Id;

use super::DatabaseRow;

/// An image attached to a location. Ids are caller-assigned.
/// Table: images
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ImageRow {
    pub id: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub location_id: i32,
}

impl DatabaseRow for ImageRow {
    type Model = Image;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Self::Model {
        Image {
            url: self.url,
            created_at: self.created_at,
        }
    }
}
