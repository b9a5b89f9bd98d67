use model::location::Location;
use utility::id::Id;

use super::DatabaseRow;

/// A point of interest. The table also carries a `position` point column
/// that mirrors (longitude, latitude); it is written on insert and never
/// read back.
/// Table: locations
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LocationRow {
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
    pub is_open: bool,
}

impl DatabaseRow for LocationRow {
    type Model = Location;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            rating: self.rating,
            is_open: self.is_open,
        }
    }
}
