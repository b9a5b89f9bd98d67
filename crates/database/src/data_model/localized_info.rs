use model::localized_info::LocalizedInfo;

/// Localized name/description of a location. Keyed by (location_id,
/// language) with a surrogate id for insertion order; the surrogate never
/// leaves the store, so this row converts without one.
/// Table: localized_info
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LocalizedInfoRow {
    pub id: i32,
    pub location_id: i32,
    pub language: String,
    pub name: String,
    pub description: String,
}

impl LocalizedInfoRow {
    pub fn to_model(self) -> LocalizedInfo {
        LocalizedInfo {
            name: self.name,
            description: self.description,
        }
    }
}
