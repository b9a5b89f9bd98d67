use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::{
    image::Image, language::Language, localized_info::LocalizedInfo, ExampleData,
    WithId,
};

/// A geolocated public toilet as stored: scalar fields only. Images and
/// localized text live in their own rows and are joined in by the
/// aggregation layer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    /// Degrees, WGS84.
    pub latitude: f64,
    /// Degrees, WGS84.
    pub longitude: f64,
    pub rating: f64,
    pub is_open: bool,
}

impl HasId for Location {
    type IdType = i32;
}

impl ExampleData for Location {
    fn example_data() -> Self {
        Location {
            latitude: 49.2827,
            longitude: -123.1067,
            rating: 4.2,
            is_open: true,
        }
    }
}

/// The fully aggregated record for one location: scalars, every image, and
/// one localized entry per supported language. Localized entries are
/// flattened, so each language code becomes a top-level key.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct LocationView {
    #[serde(flatten)]
    pub location: Location,
    pub images: Vec<WithId<Image>>,
    #[serde(flatten)]
    pub localized: IndexMap<Language, LocalizedInfo>,
}

impl HasId for LocationView {
    type IdType = i32;
}

impl ExampleData for LocationView {
    fn example_data() -> Self {
        let mut localized = IndexMap::new();
        localized.insert(
            Language::Ja,
            LocalizedInfo {
                name: "ガスタウン公共トイレ".to_owned(),
                description: "Historic Gastown地区の公衆トイレ。24時間利用可能。"
                    .to_owned(),
            },
        );
        localized.insert(Language::En, LocalizedInfo::example_data());
        LocationView {
            location: Location::example_data(),
            images: vec![WithId::new(
                utility::id::Id::new("1".to_owned()),
                Image::example_data(),
            )],
            localized,
        }
    }
}
