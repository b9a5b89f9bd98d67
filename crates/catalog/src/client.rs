use indexmap::IndexMap;
use log::warn;
use model::{
    bounding_box::BoundingBox,
    language::Language,
    localized_info::LocalizedInfo,
    location::{Location, LocationView},
    WithId,
};
use utility::id::Id;

use crate::{
    database::{Database, DatabaseOperations},
    RequestError, RequestResult,
};

/// Read surface of the catalog: assembles normalized rows into one nested
/// view per location. Holds no state besides the database handle; every
/// call is an independent, idempotent read.
#[derive(Clone)]
pub struct Client<D>
where
    D: Database,
{
    database: D,
}

impl<D> Client<D>
where
    D: Database,
{
    pub fn new(database: D) -> Self {
        Self { database }
    }

    pub async fn get_all_locations(
        &self,
    ) -> RequestResult<Vec<WithId<LocationView>>> {
        let mut session = self.database.session().await?;
        let locations = session.locations().await?;
        assemble_all(&mut session, locations).await
    }

    /// Like `get_all_locations`, restricted to a bounding box. Rejects a
    /// box whose minimum exceeds its maximum on either axis.
    pub async fn get_locations_in_bounding_box(
        &self,
        bounds: BoundingBox,
    ) -> RequestResult<Vec<WithId<LocationView>>> {
        bounds
            .validate()
            .map_err(|why| RequestError::Validation(why.to_string()))?;
        let mut session = self.database.session().await?;
        let locations = session.locations_in(&bounds).await?;
        assemble_all(&mut session, locations).await
    }
}

async fn assemble_all<S>(
    session: &mut S,
    locations: Vec<WithId<Location>>,
) -> RequestResult<Vec<WithId<LocationView>>>
where
    S: DatabaseOperations + Send,
{
    let mut views = Vec::with_capacity(locations.len());
    for location in locations {
        views.push(assemble(session, location).await?);
    }
    Ok(views)
}

/// Folds one location's child rows into its nested view: images verbatim
/// in store order, plus exactly one localized entry per supported
/// language. A missing translation falls back to empty strings; extra
/// rows for one language resolve to the first row.
async fn assemble<S>(
    session: &mut S,
    location: WithId<Location>,
) -> RequestResult<WithId<LocationView>>
where
    S: DatabaseOperations + Send,
{
    let images = session.images_of(&location.id).await?;

    let mut localized = IndexMap::new();
    for language in Language::SUPPORTED {
        let rows = session.localized_info_of(&location.id, language).await?;
        if rows.len() > 1 {
            warn!(
                "location {} has {} '{}' text rows, using the first",
                location.id,
                rows.len(),
                language
            );
        }
        let info = rows.into_iter().next().unwrap_or_else(LocalizedInfo::default);
        localized.insert(language, info);
    }

    Ok(WithId::new(
        Id::new(location.id.raw()),
        LocationView {
            location: location.content,
            images,
            localized,
        },
    ))
}
