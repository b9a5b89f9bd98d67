use std::{error, result};

use async_trait::async_trait;
use model::{
    bounding_box::BoundingBox, image::Image, language::Language,
    localized_info::LocalizedInfo, location::Location, WithId,
};
use utility::id::Id;

#[derive(Debug)]
pub enum DatabaseError {
    NotFound,
    Other(Box<dyn error::Error + Send + Sync>),
}

pub type Result<T> = result::Result<T, DatabaseError>;

/// The operations the catalog needs from its store. Implemented by both
/// plain sessions and transactions, so read and seed paths share one
/// vocabulary.
#[async_trait]
pub trait DatabaseOperations {
    /// All locations, scalar fields only, in insertion order.
    async fn locations(&mut self) -> Result<Vec<WithId<Location>>>;

    /// Locations whose coordinates fall within `bounds`, inclusive on all
    /// four edges. Callers are expected to validate `bounds` first.
    async fn locations_in(
        &mut self,
        bounds: &BoundingBox,
    ) -> Result<Vec<WithId<Location>>>;

    /// All images of one location, in store order. Empty for unknown ids.
    async fn images_of(
        &mut self,
        location_id: &Id<Location>,
    ) -> Result<Vec<WithId<Image>>>;

    /// All localized-text rows for one (location, language) pair, in
    /// insertion order. Usually 0 or 1 rows, but more are representable;
    /// disambiguation is the caller's job.
    async fn localized_info_of(
        &mut self,
        location_id: &Id<Location>,
        language: Language,
    ) -> Result<Vec<LocalizedInfo>>;

    async fn insert_location(
        &mut self,
        location: Location,
    ) -> Result<WithId<Location>>;

    /// Inserts an image with a caller-assigned id. Fails if the id is
    /// already taken.
    async fn insert_image(
        &mut self,
        location_id: &Id<Location>,
        image: WithId<Image>,
    ) -> Result<WithId<Image>>;

    async fn insert_localized_info(
        &mut self,
        location_id: &Id<Location>,
        language: Language,
        info: LocalizedInfo,
    ) -> Result<LocalizedInfo>;
}

#[async_trait]
pub trait DatabaseTransaction: DatabaseOperations {
    async fn commit(self) -> Result<()>;
}

#[async_trait]
pub trait Database: Clone + Send + Sync + Sized + 'static {
    type Session: DatabaseOperations + Send;
    type Transaction: DatabaseTransaction + Send;

    /// Acquires a single connection for the scope of one request. The
    /// connection is released when the session is dropped.
    async fn session(&self) -> Result<Self::Session>;

    async fn transaction(&self) -> Result<Self::Transaction>;
}
