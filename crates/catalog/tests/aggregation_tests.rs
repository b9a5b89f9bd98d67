// Drives the aggregation client against an in-memory store double,
// covering grouping, localization fallback, determinism, and failure
// propagation.

use std::{
    error, fmt,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use catalog::{
    client::Client,
    database::{
        Database, DatabaseError, DatabaseOperations, DatabaseTransaction, Result,
    },
    RequestError,
};
use chrono::{TimeZone, Utc};
use model::{
    bounding_box::BoundingBox,
    image::Image,
    language::Language,
    localized_info::LocalizedInfo,
    location::Location,
    WithId,
};
use utility::id::Id;

#[derive(Default)]
struct Inner {
    next_location_id: i32,
    locations: Vec<(i32, Location)>,
    images: Vec<(i32, WithId<Image>)>,
    localized: Vec<(i32, Language, LocalizedInfo)>,
    fail_reads: bool,
}

/// Deterministic in-memory stand-in for the Postgres store. Rows are kept
/// in insertion order, matching the ordering contract of the real queries.
#[derive(Clone, Default)]
struct MemoryDatabase {
    inner: Arc<Mutex<Inner>>,
}

struct MemorySession {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct StorageDown;

impl fmt::Display for StorageDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage unavailable")
    }
}

impl error::Error for StorageDown {}

impl MemorySession {
    fn guard(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_reads {
            return Err(DatabaseError::Other(Box::new(StorageDown)));
        }
        Ok(inner)
    }
}

#[async_trait]
impl DatabaseOperations for MemorySession {
    async fn locations(&mut self) -> Result<Vec<WithId<Location>>> {
        let inner = self.guard()?;
        Ok(inner
            .locations
            .iter()
            .map(|(id, location)| WithId::new(Id::new(*id), location.clone()))
            .collect())
    }

    async fn locations_in(
        &mut self,
        bounds: &BoundingBox,
    ) -> Result<Vec<WithId<Location>>> {
        let inner = self.guard()?;
        Ok(inner
            .locations
            .iter()
            .filter(|(_, location)| {
                bounds.contains(location.latitude, location.longitude)
            })
            .map(|(id, location)| WithId::new(Id::new(*id), location.clone()))
            .collect())
    }

    async fn images_of(
        &mut self,
        location_id: &Id<Location>,
    ) -> Result<Vec<WithId<Image>>> {
        let inner = self.guard()?;
        Ok(inner
            .images
            .iter()
            .filter(|(owner, _)| *owner == location_id.raw())
            .map(|(_, image)| image.clone())
            .collect())
    }

    async fn localized_info_of(
        &mut self,
        location_id: &Id<Location>,
        language: Language,
    ) -> Result<Vec<LocalizedInfo>> {
        let inner = self.guard()?;
        Ok(inner
            .localized
            .iter()
            .filter(|(owner, lang, _)| {
                *owner == location_id.raw() && *lang == language
            })
            .map(|(_, _, info)| info.clone())
            .collect())
    }

    async fn insert_location(
        &mut self,
        location: Location,
    ) -> Result<WithId<Location>> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_location_id += 1;
        let id = inner.next_location_id;
        inner.locations.push((id, location.clone()));
        Ok(WithId::new(Id::new(id), location))
    }

    async fn insert_image(
        &mut self,
        location_id: &Id<Location>,
        image: WithId<Image>,
    ) -> Result<WithId<Image>> {
        let mut inner = self.inner.lock().unwrap();
        inner.images.push((location_id.raw(), image.clone()));
        Ok(image)
    }

    async fn insert_localized_info(
        &mut self,
        location_id: &Id<Location>,
        language: Language,
        info: LocalizedInfo,
    ) -> Result<LocalizedInfo> {
        let mut inner = self.inner.lock().unwrap();
        inner.localized.push((location_id.raw(), language, info.clone()));
        Ok(info)
    }
}

#[async_trait]
impl DatabaseTransaction for MemorySession {
    async fn commit(self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    type Session = MemorySession;
    type Transaction = MemorySession;

    async fn session(&self) -> Result<MemorySession> {
        Ok(MemorySession {
            inner: self.inner.clone(),
        })
    }

    async fn transaction(&self) -> Result<MemorySession> {
        Ok(MemorySession {
            inner: self.inner.clone(),
        })
    }
}

impl MemoryDatabase {
    fn fail_reads(&self) {
        self.inner.lock().unwrap().fail_reads = true;
    }
}

fn location(latitude: f64, longitude: f64, rating: f64) -> Location {
    Location {
        latitude,
        longitude,
        rating,
        is_open: true,
    }
}

fn image(id: &str, url: &str) -> WithId<Image> {
    WithId::new(
        Id::new(id.to_owned()),
        Image {
            url: url.to_owned(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        },
    )
}

fn info(name: &str, description: &str) -> LocalizedInfo {
    LocalizedInfo {
        name: name.to_owned(),
        description: description.to_owned(),
    }
}

/// Seeds the Gastown location from the reference data set: two images
/// plus Japanese and English text.
async fn seed_gastown(database: &MemoryDatabase) -> Id<Location> {
    let mut tx = database.transaction().await.unwrap();
    let gastown = tx
        .insert_location(location(49.2827, -123.1067, 4.2))
        .await
        .unwrap();
    tx.insert_image(&gastown.id, image("1", "https://example.org/a.jpeg"))
        .await
        .unwrap();
    tx.insert_image(&gastown.id, image("2", "https://example.org/b.jpg"))
        .await
        .unwrap();
    tx.insert_localized_info(
        &gastown.id,
        Language::Ja,
        info("ガスタウン公共トイレ", "Historic Gastown地区の公衆トイレ。"),
    )
    .await
    .unwrap();
    tx.insert_localized_info(
        &gastown.id,
        Language::En,
        info("Gastown Public Toilet", "Public restrooms in Gastown."),
    )
    .await
    .unwrap();
    tx.commit().await.unwrap();
    gastown.id
}

#[tokio::test]
async fn aggregates_seeded_location_with_images_and_both_languages() {
    let database = MemoryDatabase::default();
    seed_gastown(&database).await;

    let views = Client::new(database).get_all_locations().await.unwrap();
    assert_eq!(views.len(), 1);

    let view = &views[0];
    assert_eq!(view.content.location.latitude, 49.2827);
    assert_eq!(view.content.location.longitude, -123.1067);
    assert_eq!(view.content.location.rating, 4.2);
    assert!(view.content.location.is_open);

    let image_ids: Vec<String> = view
        .content
        .images
        .iter()
        .map(|image| image.id.raw())
        .collect();
    assert_eq!(image_ids, vec!["1".to_owned(), "2".to_owned()]);

    assert_eq!(
        view.content.localized[&Language::Ja].name,
        "ガスタウン公共トイレ"
    );
    assert_eq!(
        view.content.localized[&Language::En].name,
        "Gastown Public Toilet"
    );
}

#[tokio::test]
async fn images_are_partitioned_by_owning_location() {
    let database = MemoryDatabase::default();
    {
        let mut tx = database.transaction().await.unwrap();
        let first = tx
            .insert_location(location(49.2827, -123.1067, 4.2))
            .await
            .unwrap();
        let second = tx
            .insert_location(location(49.2754, -123.1216, 4.5))
            .await
            .unwrap();
        tx.insert_image(&first.id, image("a", "https://example.org/a.jpeg"))
            .await
            .unwrap();
        tx.insert_image(&second.id, image("b", "https://example.org/b.jpeg"))
            .await
            .unwrap();
        tx.insert_image(&first.id, image("c", "https://example.org/c.jpeg"))
            .await
            .unwrap();
        tx.commit().await.unwrap();
    }

    let views = Client::new(database).get_all_locations().await.unwrap();
    assert_eq!(views.len(), 2);

    let ids_of = |index: usize| -> Vec<String> {
        views[index]
            .content
            .images
            .iter()
            .map(|image| image.id.raw())
            .collect()
    };
    assert_eq!(ids_of(0), vec!["a".to_owned(), "c".to_owned()]);
    assert_eq!(ids_of(1), vec!["b".to_owned()]);
}

#[tokio::test]
async fn missing_translation_falls_back_to_empty_strings() {
    let database = MemoryDatabase::default();
    {
        let mut tx = database.transaction().await.unwrap();
        let yaletown = tx
            .insert_location(location(49.2754, -123.1216, 4.5))
            .await
            .unwrap();
        tx.insert_localized_info(
            &yaletown.id,
            Language::En,
            info("Yaletown Community Center", "Clean restroom facilities."),
        )
        .await
        .unwrap();
        tx.commit().await.unwrap();
    }

    let views = Client::new(database).get_all_locations().await.unwrap();
    let view = &views[0];

    assert!(view.content.images.is_empty());
    assert_eq!(view.content.localized[&Language::Ja], info("", ""));
    assert_eq!(
        view.content.localized[&Language::En].name,
        "Yaletown Community Center"
    );
}

#[tokio::test]
async fn duplicate_translations_resolve_to_first_row_every_time() {
    let database = MemoryDatabase::default();
    {
        let mut tx = database.transaction().await.unwrap();
        let spot = tx
            .insert_location(location(49.2897, -123.1226, 3.8))
            .await
            .unwrap();
        tx.insert_localized_info(&spot.id, Language::En, info("First", "first row"))
            .await
            .unwrap();
        tx.insert_localized_info(
            &spot.id,
            Language::En,
            info("Second", "second row"),
        )
        .await
        .unwrap();
        tx.commit().await.unwrap();
    }

    let client = Client::new(database);
    for _ in 0..3 {
        let views = client.get_all_locations().await.unwrap();
        assert_eq!(views[0].content.localized[&Language::En], info("First", "first row"));
    }
}

#[tokio::test]
async fn repeated_aggregation_is_byte_identical() {
    let database = MemoryDatabase::default();
    seed_gastown(&database).await;

    let client = Client::new(database);
    let first = serde_json::to_string(&client.get_all_locations().await.unwrap())
        .unwrap();
    let second = serde_json::to_string(&client.get_all_locations().await.unwrap())
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn every_supported_language_is_present_even_without_any_rows() {
    let database = MemoryDatabase::default();
    {
        let mut tx = database.transaction().await.unwrap();
        tx.insert_location(location(49.2897, -123.1226, 3.8))
            .await
            .unwrap();
        tx.commit().await.unwrap();
    }

    let views = Client::new(database).get_all_locations().await.unwrap();
    let json = serde_json::to_value(&views[0]).unwrap();
    assert_eq!(json["ja"], serde_json::json!({"name": "", "description": ""}));
    assert_eq!(json["en"], serde_json::json!({"name": "", "description": ""}));
}

#[tokio::test]
async fn bounding_box_query_is_inclusive_at_the_edges() {
    let database = MemoryDatabase::default();
    {
        let mut tx = database.transaction().await.unwrap();
        // exactly on the minimum-latitude edge
        tx.insert_location(location(49.27, -123.12, 4.0)).await.unwrap();
        // interior
        tx.insert_location(location(49.2827, -123.1067, 4.2))
            .await
            .unwrap();
        // just outside
        tx.insert_location(location(49.2954, -123.1216, 4.5))
            .await
            .unwrap();
        tx.commit().await.unwrap();
    }

    let views = Client::new(database)
        .get_locations_in_bounding_box(BoundingBox {
            min_lat: 49.27,
            max_lat: 49.29,
            min_lng: -123.13,
            max_lng: -123.10,
        })
        .await
        .unwrap();

    let ids: Vec<i32> = views.iter().map(|view| view.id.raw()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn inverted_bounding_box_is_rejected() {
    let database = MemoryDatabase::default();
    let result = Client::new(database)
        .get_locations_in_bounding_box(BoundingBox {
            min_lat: 49.29,
            max_lat: 49.27,
            min_lng: -123.13,
            max_lng: -123.10,
        })
        .await;

    assert!(matches!(result, Err(RequestError::Validation(_))));
}

#[tokio::test]
async fn storage_failure_fails_the_whole_request() {
    let database = MemoryDatabase::default();
    seed_gastown(&database).await;
    database.fail_reads();

    let result = Client::new(database).get_all_locations().await;
    assert!(matches!(result, Err(RequestError::Other(_))));
}
