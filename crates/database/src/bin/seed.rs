use catalog::database::{Database, DatabaseOperations, DatabaseTransaction};
use chrono::Utc;
use database::{DatabaseConnectionInfo, PgDatabase};
use log::info;
use model::{
    image::Image, language::Language, localized_info::LocalizedInfo,
    location::Location, WithId,
};
use utility::id::Id;

struct SeedLocation {
    location: Location,
    images: Vec<WithId<Image>>,
    ja: LocalizedInfo,
    en: LocalizedInfo,
}

fn seed_data() -> Vec<SeedLocation> {
    let now = Utc::now();
    vec![
        SeedLocation {
            location: Location {
                latitude: 49.2827,
                longitude: -123.1067,
                rating: 4.2,
                is_open: true,
            },
            images: vec![
                WithId::new(
                    Id::new("1".to_owned()),
                    Image {
                        url: "https://tgoysscvgojhzejawwpj.supabase.co/storage/v1/object/public/toilet-images/images.jpeg".to_owned(),
                        created_at: now,
                    },
                ),
                WithId::new(
                    Id::new("2".to_owned()),
                    Image {
                        url: "https://tgoysscvgojhzejawwpj.supabase.co/storage/v1/object/public/toilet-images/8f3e39adc40efd3b6234a7b3ce7c21977447f8e2.jpg".to_owned(),
                        created_at: now,
                    },
                ),
            ],
            ja: LocalizedInfo {
                name: "ガスタウン公共トイレ".to_owned(),
                description: "Historic Gastown地区の公衆トイレ。24時間利用可能。"
                    .to_owned(),
            },
            en: LocalizedInfo {
                name: "Gastown Public Toilet".to_owned(),
                description: "Public restrooms in the Historic Gastown area, \
                              available 24 hours a day."
                    .to_owned(),
            },
        },
        SeedLocation {
            location: Location {
                latitude: 49.2754,
                longitude: -123.1216,
                rating: 4.5,
                is_open: true,
            },
            images: vec![],
            ja: LocalizedInfo {
                name: "イエールタウン・コミュニティセンター".to_owned(),
                description: "コミュニティセンター内の清潔なトイレ施設。\
                              センター開館時間内であれば誰でも利用可能です。"
                    .to_owned(),
            },
            en: LocalizedInfo {
                name: "Yaletown Community Center".to_owned(),
                description: "Clean restroom facilities inside the community \
                              center. Open to public during center hours."
                    .to_owned(),
            },
        },
        SeedLocation {
            location: Location {
                latitude: 49.2897,
                longitude: -123.1226,
                rating: 3.8,
                is_open: true,
            },
            images: vec![],
            ja: LocalizedInfo {
                name: "コールハーバー休憩所".to_owned(),
                description: "シーウォール沿いの公共トイレ。観光スポット周辺の\
                              便利な場所にあり、きれいに管理されています。"
                    .to_owned(),
            },
            en: LocalizedInfo {
                name: "Coal Harbour Rest Area".to_owned(),
                description: "Public restroom along the seawall. Conveniently \
                              located near tourist attractions and \
                              well-maintained."
                    .to_owned(),
            },
        },
    ]
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let database_connection_info = DatabaseConnectionInfo::from_env()
        .expect("expected database connection info in env.");
    let database = PgDatabase::connect(database_connection_info)
        .await
        .expect("could not connect to database.");

    let mut tx = database
        .transaction()
        .await
        .expect("could not open a transaction.");

    // all or nothing: the transaction only commits once every row is in
    let existing = tx.locations().await.expect("could not query locations.");
    if !existing.is_empty() {
        info!("database already contains data, skipping initialization");
        return;
    }

    for seed in seed_data() {
        let location = tx
            .insert_location(seed.location)
            .await
            .expect("could not insert location.");
        for image in seed.images {
            tx.insert_image(&location.id, image)
                .await
                .expect("could not insert image.");
        }
        tx.insert_localized_info(&location.id, Language::Ja, seed.ja)
            .await
            .expect("could not insert japanese text.");
        tx.insert_localized_info(&location.id, Language::En, seed.en)
            .await
            .expect("could not insert english text.");
    }

    tx.commit().await.expect("could not commit seed data.");
    info!("database initialized successfully");
}
