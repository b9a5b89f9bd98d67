use std::{env, error::Error};

use async_trait::async_trait;
use catalog::database::{
    Database, DatabaseOperations, DatabaseTransaction,
};
use model::{
    bounding_box::BoundingBox, image::Image, language::Language,
    localized_info::LocalizedInfo, location::Location, WithId,
};
use queries::convert_error;
use sqlx::{pool::PoolConnection, Postgres, Transaction};
use utility::id::Id;

pub mod data_model;
pub mod queries;

pub struct DatabaseConnectionInfo {
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub port: u16,
    pub database: String,
}

impl DatabaseConnectionInfo {
    pub fn from_env() -> Option<Self> {
        let username = env::var("DATABASE_USER").ok()?;
        let password = env::var("DATABASE_PASSWORD").ok()?;
        let hostname = env::var("DATABASE_HOST").ok()?;
        let port: u16 = env::var("DATABASE_PORT").ok()?.parse().ok()?;
        let database = env::var("DATABASE_NAME").ok()?;
        Some(Self {
            username,
            password,
            hostname,
            port,
            database,
        })
    }

    pub(self) fn postgres_url(self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.hostname, self.port, self.database
        )
    }
}

#[derive(Clone)]
pub struct PgDatabase {
    connection: sqlx::PgPool,
}

impl PgDatabase {
    pub async fn connect(
        database_connection_info: DatabaseConnectionInfo,
    ) -> Result<Self, Box<dyn Error>> {
        let url = database_connection_info.postgres_url();
        let pool = sqlx::postgres::PgPool::connect(&url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { connection: pool })
    }
}

/// One pooled connection, held for the scope of a single request and
/// returned to the pool on drop.
pub struct PgDatabaseSession {
    connection: PoolConnection<Postgres>,
}

pub struct PgDatabaseTransaction<'a> {
    tx: Transaction<'a, sqlx::Postgres>,
}

#[async_trait]
impl Database for PgDatabase {
    type Session = PgDatabaseSession;
    type Transaction = PgDatabaseTransaction<'static>;

    async fn session(&self) -> catalog::database::Result<Self::Session> {
        let connection = self
            .connection
            .acquire()
            .await
            .map_err(|why| convert_error(why))?;
        Ok(PgDatabaseSession { connection })
    }

    async fn transaction(&self) -> catalog::database::Result<Self::Transaction> {
        let tx: Transaction<'_, sqlx::Postgres> = self
            .connection
            .begin()
            .await
            .map_err(|why| convert_error(why))?;
        Ok(PgDatabaseTransaction { tx })
    }
}

#[async_trait]
impl<'a> DatabaseTransaction for PgDatabaseTransaction<'a> {
    async fn commit(self) -> catalog::database::Result<()> {
        self.tx.commit().await.map_err(|why| convert_error(why))
    }
}

#[async_trait]
impl DatabaseOperations for PgDatabaseSession {
    async fn locations(
        &mut self,
    ) -> catalog::database::Result<Vec<WithId<Location>>> {
        queries::location::get_all(&mut *self.connection).await
    }

    async fn locations_in(
        &mut self,
        bounds: &BoundingBox,
    ) -> catalog::database::Result<Vec<WithId<Location>>> {
        queries::location::get_in_bounds(&mut *self.connection, bounds).await
    }

    async fn images_of(
        &mut self,
        location_id: &Id<Location>,
    ) -> catalog::database::Result<Vec<WithId<Image>>> {
        queries::image::get_by_location(&mut *self.connection, location_id).await
    }

    async fn localized_info_of(
        &mut self,
        location_id: &Id<Location>,
        language: Language,
    ) -> catalog::database::Result<Vec<LocalizedInfo>> {
        queries::localized_info::get_by_location_and_language(
            &mut *self.connection,
            location_id,
            language,
        )
        .await
    }

    async fn insert_location(
        &mut self,
        location: Location,
    ) -> catalog::database::Result<WithId<Location>> {
        queries::location::insert(&mut *self.connection, location).await
    }

    async fn insert_image(
        &mut self,
        location_id: &Id<Location>,
        image: WithId<Image>,
    ) -> catalog::database::Result<WithId<Image>> {
        queries::image::insert(&mut *self.connection, location_id, image).await
    }

    async fn insert_localized_info(
        &mut self,
        location_id: &Id<Location>,
        language: Language,
        info: LocalizedInfo,
    ) -> catalog::database::Result<LocalizedInfo> {
        queries::localized_info::insert(
            &mut *self.connection,
            location_id,
            language,
            info,
        )
        .await
    }
}

#[async_trait]
impl<'a> DatabaseOperations for PgDatabaseTransaction<'a> {
    async fn locations(
        &mut self,
    ) -> catalog::database::Result<Vec<WithId<Location>>> {
        queries::location::get_all(&mut *self.tx).await
    }

    async fn locations_in(
        &mut self,
        bounds: &BoundingBox,
    ) -> catalog::database::Result<Vec<WithId<Location>>> {
        queries::location::get_in_bounds(&mut *self.tx, bounds).await
    }

    async fn images_of(
        &mut self,
        location_id: &Id<Location>,
    ) -> catalog::database::Result<Vec<WithId<Image>>> {
        queries::image::get_by_location(&mut *self.tx, location_id).await
    }

    async fn localized_info_of(
        &mut self,
        location_id: &Id<Location>,
        language: Language,
    ) -> catalog::database::Result<Vec<LocalizedInfo>> {
        queries::localized_info::get_by_location_and_language(
            &mut *self.tx,
            location_id,
            language,
        )
        .await
    }

    async fn insert_location(
        &mut self,
        location: Location,
    ) -> catalog::database::Result<WithId<Location>> {
        queries::location::insert(&mut *self.tx, location).await
    }

    async fn insert_image(
        &mut self,
        location_id: &Id<Location>,
        image: WithId<Image>,
    ) -> catalog::database::Result<WithId<Image>> {
        queries::image::insert(&mut *self.tx, location_id, image).await
    }

    async fn insert_localized_info(
        &mut self,
        location_id: &Id<Location>,
        language: Language,
        info: LocalizedInfo,
    ) -> catalog::database::Result<LocalizedInfo> {
        queries::localized_info::insert(&mut *self.tx, location_id, language, info)
            .await
    }
}
