use catalog::database::Result;
use model::{image::Image, location::Location, WithId};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{image::ImageRow, with_id, with_ids};

use super::convert_error;

/// All images of one location, in store order. An unknown location id
/// simply yields no rows.
pub async fn get_by_location<'c, E>(
    executor: E,
    location_id: &Id<Location>,
) -> Result<Vec<WithId<Image>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, url, created_at, location_id
        FROM images
        WHERE location_id = $1;
        ",
    )
    .bind(location_id.raw())
    .fetch_all(executor)
    .await
    .map_err(|why| convert_error(why))?
    .let_owned(|images: Vec<ImageRow>| Ok(with_ids(images)))
}

pub async fn insert<'c, E>(
    executor: E,
    location_id: &Id<Location>,
    image: WithId<Image>,
) -> Result<WithId<Image>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO images(id, url, created_at, location_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, url, created_at, location_id;
        ",
    )
    .bind(image.id.raw())
    .bind(&image.content.url)
    .bind(image.content.created_at)
    .bind(location_id.raw())
    .fetch_one(executor)
    .await
    .map(|row: ImageRow| with_id(row))
    .map_err(convert_error)
}
