use catalog::database::Result;
use model::{bounding_box::BoundingBox, location::Location, WithId};
use sqlx::{Executor, Postgres};
use utility::let_also::LetAlso;

use crate::data_model::{location::LocationRow, with_id, with_ids};

use super::convert_error;

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Location>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, latitude, longitude, rating, is_open
        FROM locations
        ORDER BY id;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(|why| convert_error(why))?
    .let_owned(|locations: Vec<LocationRow>| Ok(with_ids(locations)))
}

pub async fn get_in_bounds<'c, E>(
    executor: E,
    bounds: &BoundingBox,
) -> Result<Vec<WithId<Location>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, latitude, longitude, rating, is_open
        FROM locations
        WHERE
            latitude BETWEEN $1 AND $2
            AND longitude BETWEEN $3 AND $4
        ORDER BY id;
        ",
    )
    .bind(bounds.min_lat)
    .bind(bounds.max_lat)
    .bind(bounds.min_lng)
    .bind(bounds.max_lng)
    .fetch_all(executor)
    .await
    .map_err(|why| convert_error(why))?
    .let_owned(|locations: Vec<LocationRow>| Ok(with_ids(locations)))
}

pub async fn insert<'c, E>(
    executor: E,
    location: Location,
) -> Result<WithId<Location>>
where
    E: Executor<'c, Database = Postgres>,
{
    // position is always point(longitude, latitude) of the same row.
    sqlx::query_as(
        "
        INSERT INTO locations(latitude, longitude, rating, is_open, position)
        VALUES ($1, $2, $3, $4, point($2, $1))
        RETURNING id, latitude, longitude, rating, is_open;
        ",
    )
    .bind(location.latitude)
    .bind(location.longitude)
    .bind(location.rating)
    .bind(location.is_open)
    .fetch_one(executor)
    .await
    .map(|row: LocationRow| with_id(row))
    .map_err(convert_error)
}
