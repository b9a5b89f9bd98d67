use catalog::database::Result;
use model::{
    language::Language, localized_info::LocalizedInfo, location::Location,
};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::localized_info::LocalizedInfoRow;

use super::convert_error;

/// All rows for one (location, language) pair, ordered by the surrogate
/// id so "first" means first-inserted. Usually 0 or 1 rows; the schema
/// does not rule out more.
pub async fn get_by_location_and_language<'c, E>(
    executor: E,
    location_id: &Id<Location>,
    language: Language,
) -> Result<Vec<LocalizedInfo>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT id, location_id, language, name, description
        FROM localized_info
        WHERE location_id = $1 AND language = $2
        ORDER BY id;
        ",
    )
    .bind(location_id.raw())
    .bind(language.code())
    .fetch_all(executor)
    .await
    .map_err(|why| convert_error(why))?
    .let_owned(|rows: Vec<LocalizedInfoRow>| {
        Ok(rows.into_iter().map(|row| row.to_model()).collect::<Vec<_>>())
    })
}

pub async fn insert<'c, E>(
    executor: E,
    location_id: &Id<Location>,
    language: Language,
    info: LocalizedInfo,
) -> Result<LocalizedInfo>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO localized_info(location_id, language, name, description)
        VALUES ($1, $2, $3, $4)
        RETURNING id, location_id, language, name, description;
        ",
    )
    .bind(location_id.raw())
    .bind(language.code())
    .bind(&info.name)
    .bind(&info.description)
    .fetch_one(executor)
    .await
    .map(|row: LocalizedInfoRow| row.to_model())
    .map_err(convert_error)
}
