use catalog::database::DatabaseError;

pub mod image;
pub mod localized_info;
pub mod location;

pub(crate) fn convert_error(why: sqlx::Error) -> DatabaseError {
    match why {
        sqlx::Error::RowNotFound => DatabaseError::NotFound,
        _ => DatabaseError::Other(Box::new(why)),
    }
}
