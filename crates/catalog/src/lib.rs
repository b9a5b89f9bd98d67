use std::error::Error;

pub mod client;
pub mod database;

#[derive(Debug)]
pub enum RequestError {
    NotFound,
    Validation(String),
    Other(Box<dyn Error + Send + Sync>),
}

impl RequestError {
    pub fn other<T: Error + Send + Sync + 'static>(why: T) -> Self {
        Self::Other(Box::new(why))
    }
}

impl From<database::DatabaseError> for RequestError {
    fn from(value: database::DatabaseError) -> Self {
        match value {
            database::DatabaseError::NotFound => Self::NotFound,
            database::DatabaseError::Other(why) => Self::Other(why),
        }
    }
}

pub type RequestResult<O> = Result<O, RequestError>;
