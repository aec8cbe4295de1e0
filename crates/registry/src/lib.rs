use std::error;

use thiserror::Error;

pub mod client;
pub mod database;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("the requested item does not exist")]
    NotFound,
    #[error("referential integrity violated: {0}")]
    ForeignKeyViolation(String),
    #[error(transparent)]
    Other(Box<dyn error::Error + Send + Sync>),
}

impl From<database::DatabaseError> for RequestError {
    fn from(value: database::DatabaseError) -> Self {
        match value {
            database::DatabaseError::NotFound => Self::NotFound,
            database::DatabaseError::ForeignKeyViolation(why) => {
                Self::ForeignKeyViolation(why)
            }
            database::DatabaseError::Other(why) => Self::Other(why),
        }
    }
}

pub type RequestResult<O> = Result<O, RequestError>;
