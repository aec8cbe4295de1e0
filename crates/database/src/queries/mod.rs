use registry::database::DatabaseError;

pub mod location;
pub mod organisation;

pub(crate) fn convert_error(why: sqlx::Error) -> DatabaseError {
    match why {
        sqlx::Error::RowNotFound => DatabaseError::NotFound,
        sqlx::Error::Database(ref db_error) if db_error.is_foreign_key_violation() => {
            DatabaseError::ForeignKeyViolation(db_error.message().to_owned())
        }
        _ => DatabaseError::Other(Box::new(why)),
    }
}
