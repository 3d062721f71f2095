use climate::database::DatabaseError;

pub mod measurement;
pub mod station;

/// Separates failures to reach the dataset from failures of a statement.
pub(crate) fn convert_error(why: sqlx::Error) -> DatabaseError {
    match why {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => DatabaseError::Unavailable(Box::new(why)),
        _ => DatabaseError::Query(Box::new(why)),
    }
}
