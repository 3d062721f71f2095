use std::{error::Error, fmt};

pub mod client;
pub mod config;
pub mod database;

#[derive(Debug)]
pub enum RequestError {
    /// The data source could not be reached at all.
    Unavailable(Box<dyn Error + Send + Sync>),
    /// The data source was reached, but the query failed.
    Other(Box<dyn Error + Send + Sync>),
}

impl RequestError {
    pub fn other<T: Error + Send + Sync + 'static>(why: T) -> Self {
        Self::Other(Box::new(why))
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(why) => write!(f, "data source unavailable: {}", why),
            Self::Other(why) => write!(f, "data source error: {}", why),
        }
    }
}

impl Error for RequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(why) | Self::Other(why) => Some(why.as_ref()),
        }
    }
}

impl From<database::DatabaseError> for RequestError {
    fn from(value: database::DatabaseError) -> Self {
        match value {
            database::DatabaseError::Unavailable(why) => Self::Unavailable(why),
            database::DatabaseError::Query(why) => Self::Other(why),
        }
    }
}

pub type RequestResult<O> = Result<O, RequestError>;
