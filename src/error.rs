use thiserror::Error;

#[derive(Debug, Error)]
pub enum DegreesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Unknown person id: {0}")]
    UnknownPerson(String),

    #[error("Unknown movie id: {0}")]
    UnknownMovie(String),
}

pub type Result<T> = std::result::Result<T, DegreesError>;
