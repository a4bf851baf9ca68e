use thiserror::Error;

/// The only unrecoverable sanitization failure: the top-level input is not a
/// dataset-shaped object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("dashboard dataset must be an object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("dashboard dataset must be an object with at least one field")]
    Empty,
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;
