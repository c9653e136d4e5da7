use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, ThisError, PartialEq, Eq, Clone)]
pub enum Error {
    /// The key is unset, or its textual form is empty or whitespace-only.
    #[error("invalid argument: the parameter '{0}' cannot be null or blank")]
    InvalidArgument(&'static str),

    /// An entry with the same comparison key is already stored.
    #[error("element with the key '{0}' already exists")]
    DuplicateKey(String),
}
