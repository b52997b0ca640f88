use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("No fields provided for update")]
    EmptyUpdate,
}
