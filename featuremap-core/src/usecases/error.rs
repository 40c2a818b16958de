use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid id")]
    InvalidId,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
