// Low-level database access traits.
// A repository is responsible for a single entity and
// never loads or modifies other entities.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait FeatureRepo {
    fn create_feature(&self, feature: Feature) -> Result<()>;

    fn get_feature(&self, id: &str) -> Result<Feature>;

    // In insertion order
    fn all_features(&self) -> Result<Vec<Feature>>;

    /// Fails with [`Error::NotFound`] if no feature with the same id exists.
    fn update_feature(&self, feature: &Feature) -> Result<()>;

    /// Fails with [`Error::NotFound`] if no feature with the given id exists.
    fn delete_feature(&self, id: &str) -> Result<()>;
}
