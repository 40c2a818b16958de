pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use featuremap_entities::{feature::*, geo::*, id::*};
}

pub use self::repositories::Error as RepoError;
