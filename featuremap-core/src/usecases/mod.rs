use crate::entities::*;

mod create_new_feature;
mod delete_feature;
mod error;
mod load_features;
mod update_feature;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    create_new_feature::*, delete_feature::*, error::Error, load_features::*, update_feature::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, RepoError};
}

/// Parameters of a feature as submitted by a client.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeature {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub category: String,
}

fn position(lat: f64, lng: f64) -> Result<MapPoint> {
    MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)
}
