pub use featuremap_boundary::*;

use crate::core::usecases;

pub mod from_json {
    //! JSON -> use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_feature(from: NewFeature) -> usecases::NewFeature {
        let NewFeature {
            name,
            lat,
            lng,
            category,
        } = from;
        usecases::NewFeature {
            name,
            lat,
            lng,
            category,
        }
    }
}
