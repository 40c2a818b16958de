use super::*;
use featuremap_entities as e;

impl From<e::feature::Feature> for Feature {
    fn from(from: e::feature::Feature) -> Self {
        let e::feature::Feature {
            id,
            name,
            pos,
            category,
        } = from;
        Self {
            id: id.into(),
            name,
            lat: pos.lat(),
            lng: pos.lng(),
            category,
        }
    }
}
