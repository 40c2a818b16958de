use super::{position, prelude::*, NewFeature};

/// Replaces all attributes of an existing feature.
pub fn update_feature<R: FeatureRepo>(repo: &R, id: &str, update: NewFeature) -> Result<Feature> {
    if id.is_empty() {
        return Err(Error::InvalidId);
    }
    let NewFeature {
        name,
        lat,
        lng,
        category,
    } = update;
    let pos = position(lat, lng)?;
    let feature = Feature {
        id: id.into(),
        name,
        pos,
        category,
    };
    repo.update_feature(&feature)?;
    Ok(feature)
}
