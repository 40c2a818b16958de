use super::{position, prelude::*, NewFeature};

pub fn create_new_feature<R: FeatureRepo>(repo: &R, new_feature: NewFeature) -> Result<Feature> {
    let NewFeature {
        name,
        lat,
        lng,
        category,
    } = new_feature;
    let pos = position(lat, lng)?;
    let feature = Feature {
        id: Id::new(),
        name,
        pos,
        category,
    };
    log::debug!("Creating new feature {}", feature.id);
    repo.create_feature(feature.clone())?;
    Ok(feature)
}
