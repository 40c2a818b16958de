use super::prelude::*;

pub fn load_features<R: FeatureRepo>(repo: &R) -> Result<Vec<Feature>> {
    Ok(repo.all_features()?)
}

pub fn get_feature<R: FeatureRepo>(repo: &R, id: &str) -> Result<Feature> {
    Ok(repo.get_feature(id)?)
}
