use std::cell::RefCell;

use super::prelude::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub features: RefCell<Vec<Feature>>,
}

impl FeatureRepo for MockDb {
    fn create_feature(&self, feature: Feature) -> RepoResult<()> {
        let mut features = self.features.borrow_mut();
        if features.iter().any(|f| f.id == feature.id) {
            return Err(RepoError::AlreadyExists);
        }
        features.push(feature);
        Ok(())
    }

    fn get_feature(&self, id: &str) -> RepoResult<Feature> {
        self.features
            .borrow()
            .iter()
            .find(|f| f.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_features(&self) -> RepoResult<Vec<Feature>> {
        Ok(self.features.borrow().clone())
    }

    fn update_feature(&self, feature: &Feature) -> RepoResult<()> {
        let mut features = self.features.borrow_mut();
        let existing = features
            .iter_mut()
            .find(|f| f.id == feature.id)
            .ok_or(RepoError::NotFound)?;
        *existing = feature.clone();
        Ok(())
    }

    fn delete_feature(&self, id: &str) -> RepoResult<()> {
        let mut features = self.features.borrow_mut();
        let len = features.len();
        features.retain(|f| f.id.as_str() != id);
        if features.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[test]
fn load_features_in_insertion_order() {
    use featuremap_entities::builders::*;

    let db = MockDb::default();
    for id in ["c", "a", "b"] {
        db.create_feature(Feature::build().id(id).finish()).unwrap();
    }
    let ids: Vec<_> = super::load_features(&db)
        .unwrap()
        .into_iter()
        .map(|f| String::from(f.id))
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn get_missing_feature() {
    let db = MockDb::default();
    assert!(matches!(
        super::get_feature(&db, "x"),
        Err(Error::Repo(RepoError::NotFound))
    ));
}
