pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::feature_builder::*;

pub mod feature_builder {

    use super::*;
    use crate::{feature::*, geo::*, id::*};

    #[derive(Debug)]
    pub struct FeatureBuild {
        feature: Feature,
    }

    impl FeatureBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.feature.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.feature.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.feature.pos = pos;
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.feature.category = category.into();
            self
        }
        pub fn finish(self) -> Feature {
            self.feature
        }
    }

    impl Builder for Feature {
        type Build = FeatureBuild;
        fn build() -> FeatureBuild {
            FeatureBuild {
                feature: Feature {
                    id: Id::new(),
                    name: "".into(),
                    pos: MapPoint::default(),
                    category: "".into(),
                },
            }
        }
    }
}
