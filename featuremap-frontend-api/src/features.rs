use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use featuremap_boundary::{Feature, NewFeature};

use crate::{ensure_ok, into_json, Result};

/// Client of the `/features` collection.
#[derive(Debug, Clone, Copy)]
pub struct FeatureApi {
    url: &'static str,
}

impl FeatureApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    pub async fn list_features(&self) -> Result<Vec<Feature>> {
        let response = Request::get(&self.features_url()).send().await?;
        into_json(response).await
    }

    /// Any 2xx status counts as success, the response body is ignored.
    pub async fn create_feature(&self, feature: &NewFeature) -> Result<()> {
        let response = Request::post(&self.features_url())
            .json(feature)?
            .send()
            .await?;
        ensure_ok(response).await?;
        Ok(())
    }

    pub async fn delete_feature(&self, id: &str) -> Result<()> {
        let response = Request::delete(&self.feature_url(id)).send().await?;
        ensure_ok(response).await?;
        Ok(())
    }

    fn features_url(&self) -> String {
        format!("{}/features", self.url.trim_end_matches('/'))
    }

    fn feature_url(&self, id: &str) -> String {
        let encoded_id = utf8_percent_encode(id, NON_ALPHANUMERIC);
        format!("{}/{encoded_id}", self.features_url())
    }
}
