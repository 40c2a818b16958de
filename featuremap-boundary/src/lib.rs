use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A stored feature as returned by the API.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Feature {
    pub id       : String,
    pub name     : String,
    pub lat      : f64,
    pub lng      : f64,
    pub category : String,
}

/// Request body for creating or updating a feature.
///
/// Non-finite coordinates are serialized as `null`.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Default))]
pub struct NewFeature {
    pub name     : String,
    pub lat      : f64,
    pub lng      : f64,
    pub category : String,
}

/// JSON body of every error response.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message} (HTTP status {http_status})"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_new_feature() {
        let f = NewFeature {
            name: "Monas".into(),
            lat: -6.175392,
            lng: 106.827153,
            category: "landmark".into(),
        };
        assert_eq!(
            serde_json::to_string(&f).unwrap(),
            r#"{"name":"Monas","lat":-6.175392,"lng":106.827153,"category":"landmark"}"#
        );
    }

    #[test]
    fn serialize_non_numeric_coordinates_as_null() {
        let f = NewFeature {
            name: "x".into(),
            lat: f64::NAN,
            lng: f64::NAN,
            category: "y".into(),
        };
        assert_eq!(
            serde_json::to_string(&f).unwrap(),
            r#"{"name":"x","lat":null,"lng":null,"category":"y"}"#
        );
    }

    #[test]
    fn deserialize_feature_list() {
        let json = r#"[
          {"id":"a","name":"A","lat":1.5,"lng":2.5,"category":"c1"},
          {"id":"b","name":"B","lat":-1.0,"lng":0.0,"category":"c2"}
        ]"#;
        let features: Vec<Feature> = serde_json::from_str(json).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].id, "a");
        assert_eq!(features[1].lat, -1.0);
    }

    #[test]
    fn display_error() {
        let err = Error {
            http_status: 404,
            message: "The requested object could not be found".into(),
        };
        assert_eq!(
            err.to_string(),
            "The requested object could not be found (HTTP status 404)"
        );
    }
}
