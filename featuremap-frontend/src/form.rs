//! State of the "add feature" form.

use featuremap_boundary::NewFeature;

use crate::markers::ClickedPoint;

/// Raw text of the four input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureForm {
    pub name: String,
    pub lat: String,
    pub lng: String,
    pub category: String,
}

impl FeatureForm {
    /// Coordinates that can't be parsed become `NaN`
    /// and are submitted anyway.
    #[must_use]
    pub fn to_new_feature(&self) -> NewFeature {
        NewFeature {
            name: self.name.clone(),
            lat: parse_coordinate(&self.lat),
            lng: parse_coordinate(&self.lng),
            category: self.category.clone(),
        }
    }

    pub fn fill_coordinates(&mut self, point: ClickedPoint) {
        self.lat = point.lat_text();
        self.lng = point.lng_text();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies the outcome of a create request.
    ///
    /// Returns the status to show and whether the feature list
    /// has to be reloaded.
    pub fn apply_create_result(&mut self, created: bool) -> (SubmitStatus, bool) {
        if created {
            self.reset();
            (SubmitStatus::Success, true)
        } else {
            (SubmitStatus::Failure, false)
        }
    }
}

/// Parses the longest numeric prefix after leading whitespace,
/// e.g. `" 12.5 km"` yields `12.5`.
#[must_use]
pub fn parse_coordinate(input: &str) -> f64 {
    let input = input.trim_start();
    let numeric_len = input
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(input.len());
    let candidate = &input[..numeric_len];
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Outcome of the last submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Failure,
}

impl SubmitStatus {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Success => "Feature added successfully!",
            Self::Failure => "Error adding feature.",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => "green",
            Self::Failure => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FeatureForm {
        FeatureForm {
            name: "Monas".to_string(),
            lat: "-6.175392".to_string(),
            lng: "106.827153".to_string(),
            category: "landmark".to_string(),
        }
    }

    #[test]
    fn build_new_feature_from_form() {
        let new_feature = filled_form().to_new_feature();
        assert_eq!(new_feature.name, "Monas");
        assert_eq!(new_feature.lat, -6.175_392);
        assert_eq!(new_feature.lng, 106.827_153);
        assert_eq!(new_feature.category, "landmark");
    }

    #[test]
    fn non_numeric_coordinates_become_nan() {
        let mut form = filled_form();
        form.lat = "north".to_string();
        form.lng = String::new();
        let new_feature = form.to_new_feature();
        assert!(new_feature.lat.is_nan());
        assert!(new_feature.lng.is_nan());
        assert_eq!(new_feature.name, "Monas");
    }

    #[test]
    fn parse_numeric_prefix() {
        assert_eq!(parse_coordinate("12.5"), 12.5);
        assert_eq!(parse_coordinate("  -6.2"), -6.2);
        assert_eq!(parse_coordinate("12.5 km"), 12.5);
        assert_eq!(parse_coordinate("1e2"), 100.0);
        assert_eq!(parse_coordinate("1e"), 1.0);
        assert_eq!(parse_coordinate("3.0.1"), 3.0);
        assert!(parse_coordinate("-").is_nan());
        assert!(parse_coordinate("abc").is_nan());
        assert!(parse_coordinate("").is_nan());
    }

    #[test]
    fn fill_coordinates_with_six_decimals() {
        let mut form = filled_form();
        form.fill_coordinates(ClickedPoint::new(-6.2, 106.816_666_49));
        assert_eq!(form.lat, "-6.200000");
        assert_eq!(form.lng, "106.816666");
        assert_eq!(form.name, "Monas");
        assert_eq!(form.category, "landmark");
    }

    #[test]
    fn reset_clears_all_fields() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, FeatureForm::default());
    }

    #[test]
    fn successful_create_resets_form_and_reloads() {
        let mut form = filled_form();
        let (status, reload) = form.apply_create_result(true);
        assert_eq!(status, SubmitStatus::Success);
        assert_eq!(status.message(), "Feature added successfully!");
        assert_eq!(status.color(), "green");
        assert!(reload);
        assert_eq!(form, FeatureForm::default());
    }

    #[test]
    fn failed_create_keeps_form() {
        let mut form = filled_form();
        let (status, reload) = form.apply_create_result(false);
        assert_eq!(status, SubmitStatus::Failure);
        assert_eq!(status.message(), "Error adding feature.");
        assert_eq!(status.color(), "red");
        assert!(!reload);
        assert_eq!(form, filled_form());
    }

    #[test]
    fn status_messages() {
        assert_eq!(SubmitStatus::Success.message(), "Feature added successfully!");
        assert_eq!(SubmitStatus::Success.color(), "green");
        assert_eq!(SubmitStatus::Failure.message(), "Error adding feature.");
        assert_eq!(SubmitStatus::Failure.color(), "red");
    }
}
