//! Marker state of the map, independent of Leaflet.

use featuremap_boundary::Feature;

/// Formats a coordinate the way it is written into the form.
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    format!("{value:.6}")
}

/// A position the user clicked on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickedPoint {
    pub lat: f64,
    pub lng: f64,
}

impl ClickedPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub fn lat_text(&self) -> String {
        format_coordinate(self.lat)
    }

    #[must_use]
    pub fn lng_text(&self) -> String {
        format_coordinate(self.lng)
    }

    /// HTML content of the popup of a temporary marker.
    #[must_use]
    pub fn popup_content(&self) -> String {
        format!(
            "Clicked location:<br>Lat: {}<br>Lng: {}",
            self.lat_text(),
            self.lng_text()
        )
    }
}

/// Everything that belongs to a displayed temporary marker.
pub trait PendingRemoval {
    /// The marker is replaced or cleared before its timer fired.
    fn cancel(self);

    /// The removal timer fired.
    fn finish(self);
}

/// Holds at most one temporary marker.
///
/// Placing a new marker cancels the pending removal of the previous one.
/// Every placement gets a new generation, so that a timer can only
/// remove the marker it was armed for.
#[derive(Debug)]
pub struct TempMarkerSlot<T> {
    current: Option<TempMarker<T>>,
    generation: u64,
}

#[derive(Debug)]
struct TempMarker<T> {
    point: ClickedPoint,
    generation: u64,
    handle: Option<T>,
}

impl<T> Default for TempMarkerSlot<T> {
    fn default() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }
}

impl<T: PendingRemoval> TempMarkerSlot<T> {
    /// Returns the generation of the new marker.
    pub fn place(&mut self, point: ClickedPoint) -> u64 {
        self.clear();
        self.generation += 1;
        self.current = Some(TempMarker {
            point,
            generation: self.generation,
            handle: None,
        });
        self.generation
    }

    /// Attaches the handle to the marker of the given generation.
    ///
    /// The handle is cancelled immediately if that marker is already gone.
    pub fn arm(&mut self, generation: u64, handle: T) {
        match &mut self.current {
            Some(marker) if marker.generation == generation => {
                if let Some(previous) = marker.handle.replace(handle) {
                    previous.cancel();
                }
            }
            _ => handle.cancel(),
        }
    }

    /// Removes the marker if it still belongs to the given generation.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.current_generation() != Some(generation) {
            return false;
        }
        if let Some(handle) = self.current.take().and_then(|marker| marker.handle) {
            handle.finish();
        }
        true
    }

    /// Removes the marker and cancels its pending removal.
    pub fn clear(&mut self) {
        if let Some(handle) = self.current.take().and_then(|marker| marker.handle) {
            handle.cancel();
        }
    }
}

impl<T> TempMarkerSlot<T> {
    #[must_use]
    pub fn current(&self) -> Option<(u64, ClickedPoint)> {
        self.current
            .as_ref()
            .map(|marker| (marker.generation, marker.point))
    }

    fn current_generation(&self) -> Option<u64> {
        self.current.as_ref().map(|marker| marker.generation)
    }
}

/// Orders concurrent reloads of the feature list.
///
/// Only the response of the most recently started reload is applied.
#[derive(Debug, Default)]
pub struct ReloadSequence {
    latest: u64,
}

impl ReloadSequence {
    pub fn start(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[must_use]
    pub const fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// The features currently rendered as markers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerSet {
    features: Vec<Feature>,
}

impl MarkerSet {
    /// Replaces all markers at once.
    ///
    /// Duplicate ids are dropped, the first occurrence wins.
    pub fn replace(&mut self, features: Vec<Feature>) {
        let mut unique = Vec::with_capacity(features.len());
        for feature in features {
            if unique.iter().any(|f: &Feature| f.id == feature.id) {
                log::warn!("Ignore duplicate feature {}", feature.id);
                continue;
            }
            unique.push(feature);
        }
        self.features = unique;
    }

    pub fn remove(&mut self, id: &str) {
        self.features.retain(|f| f.id != id);
    }

    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[must_use]
pub fn category_label(feature: &Feature) -> String {
    format!("Category: {}", feature.category)
}
