use std::time::Duration;

use leaflet::{LatLng, PopupOptions};
use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use leptos_leaflet::{position, MapContainer, MapEvents, Marker, Popup, Position, TileLayer};
use wasm_bindgen::JsValue;

use crate::markers::{category_label, ClickedPoint, MarkerSet, PendingRemoval, TempMarkerSlot};

const TILE_LAYER_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str = "© OpenStreetMap contributors";

// Jakarta
const DEFAULT_CENTER: (f64, f64) = (-6.2, 106.816_666);
const DEFAULT_ZOOM: f64 = 10.0;

const TEMP_MARKER_DELAY: Duration = Duration::from_millis(3000);

/// A temporary marker on the live map and its removal timer.
struct TempMarker {
    marker: leaflet::Marker,
    timer: Option<TimeoutHandle>,
}

impl TempMarker {
    fn show(map: &leaflet::Map, point: ClickedPoint) -> Self {
        let marker = leaflet::Marker::new(&LatLng::new(point.lat, point.lng));
        let popup = leaflet::Popup::new(&PopupOptions::new(), None);
        popup.set_content(&JsValue::from_str(&point.popup_content()));
        marker.bind_popup(&popup);
        marker.add_to(map);
        marker.open_popup();
        Self {
            marker,
            timer: None,
        }
    }
}

impl PendingRemoval for TempMarker {
    fn cancel(self) {
        let Self { marker, timer } = self;
        if let Some(timer) = timer {
            timer.clear();
        }
        marker.remove();
    }

    fn finish(self) {
        self.marker.remove();
    }
}

#[component]
pub fn FeatureMap(markers: Signal<MarkerSet>, on_click: Callback<ClickedPoint>) -> impl IntoView {
    let map = RwSignal::<Option<leaflet::Map>>::new(None);
    let temp_marker = store_value(TempMarkerSlot::<TempMarker>::default());

    let show_temp_marker = move |point: ClickedPoint| {
        let Some(map) = map.get_untracked() else {
            log::warn!("No leaflet map found");
            return;
        };
        let Some(generation) = temp_marker.try_update_value(|slot| slot.place(point)) else {
            return;
        };
        let mut shown = TempMarker::show(&map, point);
        let remove = move || {
            temp_marker.try_update_value(|slot| slot.expire(generation));
        };
        match set_timeout_with_handle(remove, TEMP_MARKER_DELAY) {
            Ok(handle) => {
                shown.timer = Some(handle);
            }
            Err(err) => {
                log::warn!("Unable to schedule removal of temporary marker: {err:?}");
            }
        }
        if temp_marker
            .try_update_value(|slot| slot.arm(generation, shown))
            .is_none()
        {
            log::debug!("Map is gone before the temporary marker could be armed");
        }
    };

    let events = MapEvents::new().mouse_click(move |event| {
        let lat_lng = event.lat_lng();
        let point = ClickedPoint::new(lat_lng.lat(), lat_lng.lng());
        log::debug!("Map clicked at {}, {}", point.lat_text(), point.lng_text());
        on_click.call(point);
        show_temp_marker(point);
    });

    on_cleanup(move || {
        temp_marker.try_update_value(TempMarkerSlot::clear);
    });

    let (lat, lng) = DEFAULT_CENTER;
    let center = Position::new(lat, lng);

    view! {
      <div id="map">
      <MapContainer
        class="map-container"
        center
        zoom=DEFAULT_ZOOM
        map=map.write_only()
        set_view=true
        events
      >
        <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
        <For
          each=move || markers.with(|m| m.features().to_vec())
          key=|feature| feature.id.clone()
          let:feature
        >
          <Marker position=position!(feature.lat, feature.lng)>
            <Popup>
              <strong>{ feature.name.clone() }</strong>
              <br />
              { category_label(&feature) }
            </Popup>
          </Marker>
        </For>
      </MapContainer>
      </div>
    }
}
