use crate::models::{Dataset, FeatureProperties, LngLat, OverlayLayer, ScreenPoint};
use crate::views::popup::PopupContent;
use super::MapError;

/// The slice of the rendering engine the map view drives.
///
/// The web build implements it over Mapbox GL JS; tests use a recording fake.
pub trait MapSurface {
    type Popup: MapPopup;

    /// Registers a dataset under `dataset.id`
    fn add_source(&mut self, dataset: &Dataset) -> Result<(), MapError>;

    /// Adds a layer on top, or below `layer.before` when set
    fn add_layer(&mut self, layer: &OverlayLayer) -> Result<(), MapError>;

    /// Features rendered under `point`, restricted to `layer_ids`, in engine hit order
    fn query_rendered_features(
        &self,
        point: ScreenPoint,
        layer_ids: &[&str],
    ) -> Result<Vec<FeatureProperties>, MapError>;

    /// Sets the CSS cursor of the map canvas ("" restores the default)
    fn set_cursor(&self, cursor: &str);

    fn create_popup(&self, offset: f64) -> Self::Popup;

    /// Attaches the popup to the map, replacing wherever it was shown before
    fn open_popup(&self, popup: &mut Self::Popup);

    /// Releases the map with every layer, source and listener
    fn remove(&mut self);
}

/// A reusable popup handle
pub trait MapPopup {
    fn set_lng_lat(&mut self, at: LngLat);

    fn set_content(&mut self, content: &PopupContent) -> Result<(), MapError>;

    /// Detaches the popup. No-op when it is not shown.
    fn remove(&mut self);
}
