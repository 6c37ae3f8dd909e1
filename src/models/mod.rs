pub mod geo;
pub mod dataset;
pub mod layer;
pub mod entrance;

pub use geo::{LngLat, ScreenPoint, PointerEvent};
pub use dataset::{Dataset, DatasetKind};
pub use layer::{DrawType, OverlayLayer, Paint};
pub use entrance::{EntranceAttributes, FeatureProperties};
