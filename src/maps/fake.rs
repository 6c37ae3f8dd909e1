// Recording surface for host-side tests

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::models::{Dataset, FeatureProperties, LngLat, OverlayLayer, ScreenPoint};
use crate::views::popup::PopupContent;
use super::{MapError, MapPopup, MapSurface};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AddSource(String),
    AddLayer { id: String, before: Option<String> },
    Query { layers: Vec<String> },
    Cursor(String),
    CreatePopup { offset: f64 },
    OpenPopup,
    PopupAt(LngLat),
    PopupContent(PopupContent),
    PopupRemoved,
    Removed,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

#[derive(Default)]
pub struct FakeSurface {
    pub log: CallLog,
    /// Returned by every feature query
    pub features: Vec<FeatureProperties>,
    /// Layer ids whose registration fails
    pub failing_layers: HashSet<&'static str>,
}

impl FakeSurface {
    pub fn with_features(features: Vec<FeatureProperties>) -> Self {
        Self {
            features,
            ..Self::default()
        }
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl MapSurface for FakeSurface {
    type Popup = FakePopup;

    fn add_source(&mut self, dataset: &Dataset) -> Result<(), MapError> {
        self.record(Call::AddSource(dataset.id.to_string()));
        Ok(())
    }

    fn add_layer(&mut self, layer: &OverlayLayer) -> Result<(), MapError> {
        self.record(Call::AddLayer {
            id: layer.id.to_string(),
            before: layer.before.map(str::to_string),
        });
        if self.failing_layers.contains(layer.id) {
            return Err(MapError::Registration {
                id: layer.id.to_string(),
                reason: "rejected".to_string(),
            });
        }
        Ok(())
    }

    fn query_rendered_features(
        &self,
        _point: ScreenPoint,
        layer_ids: &[&str],
    ) -> Result<Vec<FeatureProperties>, MapError> {
        self.record(Call::Query {
            layers: layer_ids.iter().map(|s| s.to_string()).collect(),
        });
        Ok(self.features.clone())
    }

    fn set_cursor(&self, cursor: &str) {
        self.record(Call::Cursor(cursor.to_string()));
    }

    fn create_popup(&self, offset: f64) -> FakePopup {
        self.record(Call::CreatePopup { offset });
        FakePopup { log: self.log.clone() }
    }

    fn open_popup(&self, _popup: &mut FakePopup) {
        self.record(Call::OpenPopup);
    }

    fn remove(&mut self) {
        self.record(Call::Removed);
    }
}

pub struct FakePopup {
    log: CallLog,
}

impl MapPopup for FakePopup {
    fn set_lng_lat(&mut self, at: LngLat) {
        self.log.borrow_mut().push(Call::PopupAt(at));
    }

    fn set_content(&mut self, content: &PopupContent) -> Result<(), MapError> {
        self.log.borrow_mut().push(Call::PopupContent(content.clone()));
        Ok(())
    }

    fn remove(&mut self) {
        self.log.borrow_mut().push(Call::PopupRemoved);
    }
}
