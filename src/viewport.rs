//! Map layer handles, click events and an in-memory viewport.

use std::collections::BTreeMap;

use crate::polyline::{Bounds, Polyline};
use crate::traits::MapViewport;

/// Handle to a marker or polyline living on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub u64);

/// Events the map emits towards the planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// A click at (latitude, longitude).
    Click((f64, f64)),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Marker((f64, f64)),
    Polyline(Polyline),
}

/// A viewport without a screen: keeps the layer set and the last fit request.
#[derive(Debug, Default)]
pub struct HeadlessViewport {
    next_id: u64,
    layers: BTreeMap<LayerId, Layer>,
    last_fit: Option<(Bounds, (u32, u32))>,
}

impl HeadlessViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> impl Iterator<Item = (&LayerId, &Layer)> {
        self.layers.iter()
    }

    pub fn marker_count(&self) -> usize {
        self.layers
            .values()
            .filter(|layer| matches!(layer, Layer::Marker(_)))
            .count()
    }

    pub fn polylines(&self) -> Vec<&Polyline> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                Layer::Polyline(polyline) => Some(polyline),
                Layer::Marker(_) => None,
            })
            .collect()
    }

    pub fn last_fit(&self) -> Option<&(Bounds, (u32, u32))> {
        self.last_fit.as_ref()
    }

    fn insert(&mut self, layer: Layer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.insert(id, layer);
        id
    }
}

impl MapViewport for HeadlessViewport {
    fn add_marker(&mut self, position: (f64, f64)) -> LayerId {
        self.insert(Layer::Marker(position))
    }

    fn add_polyline(&mut self, polyline: &Polyline) -> LayerId {
        self.insert(Layer::Polyline(polyline.clone()))
    }

    fn remove_layer(&mut self, layer: LayerId) {
        self.layers.remove(&layer);
    }

    fn fit_bounds(&mut self, bounds: &Bounds, padding: (u32, u32)) {
        self.last_fit = Some((*bounds, padding));
    }
}
