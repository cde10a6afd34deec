//! The full renderable scene: layers, camera state, and map styling.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{OrbitView, ScatterLayer, ViewState};

/// The deck aggregates everything the rendering pane serializes.
///
/// Created once at viewer construction; later updates assign a fresh snapshot
/// with swapped layer data rather than mutating the rendered one. The api-key
/// map is a `BTreeMap` so rendered key order never depends on insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub api_keys: BTreeMap<String, String>,
    pub layers: Vec<ScatterLayer>,
    pub initial_view_state: ViewState,
    pub map_style: Option<String>,
    pub map_provider: Option<String>,
    pub views: Vec<OrbitView>,
}

impl Deck {
    /// Serialize the scene to its canonical JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::PointCloud;

    fn test_view_state() -> ViewState {
        ViewState {
            target: [0.0, 0.0, 0.0],
            controller: true,
            rotation_x: -15.0,
            rotation_orbit: 30.0,
            zoom: 3.0,
            max_zoom: 10.0,
            min_zoom: -2.0,
        }
    }

    fn test_deck(cloud: &PointCloud) -> Deck {
        Deck {
            api_keys: BTreeMap::from([("mapbox".to_owned(), String::new())]),
            layers: vec![ScatterLayer::new(cloud, "ref_scatter_layer", 2.0)],
            initial_view_state: test_view_state(),
            map_style: Some("light".to_owned()),
            map_provider: None,
            views: vec![OrbitView::new(true)],
        }
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let cloud = PointCloud::sampled(5, 0.0, 10.0, 10.0, [10.0, 180.0, 90.0]);

        let first = test_deck(&cloud).to_json().unwrap();
        let second = test_deck(&cloud).to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_repeated_serialization_is_stable() {
        let cloud = PointCloud::sampled(3, 0.0, 10.0, 30.0, [180.0, 18.0, 90.0]);
        let deck = test_deck(&cloud);

        assert_eq!(deck.to_json().unwrap(), deck.to_json().unwrap());
    }

    #[test]
    fn test_scene_json_shape() {
        let cloud = PointCloud::sampled(2, 0.0, 10.0, 10.0, [10.0, 180.0, 90.0]);
        let deck = test_deck(&cloud);

        let json: serde_json::Value = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["apiKeys"]["mapbox"], "");
        assert_eq!(json["mapStyle"], "light");
        assert!(json["mapProvider"].is_null());
        assert_eq!(json["initialViewState"]["zoom"], 3.0);
        assert_eq!(json["views"][0]["@@type"], "OrbitView");
        assert_eq!(json["layers"][0]["@@type"], "ScatterplotLayer");
        assert_eq!(json["layers"][0]["data"].as_array().unwrap().len(), 2);
    }
}
