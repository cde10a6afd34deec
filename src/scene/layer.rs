//! Scatterplot layers binding a point cloud to the scene.

use serde::Serialize;
use tracing::trace;

use crate::cloud::PointCloud;

/// Build a column accessor expression for the rendered scene JSON.
fn column_accessor(column: &str) -> String {
    format!("@@={column}")
}

/// A renderable binding of a point cloud's geometry and color columns.
///
/// The layer owns a snapshot of its cloud; updates replace the snapshot whole
/// via [`ScatterLayer::set_data`] rather than mutating it in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterLayer {
    #[serde(rename = "@@type")]
    layer_type: &'static str,
    id: String,
    data: PointCloud,
    get_radius: f64,
    get_position: String,
    pickable: bool,
    get_fill_color: String,
}

impl ScatterLayer {
    /// Create a pickable scatterplot layer over `cloud` with a fixed point
    /// radius, reading geometry from `position` and color from `fcolor`.
    pub fn new(cloud: &PointCloud, id: &str, radius: f64) -> Self {
        Self {
            layer_type: "ScatterplotLayer",
            id: id.to_owned(),
            data: cloud.clone(),
            get_radius: radius,
            get_position: column_accessor("position"),
            pickable: true,
            get_fill_color: column_accessor("fcolor"),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> &PointCloud {
        &self.data
    }

    /// Replace the layer's data snapshot with the current state of `cloud`.
    pub fn set_data(&mut self, cloud: &PointCloud) {
        self.data = cloud.clone();
        trace!(id = %self.id, rows = cloud.len(), "Layer data snapshot replaced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_metadata() {
        let cloud = PointCloud::sampled(3, 0.0, 10.0, 10.0, [10.0, 180.0, 90.0]);
        let layer = ScatterLayer::new(&cloud, "ref_scatter_layer", 2.0);

        let json: serde_json::Value = serde_json::to_value(&layer).unwrap();
        assert_eq!(json["@@type"], "ScatterplotLayer");
        assert_eq!(json["id"], "ref_scatter_layer");
        assert_eq!(json["getRadius"], 2.0);
        assert_eq!(json["getPosition"], "@@=position");
        assert_eq!(json["getFillColor"], "@@=fcolor");
        assert_eq!(json["pickable"], true);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_set_data_replaces_snapshot() {
        let mut cloud = PointCloud::sampled(4, 0.0, 10.0, 30.0, [180.0, 18.0, 90.0]);
        let mut layer = ScatterLayer::new(&cloud, "qry_scatter_layer", 2.0);

        cloud.set_fill_color([10.0, 180.0, 90.0]);
        assert_ne!(layer.data(), &cloud);

        layer.set_data(&cloud);
        assert_eq!(layer.data(), &cloud);
    }
}
