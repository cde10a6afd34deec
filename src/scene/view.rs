//! Camera and projection configuration for the scene.

use serde::Serialize;

/// Initial camera pose for the orbit controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Orbit target point.
    pub target: [f64; 3],
    pub controller: bool,
    /// Camera elevation in degrees.
    pub rotation_x: f64,
    /// Orbit rotation in degrees.
    pub rotation_orbit: f64,
    pub zoom: f64,
    pub max_zoom: f64,
    pub min_zoom: f64,
}

/// An orbit-style projection view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitView {
    #[serde(rename = "@@type")]
    view_type: &'static str,
    controller: bool,
}

impl OrbitView {
    pub fn new(controller: bool) -> Self {
        Self {
            view_type: "OrbitView",
            controller,
        }
    }
}
