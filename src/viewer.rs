//! The viewer: two sampled point clouds, their scatter layers, and the
//! rendering pane, plus the button-driven recolor-and-reassert cycle.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::cloud::PointCloud;
use crate::pane::{DeckPane, PaneError};
use crate::scene::{Deck, OrbitView, ScatterLayer, ViewState};

/// Default point count per cloud. Five is the size the original report named
/// as unstable, which makes it the interesting default for this tool.
pub const DEFAULT_NUM_POINTS: usize = 5;

const SAMPLE_MEAN: f64 = 0.0;
const SAMPLE_STD_DEV: f64 = 10.0;
const POINT_RADIUS: f64 = 2.0;

const REF_Z_PLANE: f64 = 10.0;
const QRY_Z_PLANE: f64 = 30.0;

const REF_INITIAL_FILL: [f64; 3] = [10.0, 180.0, 90.0];
const QRY_INITIAL_FILL: [f64; 3] = [180.0, 18.0, 90.0];
const REF_UPDATED_FILL: [f64; 3] = [180.0, 18.0, 90.0];
const QRY_UPDATED_FILL: [f64; 3] = [10.0, 180.0, 90.0];

const REF_LAYER: usize = 0;
const QRY_LAYER: usize = 1;

const INITIAL_VIEW_STATE: ViewState = ViewState {
    target: [0.0, 0.0, 0.0],
    controller: true,
    rotation_x: -15.0,
    rotation_orbit: 30.0,
    zoom: 3.0,
    max_zoom: 10.0,
    min_zoom: -2.0,
};

/// Owns the two clouds and the pane rendering them.
///
/// The clouds are exclusively owned here; the scene layers hold snapshots
/// that get reassigned whole when the clouds change.
pub struct Viewer {
    ref_cloud: PointCloud,
    qry_cloud: PointCloud,
    pane: DeckPane,
}

impl Viewer {
    /// Sample both clouds, build the scene, and wrap it in a pane.
    pub fn new(num_points: usize) -> Result<Self, PaneError> {
        let ref_cloud = PointCloud::sampled(
            num_points,
            SAMPLE_MEAN,
            SAMPLE_STD_DEV,
            REF_Z_PLANE,
            REF_INITIAL_FILL,
        );
        let qry_cloud = PointCloud::sampled(
            num_points,
            SAMPLE_MEAN,
            SAMPLE_STD_DEV,
            QRY_Z_PLANE,
            QRY_INITIAL_FILL,
        );

        let ref_layer = Self::scatterplot_layer(&ref_cloud, "ref_scatter_layer");
        let qry_layer = Self::scatterplot_layer(&qry_cloud, "qry_scatter_layer");
        let pane = DeckPane::new(Self::deck_render(ref_layer, qry_layer))?;

        info!(num_points, "Viewer constructed");
        Ok(Self {
            ref_cloud,
            qry_cloud,
            pane,
        })
    }

    fn scatterplot_layer(cloud: &PointCloud, id: &str) -> ScatterLayer {
        ScatterLayer::new(cloud, id, POINT_RADIUS)
    }

    fn deck_render(ref_layer: ScatterLayer, qry_layer: ScatterLayer) -> Deck {
        Deck {
            api_keys: BTreeMap::from([("mapbox".to_owned(), String::new())]),
            layers: vec![ref_layer, qry_layer],
            initial_view_state: INITIAL_VIEW_STATE,
            map_style: Some("light".to_owned()),
            map_provider: None,
            views: vec![OrbitView::new(true)],
        }
    }

    pub fn ref_cloud(&self) -> &PointCloud {
        &self.ref_cloud
    }

    pub fn qry_cloud(&self) -> &PointCloud {
        &self.qry_cloud
    }

    pub fn pane(&self) -> &DeckPane {
        &self.pane
    }

    /// Button handler: recolor both clouds, swap the layer data snapshots,
    /// then force a pane re-serialization and check it is a string-level
    /// no-op.
    ///
    /// Panics if the forced re-serialization changes the rendered scene; that
    /// panic is the diagnostic this tool exists to produce.
    pub fn on_button_activated(&mut self) -> Result<(), PaneError> {
        info!("Button clicked");

        self.ref_cloud.set_fill_color(REF_UPDATED_FILL);
        self.qry_cloud.set_fill_color(QRY_UPDATED_FILL);

        let mut next = self.pane.scene().clone();
        next.layers[REF_LAYER].set_data(&self.ref_cloud);
        next.layers[QRY_LAYER].set_data(&self.qry_cloud);
        self.pane.set_scene(next)?;

        let before = self.pane.rendered().to_owned();
        self.pane.trigger("object")?;
        let after = self.pane.rendered();
        assert_eq!(
            before, after,
            "forced re-serialization changed the rendered scene"
        );

        debug!(
            revision = self.pane.revision(),
            bytes = after.len(),
            "Re-serialization stable"
        );
        Ok(())
    }
}
