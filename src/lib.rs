//! cloudpane - 3D point-cloud scatter viewer with a reactive scene pane
//!
//! Two normally-distributed point clouds are bound to deck-style scatter
//! layers inside a single serializable scene. A sidebar button rewrites each
//! cloud's fill color, swaps the layer data snapshots, then forces the pane
//! to re-serialize and checks the forced pass leaves the rendered scene
//! byte-identical. That check is the point of the tool: it reproduces a
//! reported pane re-serialization instability as a hard assertion.

pub mod app;
pub mod cloud;
pub mod pane;
pub mod scene;
pub mod theme;
pub mod viewer;

pub use cloud::{sample_normal, PointCloud, PointRow};
pub use pane::{DeckPane, PaneError};
pub use scene::{Deck, OrbitView, ScatterLayer, ViewState};
pub use viewer::{Viewer, DEFAULT_NUM_POINTS};
