//! Deck-style scene description
//!
//! Layers bind point cloud snapshots to a renderable primitive; the deck
//! aggregates layers, camera state, and map styling into one serializable
//! scene. The rendered form is canonical: struct-ordered keys and a sorted
//! api-key map, so serializing the same scene twice is byte-identical.

pub mod deck;
pub mod layer;
pub mod view;

pub use deck::Deck;
pub use layer::ScatterLayer;
pub use view::{OrbitView, ViewState};
