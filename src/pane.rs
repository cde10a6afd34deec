//! Rendering pane: versioned scene snapshots with explicit change notification
//!
//! The pane owns the current scene snapshot and its serialized form. Assigning
//! a new snapshot bumps a revision counter, so change detection compares
//! revisions instead of relying on callers to signal nested mutations. The
//! explicit [`DeckPane::trigger`] primitive is still exposed: it forces a
//! re-serialization of the current snapshot, which must be a string-level
//! no-op.

use thiserror::Error;
use tracing::{debug, trace};

use crate::scene::Deck;

#[derive(Debug, Error)]
pub enum PaneError {
    #[error("failed to serialize scene: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Wrapper that serializes a scene for display and re-serializes on demand.
pub struct DeckPane {
    scene: Deck,
    revision: u64,
    rendered: String,
}

impl DeckPane {
    pub fn new(scene: Deck) -> Result<Self, PaneError> {
        let rendered = scene.to_json()?;
        debug!(bytes = rendered.len(), "Pane initialized");
        Ok(Self {
            scene,
            revision: 0,
            rendered,
        })
    }

    pub fn scene(&self) -> &Deck {
        &self.scene
    }

    /// Monotonic snapshot revision; bumped once per [`DeckPane::set_scene`].
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The current serialized scene.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Assign a new scene snapshot, bump the revision, and re-render.
    pub fn set_scene(&mut self, scene: Deck) -> Result<(), PaneError> {
        let rendered = scene.to_json()?;
        self.scene = scene;
        self.revision += 1;
        self.rendered = rendered;
        debug!(
            revision = self.revision,
            bytes = self.rendered.len(),
            "Scene snapshot replaced"
        );
        Ok(())
    }

    /// Explicit change notification: force a re-serialization of the current
    /// snapshot without bumping the revision.
    pub fn trigger(&mut self, field: &str) -> Result<(), PaneError> {
        let rendered = self.scene.to_json()?;
        trace!(
            field,
            revision = self.revision,
            bytes = rendered.len(),
            "Explicit change notification"
        );
        self.rendered = rendered;
        Ok(())
    }
}
