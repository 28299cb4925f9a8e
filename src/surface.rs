//! The surface-provider seam and an in-memory implementation.

use std::collections::BTreeMap;

use crate::canvas::{DrawingContext, RecordingCanvas};
use crate::error::{PlotError, PlotResult};

/// Resolves container identifiers to drawing surfaces.
///
/// `acquire` is idempotent per container: the first call creates the surface,
/// later calls reuse it, resizing when the requested dimensions changed.
/// Unresolvable identifiers are an error, not a silent no-op.
pub trait SurfaceProvider {
    /// Resolve a container to a drawing context of the given pixel size.
    fn acquire(
        &mut self,
        container_id: &str,
        width: u32,
        height: u32,
    ) -> PlotResult<&mut dyn DrawingContext>;
}

/// An in-memory provider backed by [`RecordingCanvas`] surfaces.
///
/// Containers must be registered up front; acquiring an unregistered id
/// yields [`PlotError::ContainerNotFound`]. This mirrors a host document
/// where the container element exists but its surface is created on demand.
#[derive(Debug, Default)]
pub struct MemorySurfaceProvider {
    containers: BTreeMap<String, Option<RecordingCanvas>>,
}

impl MemorySurfaceProvider {
    /// Create a provider with no containers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container id, without creating its surface yet.
    pub fn add_container(&mut self, container_id: impl Into<String>) {
        self.containers.entry(container_id.into()).or_insert(None);
    }

    /// Register a container id, builder style.
    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.add_container(container_id);
        self
    }

    /// Access the recorded surface of a container, if one was acquired.
    pub fn canvas(&self, container_id: &str) -> Option<&RecordingCanvas> {
        self.containers.get(container_id)?.as_ref()
    }
}

impl SurfaceProvider for MemorySurfaceProvider {
    fn acquire(
        &mut self,
        container_id: &str,
        width: u32,
        height: u32,
    ) -> PlotResult<&mut dyn DrawingContext> {
        let slot = self
            .containers
            .get_mut(container_id)
            .ok_or_else(|| PlotError::ContainerNotFound(container_id.to_string()))?;
        let canvas = slot.get_or_insert_with(|| RecordingCanvas::new(width, height));
        if canvas.size() != (width, height) {
            canvas.resize(width, height);
        }
        Ok(canvas)
    }
}
