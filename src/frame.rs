//! Per-frame render data handed to an external renderer.
//!
//! The simulation exposes borrowed slices straight out of the trail buffers;
//! nothing here copies unless the consumer asks for interleaved vertices.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// One trajectory's visible slice of the trail buffers.
///
/// Both slices are flat with three components per point and always equal in
/// length: `3 × (visible_end − visible_start)`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TrailView<'a> {
    pub positions: &'a [f32],
    pub colors: &'a [f32],
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, Serialize)]
pub struct FrameView<'a> {
    /// First visible point index, shared by all trails.
    pub visible_start: usize,
    /// One past the last visible point index.
    pub visible_end: usize,
    /// Visible data per trajectory, in trajectory index order.
    pub trails: Vec<TrailView<'a>>,
}

impl FrameView<'_> {
    pub fn visible_len(&self) -> usize {
        self.visible_end - self.visible_start
    }

    /// True when there is nothing to draw this frame (the last draining
    /// frame and the reset frame expose an empty range).
    pub fn is_empty(&self) -> bool {
        self.visible_start == self.visible_end
    }
}

/// GPU-ready interleaved vertex for trail rendering.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct TrailVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl TrailView<'_> {
    /// Interleave positions and colors into a single vertex vector, for
    /// renderers that upload one buffer per trail.
    pub fn vertices(&self) -> Vec<TrailVertex> {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| TrailVertex {
                position: [p[0], p[1], p[2]],
                color: [c[0], c[1], c[2]],
            })
            .collect()
    }
}
