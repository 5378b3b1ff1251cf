//! Bounded trail storage and the fill/slide/drain/reset cursor lifecycle.
//!
//! Every trajectory owns one [`TrailBuffer`]: two parallel, pre-allocated
//! flat `f32` arrays (positions and colors, three components per point).
//! All buffers are driven by a single shared [`TrailCursor`], so buffers
//! stay index-synchronized across trajectories for the whole session.
//!
//! The cursor is deliberately not a modulo ring. It walks four phases:
//! fill the visible window, slide it to the end of the allocated capacity,
//! drain the window down to empty while writes are dropped, then reset both
//! ends to zero and start over. The drain phase makes the whole trail
//! visibly shrink away before it regrows from nothing; that periodic reset
//! is part of the observable behavior, so a plain circular buffer is not a
//! valid substitute.

/// Phase of the cursor lifecycle, derived from the cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailPhase {
    /// Growing the visible window: head advances, tail stays at 0.
    Filling,
    /// Window at full length, moving toward the end of capacity.
    Sliding,
    /// Head parked at capacity; tail advances and the window shrinks.
    Draining,
    /// Both ends at capacity; the next advance rewinds to (0, 0).
    Reset,
}

/// The shared head/tail pair governing every trail's visible range.
///
/// Invariant: `tail <= head <= capacity`, with `window < capacity`.
#[derive(Clone, Copy, Debug)]
pub struct TrailCursor {
    head: usize,
    tail: usize,
    window: usize,
    capacity: usize,
}

impl TrailCursor {
    /// New cursor at (0, 0). `capacity` must exceed `window`; the
    /// configuration layer rejects anything else before a cursor exists.
    pub fn new(window: usize, capacity: usize) -> Self {
        debug_assert!(window < capacity);
        Self {
            head: 0,
            tail: 0,
            window,
            capacity,
        }
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn tail(&self) -> usize {
        self.tail
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> TrailPhase {
        if self.head < self.window {
            TrailPhase::Filling
        } else if self.head < self.capacity {
            TrailPhase::Sliding
        } else if self.tail < self.capacity {
            TrailPhase::Draining
        } else {
            TrailPhase::Reset
        }
    }

    /// Slot the current frame writes into, or `None` while draining
    /// (the nominal slot would sit past the end of the arrays).
    pub fn write_slot(&self) -> Option<usize> {
        (self.head < self.capacity).then_some(self.head)
    }

    /// Advance the cursor by one frame, after the frame's writes.
    pub fn advance(&mut self) {
        match self.phase() {
            TrailPhase::Filling => {
                self.head += 1;
            }
            TrailPhase::Sliding => {
                self.head += 1;
                self.tail += 1;
            }
            TrailPhase::Draining => {
                self.tail += 1;
            }
            TrailPhase::Reset => {
                self.head = 0;
                self.tail = 0;
            }
        }
    }

    /// The `[tail, head)` range currently exposed to the renderer.
    pub fn visible(&self) -> (usize, usize) {
        (self.tail, self.head)
    }

    pub fn visible_len(&self) -> usize {
        self.head - self.tail
    }
}

/// Pre-allocated position/color storage for one trajectory.
///
/// Both arrays hold `capacity` points of three components each and never
/// grow. Writes aimed at or past `capacity` are dropped silently; the
/// cursor's drain phase relies on that.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: vec![0.0; capacity * 3],
            colors: vec![0.0; capacity * 3],
        }
    }

    /// Store one point at `slot`. Out-of-range slots are ignored.
    pub fn write(&mut self, slot: usize, position: [f32; 3], color: [f32; 3]) {
        let offset = slot * 3;
        if offset + 3 > self.positions.len() {
            return;
        }
        self.positions[offset..offset + 3].copy_from_slice(&position);
        self.colors[offset..offset + 3].copy_from_slice(&color);
    }

    /// Flat position components for the point range `[start, end)`.
    pub fn positions(&self, start: usize, end: usize) -> &[f32] {
        &self.positions[start * 3..end * 3]
    }

    /// Flat color components for the point range `[start, end)`.
    pub fn colors(&self, start: usize, end: usize) -> &[f32] {
        &self.colors[start * 3..end * 3]
    }
}
