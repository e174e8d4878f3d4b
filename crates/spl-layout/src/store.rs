// ABOUTME: Per-divider offset storage and live drag sessions.
// ABOUTME: Absent entries mean zero offset; the store is cleared on reorientation.

use std::collections::HashMap;

use crate::geometry::Point;

/// Accumulated 2D offsets keyed by divider index.
///
/// A divider with no entry has a zero offset, including indices that don't
/// exist at all. The whole store is cleared whenever the owning view changes
/// orientation, since offsets are relative to the split axis.
#[derive(Debug, Clone, Default)]
pub struct DividerOffsetStore {
    offsets: HashMap<usize, Point>,
}

impl DividerOffsetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset for a divider; zero for any index that was never written.
    pub fn get(&self, divider: usize) -> Point {
        self.offsets.get(&divider).copied().unwrap_or(Point::ZERO)
    }

    pub fn set(&mut self, divider: usize, offset: Point) {
        self.offsets.insert(divider, offset);
    }

    pub fn clear(&mut self) {
        self.offsets.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }
}

/// One in-progress drag on a single divider.
///
/// Created on drag-start, updated on every move, discarded on release.
/// Different dividers may have independent sessions at the same time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer location at drag-start, in the divider's local space.
    pub start: Point,
    /// Most recently delivered pointer location.
    pub current: Point,
}

impl DragSession {
    pub fn new(start: Point) -> Self {
        Self {
            start,
            current: start,
        }
    }

    /// Distance traveled since drag-start.
    pub fn distance(&self) -> Point {
        Point {
            x: self.current.x - self.start.x,
            y: self.current.y - self.start.y,
        }
    }
}
