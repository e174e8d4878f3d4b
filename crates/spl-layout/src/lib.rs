// ABOUTME: Split-pane layout management.
// ABOUTME: Computes pane and divider geometry from per-divider drag offsets.

mod geometry;
mod store;
mod view;

pub use geometry::{compute_layout, DividerBox, Layout, PaneBox, Point, Rect, Size};
pub use spl_core::Orientation;
pub use store::{DividerOffsetStore, DragSession};
pub use view::{SplitView, SplitViewError};
