// ABOUTME: Pure geometry resolver for split-pane layout.
// ABOUTME: Maps container size plus divider offsets to pane and divider rects.

use spl_core::Orientation;

use crate::store::DividerOffsetStore;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Rectangle in the container's pixel coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Computed placement for one pane.
///
/// A pane whose extent came out zero or negative is emitted with a zero-size
/// rect; it renders as nothing and never hit-tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneBox {
    pub index: usize,
    pub rect: Rect,
}

impl PaneBox {
    pub fn is_empty(&self) -> bool {
        self.rect.width <= 0.0 || self.rect.height <= 0.0
    }
}

/// Computed placement for one divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerBox {
    pub index: usize,
    /// Where the divider renders, offset applied.
    pub rect: Rect,
    /// The divider's resting origin with a zero offset. Drag events are
    /// delivered relative to this point.
    pub slot: Point,
}

/// One layout pass: N panes and N-1 dividers in sequence order.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub panes: Vec<PaneBox>,
    pub dividers: Vec<DividerBox>,
}

/// Resolve pane and divider rects for one split view.
///
/// Each pane's measured extent is an equal share of the container after
/// subtracting divider thickness. Pane `i` then grows by `offset(i)` and
/// shrinks by `offset(i-1)`, and shifts along the axis by `offset(i-1)`;
/// divider `i` shifts by `offset(i)`. Offsets for out-of-range indices read
/// as zero.
pub fn compute_layout(
    orientation: Orientation,
    container: Size,
    pane_count: usize,
    divider_thickness: f32,
    offsets: &DividerOffsetStore,
) -> Layout {
    let mut layout = Layout {
        panes: Vec::with_capacity(pane_count),
        dividers: Vec::with_capacity(pane_count.saturating_sub(1)),
    };
    if pane_count == 0 {
        return layout;
    }

    let total = split_extent(container, orientation);
    let cross = cross_extent(container, orientation);
    let divider_count = pane_count - 1;
    let measured = (total - divider_count as f32 * divider_thickness) / pane_count as f32;
    let slot_stride = measured + divider_thickness;

    for index in 0..pane_count {
        // offset(-1) and offset(pane_count - 1) both read as zero: the first
        // pane has no preceding divider and the last no following one.
        let before = if index == 0 {
            0.0
        } else {
            axis_value(offsets.get(index - 1), orientation)
        };
        let after = if index == divider_count {
            0.0
        } else {
            axis_value(offsets.get(index), orientation)
        };

        let extent = measured + after - before;
        let slot = index as f32 * slot_stride;
        let rect = if extent <= 0.0 {
            Rect::ZERO
        } else {
            axis_rect(orientation, slot + before, extent, cross)
        };
        layout.panes.push(PaneBox { index, rect });
    }

    for index in 0..divider_count {
        let slot_pos = index as f32 * slot_stride + measured;
        let shift = axis_value(offsets.get(index), orientation);
        layout.dividers.push(DividerBox {
            index,
            rect: axis_rect(orientation, slot_pos + shift, divider_thickness, cross),
            slot: axis_point(orientation, slot_pos),
        });
    }

    layout
}

fn split_extent(size: Size, orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Horizontal => size.width,
        Orientation::Vertical => size.height,
    }
}

fn cross_extent(size: Size, orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Horizontal => size.height,
        Orientation::Vertical => size.width,
    }
}

fn axis_value(point: Point, orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Horizontal => point.x,
        Orientation::Vertical => point.y,
    }
}

fn axis_point(orientation: Orientation, along: f32) -> Point {
    match orientation {
        Orientation::Horizontal => Point { x: along, y: 0.0 },
        Orientation::Vertical => Point { x: 0.0, y: along },
    }
}

/// Rect spanning `extent` along the split axis and the full cross extent.
fn axis_rect(orientation: Orientation, along: f32, extent: f32, cross: f32) -> Rect {
    match orientation {
        Orientation::Horizontal => Rect {
            x: along,
            y: 0.0,
            width: extent,
            height: cross,
        },
        Orientation::Vertical => Rect {
            x: 0.0,
            y: along,
            width: cross,
            height: extent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(entries: &[(usize, f32, f32)]) -> DividerOffsetStore {
        let mut s = DividerOffsetStore::new();
        for &(i, x, y) in entries {
            s.set(i, Point { x, y });
        }
        s
    }

    #[test]
    fn single_pane_fills_container() {
        let layout = compute_layout(
            Orientation::Horizontal,
            Size::new(640.0, 480.0),
            1,
            10.0,
            &DividerOffsetStore::new(),
        );
        assert_eq!(layout.panes.len(), 1);
        assert!(layout.dividers.is_empty());
        assert_eq!(
            layout.panes[0].rect,
            Rect {
                x: 0.0,
                y: 0.0,
                width: 640.0,
                height: 480.0
            }
        );
    }

    #[test]
    fn produces_one_divider_between_each_pair() {
        for n in 1..=6 {
            let layout = compute_layout(
                Orientation::Horizontal,
                Size::new(900.0, 300.0),
                n,
                10.0,
                &DividerOffsetStore::new(),
            );
            assert_eq!(layout.panes.len(), n);
            assert_eq!(layout.dividers.len(), n - 1);
            // Dividers sit strictly between their neighbors, in order.
            for d in &layout.dividers {
                let left = layout.panes[d.index].rect;
                let right = layout.panes[d.index + 1].rect;
                assert_eq!(d.rect.x, left.x + left.width);
                assert_eq!(right.x, d.rect.x + d.rect.width);
            }
        }
    }

    #[test]
    fn zero_offsets_give_equal_measured_extents() {
        // 3 panes of 300 each plus two 10px dividers.
        let layout = compute_layout(
            Orientation::Horizontal,
            Size::new(920.0, 600.0),
            3,
            10.0,
            &DividerOffsetStore::new(),
        );
        for (i, pane) in layout.panes.iter().enumerate() {
            assert_eq!(pane.rect.width, 300.0);
            assert_eq!(pane.rect.height, 600.0);
            assert_eq!(pane.rect.x, i as f32 * 310.0);
        }
        assert_eq!(layout.dividers[0].rect.x, 300.0);
        assert_eq!(layout.dividers[1].rect.x, 610.0);
    }

    #[test]
    fn dragged_divider_resizes_both_neighbors() {
        let offsets = store(&[(0, 50.0, 7.0)]);
        let layout = compute_layout(
            Orientation::Horizontal,
            Size::new(920.0, 600.0),
            3,
            10.0,
            &offsets,
        );
        // Pane 0 grows by 50, pane 1 shrinks by 50 and shifts right.
        assert_eq!(layout.panes[0].rect.width, 350.0);
        assert_eq!(layout.panes[1].rect.width, 250.0);
        assert_eq!(layout.panes[1].rect.x, 360.0);
        // Pane 2 is untouched.
        assert_eq!(layout.panes[2].rect.width, 300.0);
        assert_eq!(layout.panes[2].rect.x, 620.0);
        // Divider 0 renders 50 past its resting slot; the y component of the
        // offset is ignored in horizontal orientation.
        assert_eq!(layout.dividers[0].rect.x, 350.0);
        assert_eq!(layout.dividers[0].rect.y, 0.0);
        assert_eq!(layout.dividers[0].slot, Point { x: 300.0, y: 0.0 });
        assert_eq!(layout.dividers[1].rect.x, 610.0);
    }

    #[test]
    fn vertical_orientation_uses_y_axis() {
        let offsets = store(&[(0, 3.0, -20.0)]);
        let layout = compute_layout(
            Orientation::Vertical,
            Size::new(400.0, 610.0),
            2,
            10.0,
            &offsets,
        );
        assert_eq!(layout.panes[0].rect.height, 280.0);
        assert_eq!(layout.panes[0].rect.width, 400.0);
        assert_eq!(layout.panes[1].rect.height, 320.0);
        assert_eq!(layout.panes[1].rect.y, 290.0);
        assert_eq!(layout.dividers[0].rect.y, 280.0);
        assert_eq!(layout.dividers[0].rect.height, 10.0);
        assert_eq!(layout.dividers[0].rect.width, 400.0);
    }

    #[test]
    fn negative_extent_renders_empty() {
        // Drag far enough left that pane 0 would be -5 wide.
        let offsets = store(&[(0, -305.0, 0.0)]);
        let layout = compute_layout(
            Orientation::Horizontal,
            Size::new(920.0, 600.0),
            3,
            10.0,
            &offsets,
        );
        let pane = layout.panes[0];
        assert!(pane.is_empty());
        assert_eq!(pane.rect, Rect::ZERO);
        assert!(!pane.rect.contains(Point { x: 1.0, y: 1.0 }));
        // The neighbor absorbed the space.
        assert_eq!(layout.panes[1].rect.width, 605.0);
    }

    #[test]
    fn out_of_range_offsets_read_as_zero() {
        let offsets = store(&[(7, 999.0, 999.0)]);
        let layout = compute_layout(
            Orientation::Horizontal,
            Size::new(920.0, 600.0),
            3,
            10.0,
            &offsets,
        );
        for (i, pane) in layout.panes.iter().enumerate() {
            assert_eq!(pane.rect.width, 300.0, "pane {i}");
        }
    }
}
