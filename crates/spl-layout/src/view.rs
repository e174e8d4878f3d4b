// ABOUTME: Split view composer: owns orientation, offsets, and drag sessions.
// ABOUTME: Drives the geometry resolver and the per-divider drag state machine.

use std::collections::HashMap;

use spl_core::Orientation;

use crate::geometry::{compute_layout, Layout, Point, Size};
use crate::store::{DividerOffsetStore, DragSession};

#[derive(Debug, thiserror::Error)]
pub enum SplitViewError {
    #[error("split view requires at least one pane")]
    NoPanes,
}

/// One split view: a fixed number of panes stacked along an orientation,
/// separated by draggable dividers.
///
/// The view only sizes and positions panes; pane content lives with the
/// caller, and a pane's rect may itself host a nested `SplitView`. Each view
/// owns its offset store; nested views never share state.
#[derive(Debug)]
pub struct SplitView {
    orientation: Orientation,
    pane_count: usize,
    divider_thickness: f32,
    offsets: DividerOffsetStore,
    drags: HashMap<usize, DragSession>,
}

impl SplitView {
    pub fn new(
        orientation: Orientation,
        pane_count: usize,
        divider_thickness: f32,
    ) -> Result<Self, SplitViewError> {
        if pane_count == 0 {
            return Err(SplitViewError::NoPanes);
        }
        Ok(Self {
            orientation,
            pane_count,
            divider_thickness,
            offsets: DividerOffsetStore::new(),
            drags: HashMap::new(),
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn pane_count(&self) -> usize {
        self.pane_count
    }

    pub fn divider_count(&self) -> usize {
        self.pane_count - 1
    }

    pub fn divider_thickness(&self) -> f32 {
        self.divider_thickness
    }

    pub fn offsets(&self) -> &DividerOffsetStore {
        &self.offsets
    }

    /// Flip the orientation. All stored offsets are axis-relative, so the
    /// store is cleared in full and any live drags are abandoned.
    pub fn toggle_orientation(&mut self) {
        self.orientation.toggle();
        self.offsets.clear();
        self.drags.clear();
    }

    /// Resolve pane and divider rects for the given container size.
    pub fn layout(&self, container: Size) -> Layout {
        compute_layout(
            self.orientation,
            container,
            self.pane_count,
            self.divider_thickness,
            &self.offsets,
        )
    }

    /// The divider whose rendered rect contains `point`, if any.
    pub fn hit_divider(&self, container: Size, point: Point) -> Option<usize> {
        self.layout(container)
            .dividers
            .iter()
            .find(|d| d.rect.contains(point))
            .map(|d| d.index)
    }

    /// Begin a drag on a divider. Returns false for an out-of-range index or
    /// a divider that is already being dragged.
    pub fn drag_start(&mut self, divider: usize, pointer: Point) -> bool {
        if divider >= self.divider_count() || self.drags.contains_key(&divider) {
            return false;
        }
        self.drags.insert(divider, DragSession::new(pointer));
        true
    }

    /// Deliver a pointer move for an active drag. The location is recorded
    /// into the offset store as-is: last write wins, and the value outlives
    /// the gesture. Locations are relative to the divider's resting slot
    /// (see `DividerBox::slot`).
    pub fn drag_move(&mut self, divider: usize, pointer: Point) -> bool {
        let Some(session) = self.drags.get_mut(&divider) else {
            return false;
        };
        session.current = pointer;
        self.offsets.set(divider, pointer);
        true
    }

    /// End a drag (release or cancel). The last written offset stays in
    /// place until the next drag on this divider or an orientation change.
    pub fn drag_end(&mut self, divider: usize) -> bool {
        self.drags.remove(&divider).is_some()
    }

    pub fn is_dragging(&self, divider: usize) -> bool {
        self.drags.contains_key(&divider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(panes: usize) -> SplitView {
        SplitView::new(Orientation::Horizontal, panes, 10.0).unwrap()
    }

    fn pt(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    #[test]
    fn rejects_zero_panes() {
        assert!(matches!(
            SplitView::new(Orientation::Horizontal, 0, 10.0),
            Err(SplitViewError::NoPanes)
        ));
    }

    #[test]
    fn divider_count_is_panes_minus_one() {
        assert_eq!(view(1).divider_count(), 0);
        assert_eq!(view(5).divider_count(), 4);
    }

    #[test]
    fn drag_lifecycle() {
        let mut v = view(3);
        assert!(!v.drag_move(0, pt(10.0, 0.0)), "move without start");
        assert!(!v.drag_end(0), "end without start");

        assert!(v.drag_start(0, pt(2.0, 3.0)));
        assert!(v.is_dragging(0));
        assert!(!v.drag_start(0, pt(2.0, 3.0)), "restart while dragging");

        assert!(v.drag_move(0, pt(30.0, 3.0)));
        assert!(v.drag_move(0, pt(50.0, 4.0)));
        assert!(v.drag_end(0));
        assert!(!v.is_dragging(0));

        // Last write survives the gesture.
        assert_eq!(v.offsets().get(0), pt(50.0, 4.0));
    }

    #[test]
    fn drag_on_out_of_range_divider_is_ignored() {
        let mut v = view(3);
        assert!(!v.drag_start(2, pt(0.0, 0.0)));
        assert!(!v.drag_start(99, pt(0.0, 0.0)));
        let mut single = view(1);
        assert!(!single.drag_start(0, pt(0.0, 0.0)));
    }

    #[test]
    fn concurrent_drags_stay_independent() {
        let mut v = view(4);
        assert!(v.drag_start(0, pt(0.0, 0.0)));
        assert!(v.drag_start(2, pt(0.0, 0.0)));

        v.drag_move(0, pt(15.0, 0.0));
        v.drag_move(2, pt(-8.0, 0.0));
        v.drag_move(0, pt(20.0, 0.0));

        assert_eq!(v.offsets().get(0), pt(20.0, 0.0));
        assert_eq!(v.offsets().get(1), Point::ZERO);
        assert_eq!(v.offsets().get(2), pt(-8.0, 0.0));

        v.drag_end(0);
        // Divider 2 keeps dragging after 0 released.
        assert!(v.drag_move(2, pt(-12.0, 0.0)));
        assert_eq!(v.offsets().get(2), pt(-12.0, 0.0));
    }

    #[test]
    fn toggle_clears_offsets_and_drags() {
        let mut v = view(3);
        v.drag_start(0, pt(0.0, 0.0));
        v.drag_move(0, pt(42.0, 0.0));
        v.drag_start(1, pt(0.0, 0.0));

        v.toggle_orientation();
        assert_eq!(v.orientation(), Orientation::Vertical);
        assert!(v.offsets().is_empty());
        assert!(!v.is_dragging(0));
        assert!(!v.is_dragging(1));
        // The abandoned drag no longer accepts moves.
        assert!(!v.drag_move(1, pt(5.0, 5.0)));
    }

    #[test]
    fn double_toggle_round_trips() {
        let mut v = view(3);
        v.drag_start(0, pt(0.0, 0.0));
        v.drag_move(0, pt(42.0, 0.0));

        v.toggle_orientation();
        v.toggle_orientation();
        assert_eq!(v.orientation(), Orientation::Horizontal);
        assert!(v.offsets().is_empty());
    }

    #[test]
    fn layout_matches_drag_state() {
        // 3 panes, 300px measured each, divider dragged to +50.
        let mut v = view(3);
        let container = Size::new(920.0, 600.0);
        v.drag_start(0, pt(0.0, 0.0));
        v.drag_move(0, pt(50.0, 0.0));

        let layout = v.layout(container);
        assert_eq!(layout.panes[0].rect.width, 350.0);
        assert_eq!(layout.panes[1].rect.width, 250.0);
        assert_eq!(layout.panes[2].rect.width, 300.0);
        assert_eq!(layout.dividers[0].rect.x, 350.0);
    }

    #[test]
    fn zero_offsets_have_no_drift() {
        let v = view(4);
        let container = Size::new(1030.0, 500.0);
        let layout = v.layout(container);
        for pane in &layout.panes {
            assert_eq!(pane.rect.width, 250.0);
        }
    }

    #[test]
    fn hit_divider_tracks_rendered_position() {
        let mut v = view(3);
        let container = Size::new(920.0, 600.0);

        assert_eq!(v.hit_divider(container, pt(305.0, 100.0)), Some(0));
        assert_eq!(v.hit_divider(container, pt(615.0, 100.0)), Some(1));
        assert_eq!(v.hit_divider(container, pt(150.0, 100.0)), None);

        // After a drag the hit region moves with the divider.
        v.drag_start(0, pt(0.0, 0.0));
        v.drag_move(0, pt(50.0, 0.0));
        v.drag_end(0);
        assert_eq!(v.hit_divider(container, pt(305.0, 100.0)), None);
        assert_eq!(v.hit_divider(container, pt(355.0, 100.0)), Some(0));
    }
}
