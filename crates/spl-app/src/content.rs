// ABOUTME: Demo content tree: pastel panes and nested split views.
// ABOUTME: Routes pointer hits to panes/dividers and flattens the tree to quads.

use spl_core::{Color, Orientation};
use spl_layout::{Layout, Point, Rect, Size, SplitView, SplitViewError};
use spl_renderer::Quad;

/// One pane of a split view: either a solid color fill or a nested view.
#[derive(Debug)]
pub enum PaneContent {
    Solid(Color),
    Split(SplitNode),
}

/// A split view together with its pane content, one entry per pane.
#[derive(Debug)]
pub struct SplitNode {
    pub view: SplitView,
    pub children: Vec<PaneContent>,
}

/// Result of routing a pointer location through the tree.
///
/// Paths are child indices from the root; for `Divider` the path names the
/// owning split node, for `Pane` it ends at the solid pane itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Divider { path: Vec<usize>, divider: usize },
    Pane { path: Vec<usize> },
    Miss,
}

impl Hit {
    fn prefixed(self, index: usize) -> Hit {
        match self {
            Hit::Divider { mut path, divider } => {
                path.insert(0, index);
                Hit::Divider { path, divider }
            }
            Hit::Pane { mut path } => {
                path.insert(0, index);
                Hit::Pane { path }
            }
            Hit::Miss => Hit::Miss,
        }
    }
}

impl SplitNode {
    pub fn new(
        orientation: Orientation,
        divider_thickness: f32,
        children: Vec<PaneContent>,
    ) -> Result<Self, SplitViewError> {
        let view = SplitView::new(orientation, children.len(), divider_thickness)?;
        Ok(Self { view, children })
    }

    fn layout_in(&self, area: Rect) -> Layout {
        self.view.layout(Size::new(area.width, area.height))
    }

    /// Flatten this subtree into draw quads, panes first, dividers on top.
    pub fn collect_quads(&self, area: Rect, divider_color: Color, out: &mut Vec<Quad>) {
        let layout = self.layout_in(area);

        for pane in &layout.panes {
            if pane.is_empty() {
                continue;
            }
            let child_area = translate(pane.rect, area);
            match &self.children[pane.index] {
                PaneContent::Solid(color) => out.push(quad(child_area, *color)),
                PaneContent::Split(node) => node.collect_quads(child_area, divider_color, out),
            }
        }

        for divider in &layout.dividers {
            out.push(quad(translate(divider.rect, area), divider_color));
        }
    }

    /// Route a pointer location to the divider or solid pane under it.
    /// Dividers win over panes; empty panes never hit.
    pub fn hit_test(&self, area: Rect, point: Point) -> Hit {
        if !area.contains(point) {
            return Hit::Miss;
        }
        let local = Point {
            x: point.x - area.x,
            y: point.y - area.y,
        };
        let layout = self.layout_in(area);

        if let Some(divider) = layout.dividers.iter().find(|d| d.rect.contains(local)) {
            return Hit::Divider {
                path: Vec::new(),
                divider: divider.index,
            };
        }

        for pane in &layout.panes {
            if !pane.rect.contains(local) {
                continue;
            }
            let child_area = translate(pane.rect, area);
            return match &self.children[pane.index] {
                PaneContent::Solid(_) => Hit::Pane {
                    path: vec![pane.index],
                },
                PaneContent::Split(node) => {
                    node.hit_test(child_area, point).prefixed(pane.index)
                }
            };
        }

        Hit::Miss
    }

    /// Path to the deepest split node whose area contains the point.
    pub fn innermost_split(&self, area: Rect, point: Point) -> Option<Vec<usize>> {
        if !area.contains(point) {
            return None;
        }
        let local = Point {
            x: point.x - area.x,
            y: point.y - area.y,
        };
        let layout = self.layout_in(area);
        for pane in &layout.panes {
            if let PaneContent::Split(node) = &self.children[pane.index] {
                if pane.rect.contains(local) {
                    let child_area = translate(pane.rect, area);
                    if let Some(mut path) = node.innermost_split(child_area, point) {
                        path.insert(0, pane.index);
                        return Some(path);
                    }
                }
            }
        }
        Some(Vec::new())
    }

    /// The split node a path points at.
    pub fn split_at_mut(&mut self, path: &[usize]) -> Option<&mut SplitNode> {
        match path.split_first() {
            None => Some(self),
            Some((&index, rest)) => match self.children.get_mut(index)? {
                PaneContent::Split(node) => node.split_at_mut(rest),
                PaneContent::Solid(_) => None,
            },
        }
    }

    /// Re-roll the pastel of the solid pane a path points at.
    pub fn recolor_pane(&mut self, path: &[usize]) -> bool {
        let Some((&last, parents)) = path.split_last() else {
            return false;
        };
        let Some(node) = self.split_at_mut(parents) else {
            return false;
        };
        match node.children.get_mut(last) {
            Some(PaneContent::Solid(color)) => {
                *color = Color::random_pastel();
                true
            }
            _ => false,
        }
    }

    /// The window-space area a path's split node currently occupies.
    pub fn area_of(&self, area: Rect, path: &[usize]) -> Option<Rect> {
        match path.split_first() {
            None => Some(area),
            Some((&index, rest)) => {
                let layout = self.layout_in(area);
                let pane = layout.panes.get(index)?;
                match &self.children[index] {
                    PaneContent::Split(node) => node.area_of(translate(pane.rect, area), rest),
                    PaneContent::Solid(_) => None,
                }
            }
        }
    }

    /// Convert a window-space pointer location into the local space of one
    /// of this node's dividers (relative to its resting slot), which is the
    /// coordinate space `SplitView::drag_move` records.
    pub fn divider_pointer(&self, area: Rect, divider: usize, point: Point) -> Option<Point> {
        let layout = self.layout_in(area);
        let slot = layout.dividers.get(divider)?.slot;
        Some(Point {
            x: point.x - area.x - slot.x,
            y: point.y - area.y - slot.y,
        })
    }
}

fn translate(rect: Rect, area: Rect) -> Rect {
    Rect {
        x: area.x + rect.x,
        y: area.y + rect.y,
        width: rect.width,
        height: rect.height,
    }
}

fn quad(rect: Rect, color: Color) -> Quad {
    Quad {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        color: color.as_array(),
    }
}

/// The demo scene: a horizontal root with two nested vertical splits,
/// mirroring the classic editor-plus-sidebars arrangement.
pub fn demo_tree(orientation: Orientation, divider_thickness: f32) -> SplitNode {
    let solid = || PaneContent::Solid(Color::random_pastel());
    let nested = |o: Orientation, n: usize| {
        let children = (0..n).map(|_| solid()).collect();
        PaneContent::Split(
            SplitNode::new(o, divider_thickness, children).expect("nested split has panes"),
        )
    };

    SplitNode::new(
        orientation,
        divider_thickness,
        vec![
            solid(),
            nested(Orientation::Vertical, 3),
            solid(),
            nested(Orientation::Vertical, 2),
        ],
    )
    .expect("root split has panes")
}
