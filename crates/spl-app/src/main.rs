// ABOUTME: Main application entry point for the split-pane demo.
// ABOUTME: Sets up window and event loop, wires pointer events to dividers.

mod content;

use std::sync::Arc;

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

use content::{demo_tree, Hit, SplitNode};
use spl_core::Config;
use spl_layout::{Point, Rect};
use spl_renderer::Renderer;

/// An in-progress divider drag: which split node (by path) and which divider.
struct DragTarget {
    path: Vec<usize>,
    divider: usize,
}

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    config: Config,
    root: SplitNode,
    mouse_pos: (f64, f64),
    active_drag: Option<DragTarget>,
}

impl App {
    fn new() -> Self {
        let config = Config::load_or_default();

        // Write the knobs out on first run so they are discoverable.
        if let Some(path) = Config::default_path() {
            if !path.exists() {
                match config.save(&path) {
                    Ok(()) => tracing::info!("Wrote default config to {}", path.display()),
                    Err(e) => tracing::warn!("Failed to write default config: {}", e),
                }
            }
        }

        tracing::info!(
            "Loaded config: orientation={:?} divider_thickness={}",
            config.orientation,
            config.divider_thickness
        );

        let root = demo_tree(config.orientation, config.divider_thickness);
        Self {
            window: None,
            renderer: None,
            config,
            root,
            mouse_pos: (0.0, 0.0),
            active_drag: None,
        }
    }

    fn root_area(&self) -> Option<Rect> {
        let renderer = self.renderer.as_ref()?;
        let (width, height) = renderer.window_size();
        Some(Rect {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
        })
    }

    fn pointer(&self) -> Point {
        Point {
            x: self.mouse_pos.0 as f32,
            y: self.mouse_pos.1 as f32,
        }
    }

    fn render_frame(&mut self) {
        let Some(area) = self.root_area() else {
            return;
        };
        let mut quads = Vec::new();
        self.root
            .collect_quads(area, self.config.divider_color, &mut quads);

        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.render(&quads) {
                tracing::error!("Render error: {}", e);
            }
        }
    }

    fn begin_drag(&mut self, path: Vec<usize>, divider: usize) {
        let Some(area) = self.root_area() else {
            return;
        };
        let point = self.pointer();
        let Some(node_area) = self.root.area_of(area, &path) else {
            return;
        };
        let Some(node) = self.root.split_at_mut(&path) else {
            return;
        };
        let Some(rel) = node.divider_pointer(node_area, divider, point) else {
            return;
        };
        if node.view.drag_start(divider, rel) {
            tracing::debug!("Drag started on divider {} of {:?}", divider, path);
            self.active_drag = Some(DragTarget { path, divider });
        }
    }

    fn update_drag(&mut self) {
        let Some(area) = self.root_area() else {
            return;
        };
        let point = self.pointer();
        let Some(target) = &self.active_drag else {
            return;
        };
        let path = target.path.clone();
        let divider = target.divider;

        let Some(node_area) = self.root.area_of(area, &path) else {
            return;
        };
        let Some(node) = self.root.split_at_mut(&path) else {
            return;
        };
        if let Some(rel) = node.divider_pointer(node_area, divider, point) {
            node.view.drag_move(divider, rel);
        }
    }

    fn end_drag(&mut self) {
        if let Some(target) = self.active_drag.take() {
            if let Some(node) = self.root.split_at_mut(&target.path) {
                node.view.drag_end(target.divider);
            }
            tracing::debug!("Drag ended on divider {} of {:?}", target.divider, target.path);
        }
    }

    fn toggle_under_cursor(&mut self) {
        let Some(area) = self.root_area() else {
            return;
        };
        let Some(path) = self.root.innermost_split(area, self.pointer()) else {
            return;
        };

        // A toggled view only abandons its own sessions; a drag held in a
        // descendant view must be released or its divider stays occupied.
        let drag_in_subtree = self
            .active_drag
            .as_ref()
            .is_some_and(|target| target.path.starts_with(&path));
        if drag_in_subtree {
            self.end_drag();
        }

        if let Some(node) = self.root.split_at_mut(&path) {
            node.view.toggle_orientation();
            tracing::info!(
                "Toggled split {:?} to {:?}",
                path,
                node.view.orientation()
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("split-pane")
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let renderer =
            pollster::block_on(Renderer::new(Arc::clone(&window))).expect("Failed to create renderer");

        let physical_size = window.inner_size();
        tracing::info!(
            "Window created: {}x{} physical pixels, scale factor: {}",
            physical_size.width,
            physical_size.height,
            window.scale_factor()
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_pos = (position.x, position.y);
                if self.active_drag.is_some() {
                    self.update_drag();
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match (button, state) {
                (MouseButton::Left, ElementState::Pressed) => {
                    if let Some(area) = self.root_area() {
                        match self.root.hit_test(area, self.pointer()) {
                            Hit::Divider { path, divider } => self.begin_drag(path, divider),
                            Hit::Pane { path } => {
                                self.root.recolor_pane(&path);
                            }
                            Hit::Miss => {}
                        }
                    }
                }
                (MouseButton::Left, ElementState::Released) => {
                    self.end_drag();
                }
                (MouseButton::Right, ElementState::Pressed) => {
                    self.toggle_under_cursor();
                }
                _ => {}
            },
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting split-pane demo");

    let event_loop = EventLoop::new()?;
    let mut app = App::new();

    event_loop.run_app(&mut app)?;

    Ok(())
}
