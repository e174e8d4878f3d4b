// ABOUTME: Main GPU renderer using wgpu.
// ABOUTME: Clears the frame and draws the prepared quad list.

use std::sync::Arc;
use winit::window::Window;

use crate::gpu::GpuState;
use crate::quad_pipeline::{Quad, QuadPipeline};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter found")]
    NoAdapter,

    #[error("Failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

pub struct Renderer {
    gpu: GpuState,
    clear_color: wgpu::Color,
    quad_pipeline: QuadPipeline,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Result<Self, RenderError> {
        let gpu = GpuState::new(window).await?;

        let clear_color = wgpu::Color {
            r: 0.08,
            g: 0.08,
            b: 0.09,
            a: 1.0,
        };

        let mut quad_pipeline = QuadPipeline::new(&gpu.device, gpu.config.format);
        let (width, height) = gpu.size;
        quad_pipeline.update_screen_size(&gpu.queue, width as f32, height as f32);

        Ok(Self {
            gpu,
            clear_color,
            quad_pipeline,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.quad_pipeline
            .update_screen_size(&self.gpu.queue, width as f32, height as f32);
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.gpu.size
    }

    /// Draw one frame: clear, then the quads in order.
    pub fn render(&mut self, quads: &[Quad]) -> Result<(), RenderError> {
        self.quad_pipeline.prepare(&self.gpu.queue, quads);

        let output = self.gpu.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Quad Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.quad_pipeline.render(&mut render_pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
