// Rendering system using wgpu

mod camera;
mod frames;
mod sprite;
mod texture;
mod vertex;

pub use frames::GpuFrameSource;
pub use texture::TextureHandle;

use camera::{Camera, CameraUniform};
use sprite::{Sprite, SpriteRenderer};
use texture::{Texture, TextureManager};

use anyhow::Result;
use glam::Vec2;
use image::RgbaImage;
use log::{info, warn};
use std::sync::Arc;
use winit::window::Window;

/// Owns the wgpu device and draws textured sprites over the play area
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sprite_renderer: SpriteRenderer,
    texture_manager: TextureManager,
    camera: Camera,
}

impl Renderer {
    /// Create a renderer for the window, showing a play area of `logical_size` pixels
    pub async fn new(window: Arc<Window>, logical_size: Vec2) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Surface reports no supported format"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        let sprite_renderer = SpriteRenderer::new(&device, surface_format);
        let camera = Camera::new(logical_size.x, logical_size.y);

        info!(
            "Renderer initialized with {}x{} surface",
            config.width, config.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sprite_renderer,
            texture_manager: TextureManager::new(),
            camera,
        })
    }

    /// Reconfigure the surface for a new window size
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            info!("Renderer resized to {}x{}", new_size.width, new_size.height);
        }
    }

    /// Upload an image, returning the handle sprites refer to it by
    pub fn upload_image(&mut self, image: &RgbaImage, label: &str) -> TextureHandle {
        let texture = Texture::from_image(
            &self.device,
            &self.queue,
            self.sprite_renderer.texture_bind_group_layout(),
            image,
            Some(label),
        );
        self.texture_manager.insert(texture)
    }

    /// Queue a texture at its native size, top-left corner at `position`
    pub fn draw_sprite(&mut self, texture: TextureHandle, position: Vec2) {
        let Some(size) = self.texture_manager.get(texture).map(Texture::size) else {
            warn!("Drawing unknown texture {:?}", texture);
            return;
        };

        self.sprite_renderer.add_sprite(Sprite {
            texture,
            position,
            size,
        });
    }

    /// Draw the queued sprites and present the frame
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render(&mut self) -> Result<()> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                self.sprite_renderer.clear();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Surface timeout, skipping frame");
                self.sprite_renderer.clear();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.sprite_renderer
            .prepare(&self.queue, CameraUniform::new(&self.camera));

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.sprite_renderer
                .render(&mut render_pass, &self.texture_manager);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.sprite_renderer.clear();

        Ok(())
    }

    pub fn texture_manager(&self) -> &TextureManager {
        &self.texture_manager
    }
}
