// src/app.rs

use std::sync::Arc;

use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{Key, PhysicalKey},
    window::Window,
};

use koch_snowflake::config::ViewerConfig;
use koch_snowflake::input::{action_for_press, KeyAction};
use koch_snowflake::koch::MAX_ITERATIONS;
use koch_snowflake::scene::{Snowflake, Triangle};

use crate::rendering_lib::renderer::{FrameParams, LineStripRenderer};
use crate::rendering_lib::shader::WGSL_SHADER_SOURCE;
use crate::ui::{build_ui, OverlayInfo};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("surface reports no supported {0}")]
    IncompatibleSurface(&'static str),
    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}

/// What the event loop should do after a window event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Consumed,
    Exit,
}

/// Prefers an sRGB format; falls back to the first format and alpha mode the surface offers.
fn choose_surface_modes(
    caps: &wgpu::SurfaceCapabilities,
) -> Result<(wgpu::TextureFormat, wgpu::CompositeAlphaMode), AppError> {
    let fallback_format = *caps.formats.first()
        .ok_or(AppError::IncompatibleSurface("texture formats"))?;
    let format = caps.formats.iter().copied()
        .find(|f| f.is_srgb()).unwrap_or(fallback_format);
    let alpha_mode = *caps.alpha_modes.first()
        .ok_or(AppError::IncompatibleSurface("alpha modes"))?;
    Ok((format, alpha_mode))
}

pub struct SnowflakeApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    renderer: LineStripRenderer,
    snowflake: Snowflake,
    iterations: u32,
    line_color: [f32; 4],
    clear_color: wgpu::Color,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl SnowflakeApp {
    pub async fn new(window: Arc<Window>, viewer: &ViewerConfig) -> Result<Self, AppError> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(AppError::NoAdapter)?;
        log::info!("Using adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let (surface_format, alpha_mode) = choose_surface_modes(&surface_caps)?;

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

        let renderer = LineStripRenderer::new(
            &device, config.format, WGSL_SHADER_SOURCE,
            config.width as f32, config.height as f32,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(), egui::ViewportId::ROOT, &window,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device, config.format, None, 1,
        );

        let [r, g, b, a] = viewer.clear_color;
        let iterations = viewer.iterations.min(MAX_ITERATIONS);
        log::info!("Koch snowflake at {} iterations ({:?} rule)", iterations, viewer.rule);

        Ok(Self {
            surface, device, queue, config, size,
            renderer,
            snowflake: Snowflake::new(Triangle::unit(), viewer.rule),
            iterations,
            line_color: viewer.line_color,
            clear_color: wgpu::Color { r, g, b, a },
            egui_ctx, egui_state, egui_renderer,
        })
    }

    pub fn get_size(&self) -> winit::dpi::PhysicalSize<u32> { self.size }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Per-frame display step: clear, generate the three sides, draw, present.
    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        let sides = self.snowflake.sides(self.iterations);
        self.renderer.draw_strips(
            &self.device, &self.queue, &mut encoder, &view,
            &sides,
            &FrameParams {
                line_color: self.line_color,
                clear_color: self.clear_color,
                screen_width: self.config.width as f32,
                screen_height: self.config.height as f32,
            },
        );

        let info = OverlayInfo {
            iterations: self.iterations,
            max_iterations: MAX_ITERATIONS,
            vertex_count: sides.iter().map(Vec::len).sum(),
        };
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| { build_ui(ctx, &info); });
        self.egui_state.handle_platform_output(window, full_output.platform_output);
        let tris = self.egui_ctx.tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(&self.device, &self.queue, &mut encoder, &tris, &screen_descriptor);
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view, resolve_target: None,
                    ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
            });
            self.egui_renderer.render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free { self.egui_renderer.free_texture(tex_id); }

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();
        Ok(())
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> EventResponse {
        if self.egui_state.on_window_event(window, event).consumed {
            return EventResponse::Consumed;
        }
        match event {
            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key, logical_key, state: ElementState::Pressed, .. },
                ..
            } => {
                let key = match physical_key {
                    PhysicalKey::Code(code) => Some(*code),
                    PhysicalKey::Unidentified(_) => None,
                };
                let text = match logical_key {
                    Key::Character(text) => Some(text.as_str()),
                    _ => None,
                };
                self.handle_key_action(action_for_press(key, text))
            }
            _ => EventResponse::Ignored,
        }
    }

    fn handle_key_action(&mut self, action: KeyAction) -> EventResponse {
        match action {
            KeyAction::Quit => EventResponse::Exit,
            KeyAction::None => EventResponse::Ignored,
            KeyAction::MoreIterations | KeyAction::FewerIterations => {
                match action.apply_to_iterations(self.iterations) {
                    Ok(iterations) => {
                        self.iterations = iterations;
                        log::info!(
                            "Iterations set to {} ({} vertices)",
                            iterations,
                            self.snowflake.vertex_count(iterations).unwrap_or_default()
                        );
                    }
                    Err(e) => log::debug!("Ignoring key: {}", e),
                }
                EventResponse::Consumed
            }
        }
    }
}
