//! Animated portfolio backdrop
//!
//! A full-window particle field over a scroll and pointer driven wireframe
//! scene. The mouse wheel scrolls a simulated page several viewports tall.

mod backdrop;
mod config;

use backdrop::Backdrop;
use backdrop_core::{BackdropError, DrawList, HostEvent, Viewport};
use backdrop_renderer::BackdropRenderer;
use config::BackdropConfig;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const FRAME_TIME_WINDOW: usize = 60;

/// Window size in logical pixels, or `None` while it has no area.
///
/// Layers work in logical pixels so densities and distances look the same
/// on every display scale; the renderer maps them onto the physical surface.
fn logical_viewport(size: winit::dpi::PhysicalSize<u32>, scale_factor: f64) -> Option<Viewport> {
    let logical = size.to_logical::<f64>(scale_factor);
    let viewport = Viewport::new(logical.width.round() as u32, logical.height.round() as u32);
    (!viewport.is_empty()).then_some(viewport)
}

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: BackdropRenderer,
}

impl GpuState {
    async fn new(window: Arc<Window>) -> Result<Self, BackdropError> {
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Err(BackdropError::ZeroSizedSurface {
                width: size.width,
                height: size.height,
            });
        }

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance
            .create_surface(window)
            .map_err(|e| BackdropError::SurfaceUnavailable(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| BackdropError::Gpu(e.to_string()))?;

        log::info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| BackdropError::Gpu(e.to_string()))?;

        // Configure surface
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(surface_caps.formats.first())
            .copied()
            .ok_or_else(|| BackdropError::SurfaceUnavailable("no supported format".into()))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = BackdropRenderer::new(&device, config.format);
        log::info!("Renderer initialized ({:?})", config.format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn render(&mut self, list: &DrawList) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .render(&self.device, &self.queue, &view, list);

        output.present();
        Ok(())
    }
}

struct App {
    config: BackdropConfig,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    backdrop: Option<Backdrop>,
    last_frame_time: Instant,
    frame_times: VecDeque<f32>,
}

impl App {
    fn new(config: BackdropConfig) -> Self {
        Self {
            config,
            window: None,
            gpu_state: None,
            backdrop: None,
            last_frame_time: Instant::now(),
            frame_times: VecDeque::with_capacity(FRAME_TIME_WINDOW),
        }
    }

    /// Create the GPU state and mount the layers once the window has an area.
    ///
    /// Called on resume and again on every resize until it succeeds.
    fn set_up(&mut self) {
        if self.gpu_state.is_some() {
            return;
        }
        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(viewport) = logical_viewport(window.inner_size(), window.scale_factor()) else {
            log::debug!("Window has no area yet, deferring setup");
            return;
        };

        // No drawing context means no layers at all; the window stays blank
        match pollster::block_on(GpuState::new(window)) {
            Ok(gpu_state) => {
                self.backdrop = Some(Backdrop::new(&self.config, viewport));
                self.gpu_state = Some(gpu_state);
            }
            Err(e) => log::warn!("Backdrop disabled: {}", e),
        }
    }

    fn send(&mut self, event: HostEvent) {
        if let Some(backdrop) = &mut self.backdrop {
            log::trace!("{:?}", event);
            backdrop.handle(event);
        }
    }

    /// Record a frame and return (fps, average frame time in ms).
    fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;

        if self.frame_times.len() == FRAME_TIME_WINDOW {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);

        let avg = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        let fps = if avg > 0.0 { 1000.0 / avg } else { 0.0 };
        (fps, avg)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("Portfolio Backdrop")
            .with_inner_size(winit::dpi::LogicalSize::new(1440, 900));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window);
        self.set_up();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                let page = self
                    .backdrop
                    .as_ref()
                    .map(|b| b.signals().viewport.height as f32 * 0.9)
                    .unwrap_or(0.0);
                match code {
                    KeyCode::Home => self.send(HostEvent::Scrolled { offset: 0 }),
                    KeyCode::End => self.send(HostEvent::Scrolled { offset: u32::MAX }),
                    KeyCode::PageDown | KeyCode::Space => {
                        self.send(HostEvent::ScrolledBy { delta: page })
                    }
                    KeyCode::PageUp => self.send(HostEvent::ScrolledBy { delta: -page }),
                    KeyCode::ArrowDown => self.send(HostEvent::ScrolledBy {
                        delta: self.config.scroll_step,
                    }),
                    KeyCode::ArrowUp => self.send(HostEvent::ScrolledBy {
                        delta: -self.config.scroll_step,
                    }),
                    _ => {}
                }
            }

            WindowEvent::Resized(physical_size) => {
                let Some(window) = self.window.clone() else {
                    return;
                };
                match &mut self.gpu_state {
                    Some(gpu_state) => {
                        gpu_state.resize(physical_size);
                        let viewport = logical_viewport(physical_size, window.scale_factor())
                            .unwrap_or_default();
                        self.send(HostEvent::Resized(viewport));
                    }
                    None => self.set_up(),
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let viewport =
                        logical_viewport(window.inner_size(), scale_factor).unwrap_or_default();
                    self.send(HostEvent::Resized(viewport));
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale_factor = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                let position = position.to_logical::<f32>(scale_factor);
                self.send(HostEvent::PointerMoved {
                    x: position.x,
                    y: position.y,
                });
            }
            WindowEvent::CursorEntered { .. } => self.send(HostEvent::PointerEntered),
            WindowEvent::CursorLeft { .. } => self.send(HostEvent::PointerLeft),

            WindowEvent::MouseWheel { delta, .. } => {
                // Wheel down is negative in winit and scrolls the page down
                let scale_factor = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * self.config.scroll_step,
                    MouseScrollDelta::PixelDelta(p) => -(p.y / scale_factor) as f32,
                };
                self.send(HostEvent::ScrolledBy { delta });
            }

            WindowEvent::RedrawRequested => {
                let (fps, frame_time) = self.tick();
                if let (Some(window), Some(gpu_state), Some(backdrop)) =
                    (&self.window, &mut self.gpu_state, &mut self.backdrop)
                {
                    let list = backdrop.frame();
                    match gpu_state.render(list) {
                        Ok(()) => {
                            let signals = backdrop.signals();
                            window.set_title(&format!(
                                "Portfolio Backdrop - {:.0} FPS ({:.2}ms) - scroll {:.0}%",
                                fps,
                                frame_time,
                                signals.scroll_progress * 100.0
                            ));
                        }
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.resize(window.inner_size())
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
            }

            _ => {}
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(mut backdrop) = self.backdrop.take() {
            backdrop.shutdown();
        }
    }
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BackdropConfig::from_env();
    log::info!(
        "Starting portfolio backdrop ({} pages, seed {:?})",
        config.pages,
        config.seed
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop terminated: {}", e);
    }
}
