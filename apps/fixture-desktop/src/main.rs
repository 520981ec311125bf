use anyhow::{Context, Result};
use clap::Parser;
use egui::Context as EguiContext;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};
use fixture_input::{Control, InputState};
use fixture_render_wgpu::WgpuRenderer;
use fixture_scene::{FrameControl, Scene, SceneConfig};

#[derive(Parser)]
#[command(name = "fixture-desktop", about = "Fixture scene desktop application")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML scene configuration; built-in scene when omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Physical key binding for each logical control.
fn control_for(key: KeyCode) -> Option<Control> {
    Some(match key {
        KeyCode::KeyW => Control::Forward,
        KeyCode::KeyS => Control::Back,
        KeyCode::KeyA => Control::StrafeLeft,
        KeyCode::KeyD => Control::StrafeRight,
        KeyCode::Space => Control::Ascend,
        KeyCode::ShiftLeft => Control::Descend,
        KeyCode::KeyQ => Control::OrbitLeft,
        KeyCode::KeyE => Control::OrbitRight,
        KeyCode::Escape => Control::Exit,
        _ => return None,
    })
}

/// Application state.
struct AppState {
    scene: Scene,
    input: InputState,
    show_inspector: bool,
    last_frame: Instant,
}

impl AppState {
    fn new(scene: Scene) -> Self {
        Self {
            scene,
            input: InputState::new(),
            show_inspector: true,
            last_frame: Instant::now(),
        }
    }

    fn update(&mut self) -> FrameControl {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;
        self.scene.update(dt, &self.input)
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(control) = control_for(key) {
            self.input.set(control, pressed);
        } else if pressed && key == KeyCode::F1 {
            self.show_inspector = !self.show_inspector;
        }
    }

    fn draw_ui(&self, ctx: &EguiContext) {
        if !self.show_inspector {
            return;
        }

        let snap = self.scene.snapshot();

        egui::SidePanel::left("inspector")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Fixture Scene");
                ui.separator();
                ui.label(format!("Frame: {}  Time: {:.1}s", snap.frame, snap.elapsed));
                ui.label(format!(
                    "Player: ({:.1}, {:.1}, {:.1})",
                    snap.player.x, snap.player.y, snap.player.z
                ));
                ui.label(format!("Camera angle: {:.2} rad", snap.camera_angle));
                ui.separator();

                ui.heading("Elevator");
                ui.label(format!(
                    "Displacement: {:.2} ({:?})",
                    snap.elevator.displacement, snap.elevator.direction
                ));

                ui.separator();
                ui.heading("Pendulums");
                for (i, p) in snap.pendulums.iter().enumerate() {
                    ui.label(format!(
                        "#{i}: angle {:.2} ({:?}) yaw {:.2} length {:.1}",
                        p.angle, p.direction, p.rotation_angle, p.length
                    ));
                    if let Some(motion) = p.secondary_motion {
                        ui.small(format!(
                            "    drift ({:.1}, {:.1}, {:.1}) spin {:.2}/s",
                            motion.drift.x, motion.drift.y, motion.drift.z, motion.spin_rate
                        ));
                    }
                }

                ui.separator();
                ui.small("WASD: Move | Space/Shift: Up/Down | Q/E: Orbit | F1: Inspector | Esc: Quit");
            });
    }
}

/// Window, device and renderers, created once the event loop resumes.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Gpu {
    fn new(event_loop: &ActiveEventLoop, egui_ctx: &EguiContext, scene: &Scene) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title("Fixture Scene")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("fixture_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WgpuRenderer::new(
            &device,
            surface_format,
            config.width,
            config.height,
            scene.meshes(),
        );

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    fn draw_overlay(
        &mut self,
        egui_ctx: &EguiContext,
        state: &AppState,
        view: &wgpu::TextureView,
    ) {
        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = egui_ctx.run(raw_input, |ctx| {
            state.draw_ui(ctx);
        });

        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

struct GpuApp {
    state: AppState,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
}

impl GpuApp {
    fn new(scene: Scene) -> Self {
        Self {
            state: AppState::new(scene),
            gpu: None,
            egui_ctx: EguiContext::default(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.update() == FrameControl::Exit {
            tracing::info!("exit requested");
            event_loop.exit();
            return;
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let frame = self.state.scene.frame();
        gpu.renderer.render(&gpu.device, &gpu.queue, &view, &frame);
        gpu.draw_overlay(&self.egui_ctx, &self.state, &view);

        output.present();
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        match Gpu::new(event_loop, &self.egui_ctx, &self.state.scene) {
            Ok(gpu) => {
                let size = gpu.window.inner_size();
                self.state.scene.set_viewport(size.width, size.height);
                self.state.last_frame = Instant::now();
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("failed to initialize graphics: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gpu) = &mut self.gpu {
            let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                    self.state
                        .scene
                        .set_viewport(gpu.config.width, gpu.config.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::Focused(false) => {
                self.state.input.clear();
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("fixture-desktop starting");

    let config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    let scene = Scene::new(&config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(scene);
    event_loop.run_app(&mut app)?;

    Ok(())
}
