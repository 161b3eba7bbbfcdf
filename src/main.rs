mod cli;
mod framepace;
mod gpu;
mod hud;
mod render;

use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Parser;
use framepace::Framepacer;
use glam::Vec2;
use gpu::GpuContext;
use hud::HudOverlay;
use log::{error, info, warn};
use particle_trail::{CircleBatch, DrawingSurface, FrameScheduler, ParticleTrail, RngSource};
use rand::rngs::StdRng;
use render::RenderModule;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

type Trail = ParticleTrail<RngSource<StdRng>>;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Collect Arguments
    let args = cli::Args::parse();

    let random = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    // Setup Winit, the trail wakes the loop when it needs a frame
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    // State
    let mut app_state = AppState {
        tokio_rt: tokio::runtime::Runtime::new()?,
        gfx: None,

        trail: ParticleTrail::new(args.trail_config(), random),
        batch: CircleBatch::new(args.width, args.height),
        frames: RedrawScheduler::default(),
        framepace: Framepacer::new(args.framerate),

        show_hud: args.hud,
        error: None,
    };

    event_loop.run_app(&mut app_state)?;

    match app_state.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Turns frame requests into window redraws and remembers that a step is owed.
#[derive(Default)]
struct RedrawScheduler {
    window: Option<Arc<Window>>,
    pending: bool,
}

impl RedrawScheduler {
    fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

#[derive(Debug)]
enum FrameRecovery {
    Reconfigure,
    Skip,
}

/// Lost and outdated swapchains are rebuilt, out of memory ends the app.
fn recover_surface(err: wgpu::SurfaceError) -> anyhow::Result<FrameRecovery> {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Ok(FrameRecovery::Reconfigure),
        wgpu::SurfaceError::OutOfMemory => Err(anyhow!("Out of memory while acquiring a frame")),
        err => {
            warn!("Skipping frame: {err}");
            Ok(FrameRecovery::Skip)
        }
    }
}

struct GfxState {
    window: Arc<Window>,
    gpu: GpuContext,

    render_module: RenderModule,
    hud: Option<HudOverlay>,
}

struct AppState {
    tokio_rt: tokio::runtime::Runtime,
    gfx: Option<GfxState>,

    trail: Trail,
    batch: CircleBatch,
    frames: RedrawScheduler,
    framepace: Framepacer,

    show_hud: bool,
    error: Option<anyhow::Error>,
}

impl AppState {
    fn create_gfx(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<GfxState> {
        let (width, height) = self.batch.size();
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("Particle Trail")
                        .with_inner_size(PhysicalSize::new(width, height)),
                )
                .context("Failed to create window")?,
        );
        let window_size = window.inner_size();

        let gpu = self.tokio_rt.block_on(GpuContext::new(window.clone()))?;
        info!(
            "Surface ready: {{ width: {}, height: {}, format: {:?} }}",
            gpu.config.width,
            gpu.config.height,
            gpu.format()
        );

        let render_module = RenderModule::new(&gpu.device, gpu.format());
        let hud = self.show_hud.then(|| HudOverlay::new(&gpu));

        self.trail
            .resize(&mut self.batch, window_size.width, window_size.height);

        Ok(GfxState {
            window,
            gpu,
            render_module,
            hud,
        })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };

        self.framepace.begin_frame();

        if self.frames.take() {
            self.trail.step(&mut self.batch, &mut self.frames);
        }

        let frame = match gfx.gpu.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(err) => {
                match recover_surface(err) {
                    Ok(FrameRecovery::Reconfigure) => {
                        gfx.gpu.reconfigure_surface();
                        gfx.window.request_redraw();
                    }
                    Ok(FrameRecovery::Skip) => (),
                    Err(err) => {
                        error!("{err}");
                        self.error = Some(err);
                        event_loop.exit();
                    }
                }
                return;
            }
        };

        gfx.render_module
            .upload(&gfx.gpu.device, &gfx.gpu.queue, &self.batch);

        let mut encoder = gfx
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        if let Some(hud) = &mut gfx.hud {
            hud.prepare(&gfx.gpu, &mut encoder, &mut self.trail, &self.framepace);
        }

        // Render
        {
            let view = frame
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());

            let mut rpass = gfx.render_module.begin_pass(&mut encoder, &view);
            if let Some(hud) = &gfx.hud {
                hud.render(&mut rpass);
            }
        }

        gfx.gpu.queue.submit(Some(encoder.finish()));
        frame.present();

        self.framepace.end_frame();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }

        match self.create_gfx(event_loop) {
            Ok(gfx) => {
                self.frames.window = Some(gfx.window.clone());
                gfx.window.request_redraw();
                self.gfx = Some(gfx);
            }
            Err(err) => {
                error!("{err:#}");
                self.error = Some(err);
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
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if !gfx.gpu.resize(new_size.width, new_size.height) {
                    return;
                }

                self.trail
                    .resize(&mut self.batch, new_size.width, new_size.height);
                if let Some(hud) = &mut gfx.hud {
                    hud.resize(new_size.width, new_size.height);
                }
                gfx.window.request_redraw();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(hud) = &mut gfx.hud {
                    hud.pointer_button(state, button);
                    gfx.window.request_redraw();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);

                let over_hud = match &mut gfx.hud {
                    Some(hud) => {
                        hud.pointer_moved(position);
                        gfx.window.request_redraw();
                        hud.wants_pointer()
                    }
                    None => false,
                };

                if over_hud {
                    self.trail.track_pointer(position);
                } else {
                    self.trail.pointer_moved(position, &mut self.frames);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => (),
        }
    }
}
