//! Settings overlay drawn with egui on top of the trail

use egui::Widget;
use glam::Vec2;
use particle_trail::{ParticleTrail, RandomSource};

use crate::{framepace::Framepacer, gpu::GpuContext};

pub struct HudOverlay {
    ctx: egui::Context,
    events: Vec<egui::Event>,
    size: [u32; 2],
    cursor: egui::Pos2,

    renderer: egui_wgpu::Renderer,
    primitives: Vec<egui::ClippedPrimitive>,
}

impl HudOverlay {
    pub fn new(gpu: &GpuContext) -> Self {
        Self {
            ctx: egui::Context::default(),
            events: Vec::new(),
            size: [gpu.config.width, gpu.config.height],
            cursor: egui::Pos2::ZERO,

            renderer: egui_wgpu::Renderer::new(&gpu.device, gpu.format(), None, 1),
            primitives: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = [width, height];
    }

    /// Whether the last frame had the pointer over an overlay window.
    pub fn wants_pointer(&self) -> bool {
        self.ctx.wants_pointer_input()
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.cursor = egui::Pos2::new(position.x, position.y);
        self.events.push(egui::Event::PointerMoved(self.cursor));
    }

    pub fn pointer_button(
        &mut self,
        state: winit::event::ElementState,
        button: winit::event::MouseButton,
    ) {
        let button = match button {
            winit::event::MouseButton::Left => egui::PointerButton::Primary,
            winit::event::MouseButton::Right => egui::PointerButton::Secondary,
            winit::event::MouseButton::Middle => egui::PointerButton::Middle,
            _ => return,
        };

        self.events.push(egui::Event::PointerButton {
            pos: self.cursor,
            button,
            pressed: state.is_pressed(),
            modifiers: egui::Modifiers::default(),
        });
    }

    /// Lays out the settings window and uploads its geometry and textures.
    pub fn prepare<R: RandomSource>(
        &mut self,
        gpu: &GpuContext,
        encoder: &mut wgpu::CommandEncoder,
        trail: &mut ParticleTrail<R>,
        framepace: &Framepacer,
    ) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(self.size[0] as f32, self.size[1] as f32),
            )),
            predicted_dt: framepace.frametime(),
            events: std::mem::take(&mut self.events),
            ..Default::default()
        };

        let output = self.ctx.run(input, |ctx| {
            settings_window(ctx, trail, framepace.framerate());
        });
        self.primitives = self.ctx.tessellate(output.shapes, output.pixels_per_point);

        let screen = self.screen();
        for (id, delta) in &output.textures_delta.set {
            self.renderer
                .update_texture(&gpu.device, &gpu.queue, *id, delta);
        }
        self.renderer
            .update_buffers(&gpu.device, &gpu.queue, encoder, &self.primitives, &screen);
        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    pub fn render<'a>(&'a self, rpass: &mut wgpu::RenderPass<'a>) {
        self.renderer.render(rpass, &self.primitives, &self.screen());
    }

    fn screen(&self) -> egui_wgpu::ScreenDescriptor {
        egui_wgpu::ScreenDescriptor {
            size_in_pixels: self.size,
            pixels_per_point: self.ctx.pixels_per_point(),
        }
    }
}

fn settings_window<R: RandomSource>(ctx: &egui::Context, trail: &mut ParticleTrail<R>, fps: f32) {
    egui::Window::new("Trail")
        .default_width(145.0)
        .show(ctx, |ui| {
            ui.label(format!("FPS {:.1}", fps));
            ui.label(format!("Particles {}", trail.len()));
            ui.label(if trail.is_active() {
                "Loop active"
            } else {
                "Loop idle"
            });

            let pointer = trail.pointer();
            ui.label(format!("Pointer\nx: {}\ny: {}", pointer.x, pointer.y));

            ui.separator();
            ui.label("Spawn chance");
            egui::widgets::Slider::new(&mut trail.config_mut().spawn_probability, 0.0..=1.0)
                .ui(ui);
        });
}
