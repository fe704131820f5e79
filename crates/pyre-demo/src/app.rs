use glam::Vec3;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use pyre_engine::core::{App, AppControl, FrameCtx};
use pyre_engine::geometry::{icosphere, MAX_SUBDIVISION_LEVEL};
use pyre_engine::render::{fire_program, GpuMesh, MeshRenderer, ShaderProgram};
use pyre_engine::scene::{Camera, ControlAction, ControlState, FrameDriver};

/// Which numeric control a +/- key pair adjusts.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Param {
    FireFreq,
    Speed,
    Detail,
    VoronoiScale,
}

/// Everything a key press can do. The keyboard is this demo's parameter
/// panel: sliders become +/- key pairs, buttons become palette/reset keys.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Binding {
    SetTessellation(u32),
    Adjust(Param, f32),
    Palette(ControlAction),
    Reset,
    ReloadScene,
    Orbit(f32),
    Quit,
}

fn bind(code: KeyCode) -> Option<Binding> {
    use Binding::*;
    match code {
        KeyCode::Digit0 => Some(SetTessellation(0)),
        KeyCode::Digit1 => Some(SetTessellation(1)),
        KeyCode::Digit2 => Some(SetTessellation(2)),
        KeyCode::Digit3 => Some(SetTessellation(3)),
        KeyCode::Digit4 => Some(SetTessellation(4)),
        KeyCode::Digit5 => Some(SetTessellation(5)),
        KeyCode::Digit6 => Some(SetTessellation(6)),
        KeyCode::Digit7 => Some(SetTessellation(7)),
        KeyCode::Digit8 => Some(SetTessellation(8)),

        KeyCode::KeyU => Some(Adjust(Param::FireFreq, 0.1)),
        KeyCode::KeyJ => Some(Adjust(Param::FireFreq, -0.1)),
        KeyCode::KeyI => Some(Adjust(Param::Speed, 0.2)),
        KeyCode::KeyK => Some(Adjust(Param::Speed, -0.2)),
        KeyCode::KeyO => Some(Adjust(Param::Detail, 0.1)),
        KeyCode::KeyL => Some(Adjust(Param::Detail, -0.1)),
        KeyCode::KeyP => Some(Adjust(Param::VoronoiScale, 0.1)),
        KeyCode::Semicolon => Some(Adjust(Param::VoronoiScale, -0.1)),

        KeyCode::KeyG => Some(Palette(ControlAction::GhostFire)),
        KeyCode::KeyC => Some(Palette(ControlAction::CherryFire)),
        KeyCode::KeyE => Some(Palette(ControlAction::EveningFire)),
        KeyCode::KeyR => Some(Reset),
        KeyCode::Enter => Some(ReloadScene),

        KeyCode::ArrowLeft => Some(Orbit(-0.1)),
        KeyCode::ArrowRight => Some(Orbit(0.1)),

        KeyCode::Escape => Some(Quit),
        _ => None,
    }
}

/// The fire demo: one icosphere, one shader program, a keyboard-driven
/// control store read once per frame.
pub struct FireApp {
    controls: ControlState,
    driver: FrameDriver,
    camera: Camera,

    program: ShaderProgram,
    renderer: MeshRenderer,

    /// The current drawable. `None` forces a (re)build on the next frame;
    /// dropping the old value releases its GPU buffers.
    sphere: Option<GpuMesh>,
}

impl FireApp {
    pub fn new() -> Self {
        let controls = ControlState::default();
        let driver = FrameDriver::new(&controls);

        Self {
            controls,
            driver,
            camera: Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO),
            program: fire_program(),
            renderer: MeshRenderer::new(),
            sphere: None,
        }
    }

    fn apply(&mut self, binding: Binding) -> AppControl {
        match binding {
            Binding::SetTessellation(level) => {
                self.controls.tessellations = level.min(MAX_SUBDIVISION_LEVEL);
            }
            Binding::Adjust(param, delta) => {
                let slot = match param {
                    Param::FireFreq => &mut self.controls.fire_freq,
                    Param::Speed => &mut self.controls.speed,
                    Param::Detail => &mut self.controls.detail,
                    Param::VoronoiScale => &mut self.controls.voronoi_scale,
                };
                *slot += delta;
            }
            Binding::Palette(action) => {
                self.controls = self.controls.clone().apply(action);
            }
            Binding::Reset => {
                self.controls = self.controls.clone().apply(ControlAction::Reset);
                self.driver.reset();
            }
            Binding::ReloadScene => {
                self.sphere = None;
            }
            Binding::Orbit(yaw) => {
                self.camera.orbit(yaw);
            }
            Binding::Quit => return AppControl::Exit,
        }
        AppControl::Continue
    }
}

impl App for FireApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            // Resize re-derives aspect-dependent state synchronously, before
            // the next frame is drawn.
            WindowEvent::Resized(size) => {
                if size.height > 0 {
                    self.camera
                        .set_aspect_ratio(size.width as f32 / size.height as f32);
                    self.camera.update_projection_matrix();
                }
                AppControl::Continue
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return AppControl::Continue;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return AppControl::Continue;
                };
                match bind(code) {
                    Some(binding) => self.apply(binding),
                    None => AppControl::Continue,
                }
            }

            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let plan = self.driver.plan(&self.controls);
        self.camera.update();

        // Tessellation change tears the old mesh down; its GPU buffers are
        // released when the Option drops the previous value below.
        let level = self.controls.tessellations;
        if plan.rebuild.is_some() {
            self.sphere = None;
        }

        let camera = &self.camera;
        let program = &mut self.program;
        let renderer = &mut self.renderer;
        let sphere = &mut self.sphere;

        ctx.render(plan.clear_color, |rctx, target| {
            if sphere.is_none() {
                match icosphere(Vec3::ZERO, 1.0, level) {
                    Ok(mesh) => {
                        log::info!(
                            "icosphere level {level}: {} triangles",
                            mesh.triangle_count()
                        );
                        *sphere = Some(GpuMesh::upload(rctx.device, "pyre icosphere", &mesh));
                    }
                    Err(err) => {
                        log::error!("icosphere rebuild failed: {err}");
                        return;
                    }
                }
            }

            program.set_time(plan.time);
            program.set_float("u_Freq", plan.fire_freq);
            program.set_float("u_Speed", plan.speed);
            program.set_float("u_Detail", plan.detail);
            program.set_float("u_VoronoiScale", plan.voronoi_scale);
            program.set_vec4("u_InnerCol", plan.inner_color.to_array());
            program.set_vec4("u_OuterCol", plan.outer_color.to_array());

            let Some(mesh) = sphere.as_ref() else { return };
            renderer.render(rctx, target, camera, program, &[mesh], plan.base_color);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_tessellation_levels() {
        assert_eq!(bind(KeyCode::Digit0), Some(Binding::SetTessellation(0)));
        assert_eq!(bind(KeyCode::Digit8), Some(Binding::SetTessellation(8)));
        assert_eq!(bind(KeyCode::KeyZ), None);
    }

    #[test]
    fn palette_keys_dispatch_actions() {
        assert_eq!(
            bind(KeyCode::KeyG),
            Some(Binding::Palette(ControlAction::GhostFire))
        );
        assert_eq!(
            bind(KeyCode::KeyC),
            Some(Binding::Palette(ControlAction::CherryFire))
        );
    }

    #[test]
    fn tessellation_key_updates_the_control_store() {
        let mut app = FireApp::new();
        app.apply(Binding::SetTessellation(3));
        assert_eq!(app.controls.tessellations, 3);

        // Out-of-range requests are capped at the geometry builder maximum.
        app.apply(Binding::SetTessellation(99));
        assert_eq!(app.controls.tessellations, MAX_SUBDIVISION_LEVEL);
    }

    #[test]
    fn reset_restores_controls_and_quit_exits() {
        let mut app = FireApp::new();
        app.apply(Binding::Adjust(Param::Speed, 0.2));
        assert!((app.controls.speed - 1.2).abs() < 1e-6);

        assert_eq!(app.apply(Binding::Reset), AppControl::Continue);
        assert_eq!(app.controls, ControlState::default());

        assert_eq!(app.apply(Binding::Quit), AppControl::Exit);
    }
}
