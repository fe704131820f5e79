use crate::paint::Color;

use super::ControlState;

/// Everything one frame needs, derived from the control store.
///
/// The driver stays off the GPU: the caller applies the plan by rebuilding
/// geometry when asked, pushing the uniform values, and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    /// Monotonic time counter value for this frame (one unit per tick).
    pub time: f32,

    /// `Some(level)` when the tessellation control changed since the last
    /// tick; the old icosphere must be dropped and rebuilt at this level.
    pub rebuild: Option<u32>,

    pub fire_freq: f32,
    pub speed: f32,
    pub detail: f32,
    pub voronoi_scale: f32,

    pub inner_color: Color,
    pub outer_color: Color,
    pub base_color: Color,
    pub clear_color: Color,
}

/// Per-frame driver: owns the time counter and the previous-tessellation
/// shadow value used to detect rebuilds.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    time: u64,
    prev_tessellations: u32,
}

impl FrameDriver {
    /// Creates a driver whose shadow value matches the current control
    /// store, so the first tick does not trigger a redundant rebuild of the
    /// mesh built at scene load.
    pub fn new(controls: &ControlState) -> Self {
        Self {
            time: 0,
            prev_tessellations: controls.tessellations,
        }
    }

    /// Advances one tick and derives the frame plan from `controls`.
    pub fn plan(&mut self, controls: &ControlState) -> FramePlan {
        self.time = self.time.wrapping_add(1);

        let rebuild = if controls.tessellations != self.prev_tessellations {
            self.prev_tessellations = controls.tessellations;
            Some(controls.tessellations)
        } else {
            None
        };

        FramePlan {
            time: self.time as f32,
            rebuild,
            fire_freq: controls.fire_freq,
            speed: controls.speed,
            detail: controls.detail,
            voronoi_scale: controls.voronoi_scale,
            inner_color: Color::from_u8_triple(controls.inner_color),
            outer_color: Color::from_u8_triple(controls.outer_color),
            base_color: Color::from_u8_triple(controls.color),
            clear_color: Color::from_u8_triple(controls.background_color),
        }
    }

    /// Restarts the animation clock (scene reset).
    ///
    /// The tessellation shadow value is deliberately left untouched: a reset
    /// flows back through the normal change-detection path, so the mesh is
    /// rebuilt only if the reset actually changed the slider value.
    pub fn reset(&mut self) {
        self.time = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::icosphere;
    use glam::Vec3;

    #[test]
    fn time_counts_ticks() {
        let controls = ControlState::default();
        let mut driver = FrameDriver::new(&controls);
        assert_eq!(driver.plan(&controls).time, 1.0);
        assert_eq!(driver.plan(&controls).time, 2.0);
        driver.reset();
        assert_eq!(driver.plan(&controls).time, 1.0);
    }

    #[test]
    fn unchanged_tessellation_never_rebuilds() {
        let controls = ControlState::default();
        let mut driver = FrameDriver::new(&controls);
        for _ in 0..10 {
            assert_eq!(driver.plan(&controls).rebuild, None);
        }
    }

    #[test]
    fn tessellation_change_rebuilds_exactly_once() {
        let mut controls = ControlState::default();
        let mut driver = FrameDriver::new(&controls);

        controls.tessellations = 3;
        assert_eq!(driver.plan(&controls).rebuild, Some(3));
        assert_eq!(driver.plan(&controls).rebuild, None);

        let rebuilt = icosphere(Vec3::ZERO, 1.0, 3).expect("valid level");
        assert_eq!(rebuilt.triangle_count(), 1280);
    }

    #[test]
    fn reset_does_not_force_a_rebuild() {
        let controls = ControlState::default();
        let mut driver = FrameDriver::new(&controls);
        driver.plan(&controls);
        driver.reset();
        assert_eq!(driver.plan(&controls).rebuild, None);
    }

    #[test]
    fn derives_shader_colors_from_byte_triples() {
        let controls = ControlState::default();
        let mut driver = FrameDriver::new(&controls);
        let plan = driver.plan(&controls);

        let inner = plan.inner_color;
        assert!((inner.r - 225.0 / 255.0).abs() < 1e-6);
        assert!((inner.g - 150.0 / 255.0).abs() < 1e-6);
        assert!((inner.b - 85.0 / 255.0).abs() < 1e-6);
        assert_eq!(inner.a, 1.0);

        let clear = plan.clear_color;
        assert!((clear.r - 9.0 / 255.0).abs() < 1e-6);
        assert!((clear.g - 27.0 / 255.0).abs() < 1e-6);
        assert!((clear.b - 27.0 / 255.0).abs() < 1e-6);
        assert_eq!(clear.a, 1.0);
    }

    #[test]
    fn base_color_is_its_own_control() {
        let mut controls = ControlState::default();
        controls.inner_color = [0.0, 255.0, 0.0];
        let mut driver = FrameDriver::new(&controls);
        let plan = driver.plan(&controls);

        // Default base color is pure red, unaffected by the fire palette.
        assert_eq!(plan.base_color.to_array(), [1.0, 0.0, 0.0, 1.0]);
        assert!((plan.inner_color.g - 1.0).abs() < 1e-6);
    }

    #[test]
    fn default_scene_draws_level_five_sphere() {
        let controls = ControlState::default();
        let mesh = icosphere(Vec3::ZERO, 1.0, controls.tessellations).expect("valid level");
        assert_eq!(mesh.triangle_count(), 20480);
    }
}
