/// Mutable parameter bag read once per frame by the frame driver.
///
/// Color triples use the `0`–`255` channel range of the host color pickers;
/// normalization to shader vec4s happens in the driver. Values are not
/// clamped anywhere — out-of-range inputs pass through to the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    /// Icosphere subdivision level.
    pub tessellations: u32,

    pub fire_freq: f32,
    pub speed: f32,
    pub detail: f32,
    pub voronoi_scale: f32,

    /// Base geometry color, independent of the fire palette.
    pub color: [f32; 3],

    pub inner_color: [f32; 3],
    pub outer_color: [f32; 3],
    pub background_color: [f32; 3],
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            tessellations: 5,
            fire_freq: 0.8,
            speed: 1.0,
            detail: 1.0,
            voronoi_scale: 1.0,
            color: [255.0, 0.0, 0.0],
            inner_color: [225.0, 150.0, 85.0],
            outer_color: [22.0, 36.0, 45.0],
            background_color: [9.0, 27.0, 27.0],
        }
    }
}

/// Zero-argument panel actions.
///
/// Buttons dispatch an action; [`ControlState::apply`] is a pure function
/// from one state to the next, so actions are trivially testable and there is
/// no shared-callback mutation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ControlAction {
    /// Restore all numeric parameters and the Evening palette.
    Reset,
    /// Blue/teal palette.
    GhostFire,
    /// Warm pink palette.
    CherryFire,
    /// Default warm palette.
    EveningFire,
}

impl ControlState {
    /// Returns the state after `action`. Palette actions touch only the
    /// fire color triples; `Reset` also restores the numeric parameters and
    /// the base color.
    #[must_use]
    pub fn apply(self, action: ControlAction) -> ControlState {
        match action {
            ControlAction::Reset => {
                let defaults = ControlState::default();
                ControlState {
                    tessellations: defaults.tessellations,
                    fire_freq: defaults.fire_freq,
                    speed: defaults.speed,
                    detail: defaults.detail,
                    voronoi_scale: defaults.voronoi_scale,
                    color: defaults.color,
                    ..self
                }
                .apply(ControlAction::EveningFire)
            }
            ControlAction::GhostFire => ControlState {
                inner_color: [30.0, 115.0, 180.0],
                outer_color: [155.0, 255.0, 240.0],
                background_color: [4.0, 27.0, 36.0],
                ..self
            },
            ControlAction::CherryFire => ControlState {
                inner_color: [255.0, 95.0, 95.0],
                outer_color: [240.0, 160.0, 123.0],
                background_color: [250.0, 160.0, 160.0],
                ..self
            },
            ControlAction::EveningFire => ControlState {
                inner_color: [225.0, 150.0, 85.0],
                outer_color: [22.0, 36.0, 45.0],
                background_color: [9.0, 27.0, 27.0],
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let c = ControlState::default();
        assert_eq!(c.tessellations, 5);
        assert_eq!(c.fire_freq, 0.8);
        assert_eq!(c.speed, 1.0);
        assert_eq!(c.detail, 1.0);
        assert_eq!(c.voronoi_scale, 1.0);
        assert_eq!(c.color, [255.0, 0.0, 0.0]);
        assert_eq!(c.inner_color, [225.0, 150.0, 85.0]);
        assert_eq!(c.outer_color, [22.0, 36.0, 45.0]);
        assert_eq!(c.background_color, [9.0, 27.0, 27.0]);
    }

    #[test]
    fn palettes_touch_colors_only() {
        let mut base = ControlState::default();
        base.tessellations = 3;
        base.speed = 4.2;

        let ghost = base.clone().apply(ControlAction::GhostFire);
        assert_eq!(ghost.inner_color, [30.0, 115.0, 180.0]);
        assert_eq!(ghost.outer_color, [155.0, 255.0, 240.0]);
        assert_eq!(ghost.background_color, [4.0, 27.0, 36.0]);
        assert_eq!(ghost.tessellations, 3);
        assert_eq!(ghost.speed, 4.2);
        assert_eq!(ghost.color, [255.0, 0.0, 0.0]);

        let cherry = base.clone().apply(ControlAction::CherryFire);
        assert_eq!(cherry.inner_color, [255.0, 95.0, 95.0]);
        assert_eq!(cherry.background_color, [250.0, 160.0, 160.0]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut c = ControlState::default();
        c.tessellations = 2;
        c.fire_freq = 1.9;
        c = c.apply(ControlAction::GhostFire);

        assert_eq!(c.apply(ControlAction::Reset), ControlState::default());
    }

    #[test]
    fn evening_matches_defaults() {
        let defaults = ControlState::default();
        let evening = defaults.clone().apply(ControlAction::EveningFire);
        assert_eq!(evening, defaults);
    }
}
