//! Two triangles driven by four edge-triggered keys and one held key.
//!
//! | key     | trigger | effect                                   |
//! |---------|---------|------------------------------------------|
//! | `1`     | press   | toggle alpha blending                    |
//! | `2`     | press   | random colour for triangle 1             |
//! | `3`     | press   | bounce triangle 1 along X                |
//! | `4`     | press   | bounce triangle 2 along Z                |
//! | `Space` | held    | wireframe                                |

use std::fmt::{Display, Formatter};

use cgmath::Vector3;
use rand::Rng;

use gl_wrapper::Uniform;

use crate::bounce::BounceAxis;
use crate::color::random_color;
use crate::debounce::KeyEdge;
use crate::target::FrameTarget;

pub const CLEAR_COLOR: [f32; 3] = [0.2, 0.3, 0.3];

pub const SHAPE_A_ALPHA: f32 = 0.6;
pub const SHAPE_B_ALPHA: f32 = 0.4;

/// Level state of the monitored keys, sampled once per frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct ButtonKeys {
    pub toggle_blend: bool,
    pub randomize_color: bool,
    pub bounce_x: bool,
    pub bounce_z: bool,
    pub wireframe: bool,
}

#[derive(Debug, Default)]
pub struct KeyEdgeState {
    toggle_blend: KeyEdge,
    randomize_color: KeyEdge,
    bounce_x: KeyEdge,
    bounce_z: KeyEdge,
}

#[derive(Debug, Clone)]
pub struct AnimationState {
    pub blend_enabled: bool,
    pub wireframe: bool,
    pub shape_a_color: Vector3<f32>,
    pub shape_b_color: Vector3<f32>,
    pub shape_a_x: BounceAxis,
    /// "Forward" moves towards the viewer, i.e. towards negative Z.
    pub shape_b_z: BounceAxis,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            blend_enabled: true,
            wireframe: false,
            shape_a_color: Vector3::new(1.0, 0.5, 0.2),
            shape_b_color: Vector3::new(0.2, 0.5, 1.0),
            shape_a_x: BounceAxis::new(0.2, -1.0, 1.0),
            shape_b_z: BounceAxis::new(-0.2, -1.5, 1.5),
        }
    }
}

impl AnimationState {
    pub fn shape_a_alpha(&self) -> f32 {
        if self.blend_enabled {
            SHAPE_A_ALPHA
        } else {
            1.0
        }
    }

    pub fn shape_b_alpha(&self) -> f32 {
        if self.blend_enabled {
            SHAPE_B_ALPHA
        } else {
            1.0
        }
    }
}

/// A state change worth reporting to the operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonEvent {
    BlendToggled(bool),
    ColorChanged(Vector3<f32>),
    OffsetX(f32),
    OffsetZ(f32),
}

impl Display for ButtonEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonEvent::BlendToggled(true) => write!(f, "Transparency ON"),
            ButtonEvent::BlendToggled(false) => write!(f, "Transparency OFF"),
            ButtonEvent::ColorChanged(c) => write!(
                f,
                "Triangle 1 color changed to ({:.3}, {:.3}, {:.3})",
                c.x, c.y, c.z
            ),
            ButtonEvent::OffsetX(x) => write!(f, "Triangle 1 offset X = {x:.2}"),
            ButtonEvent::OffsetZ(z) => write!(f, "Triangle 2 offset Z = {z:.2}"),
        }
    }
}

/// Owns everything the update needs besides the animation state itself.
pub struct StateUpdater<R: Rng> {
    edges: KeyEdgeState,
    rng: R,
}

impl<R: Rng> StateUpdater<R> {
    pub fn new(rng: R) -> Self {
        Self {
            edges: KeyEdgeState::default(),
            rng,
        }
    }

    /// Applies one frame of sampled keys. Returns the changes in key order.
    pub fn update(&mut self, state: &mut AnimationState, keys: ButtonKeys) -> Vec<ButtonEvent> {
        let mut events = Vec::new();

        state.wireframe = keys.wireframe;

        if self.edges.toggle_blend.pressed(keys.toggle_blend) {
            state.blend_enabled = !state.blend_enabled;
            events.push(ButtonEvent::BlendToggled(state.blend_enabled));
        }

        if self.edges.randomize_color.pressed(keys.randomize_color) {
            state.shape_a_color = random_color(&mut self.rng);
            events.push(ButtonEvent::ColorChanged(state.shape_a_color));
        }

        if self.edges.bounce_x.pressed(keys.bounce_x) {
            events.push(ButtonEvent::OffsetX(state.shape_a_x.advance()));
        }

        if self.edges.bounce_z.pressed(keys.bounce_z) {
            events.push(ButtonEvent::OffsetZ(state.shape_b_z.advance()));
        }

        events
    }
}

pub struct TriangleShapes<G> {
    pub shape_a: G,
    pub shape_b: G,
}

pub fn render<T: FrameTarget>(
    state: &AnimationState,
    shapes: &TriangleShapes<T::Geometry>,
    target: &mut T,
) {
    target.clear(CLEAR_COLOR.into());
    target.set_blending(state.blend_enabled);
    target.set_wireframe(state.wireframe);

    let offset = Vector3::new(state.shape_a_x.offset(), 0.0, 0.0);
    target.set_uniform("offset", Uniform::Vec3(offset));
    target.set_uniform(
        "objectColor",
        Uniform::Vec4(state.shape_a_color.extend(state.shape_a_alpha())),
    );
    target.draw(&shapes.shape_a);

    let offset = Vector3::new(0.0, 0.0, state.shape_b_z.offset());
    target.set_uniform("offset", Uniform::Vec3(offset));
    target.set_uniform(
        "objectColor",
        Uniform::Vec4(state.shape_b_color.extend(state.shape_b_alpha())),
    );
    target.draw(&shapes.shape_b);
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn updater() -> StateUpdater<Xoshiro256StarStar> {
        StateUpdater::new(Xoshiro256StarStar::seed_from_u64(0))
    }

    fn tap(
        updater: &mut StateUpdater<Xoshiro256StarStar>,
        state: &mut AnimationState,
        keys: ButtonKeys,
    ) -> Vec<ButtonEvent> {
        let events = updater.update(state, keys);
        assert!(updater.update(state, ButtonKeys::default()).is_empty());
        events
    }

    #[test]
    fn toggle_parity() {
        let mut updater = updater();
        let mut state = AnimationState::default();
        let press = ButtonKeys {
            toggle_blend: true,
            ..Default::default()
        };

        for n in 1..=9 {
            tap(&mut updater, &mut state, press);
            assert_eq!(state.blend_enabled, n % 2 == 0);
        }
    }

    #[test]
    fn held_keys_act_once() {
        let mut updater = updater();
        let mut state = AnimationState::default();
        let keys = ButtonKeys {
            toggle_blend: true,
            bounce_x: true,
            bounce_z: true,
            ..Default::default()
        };

        let first = updater.update(&mut state, keys);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0], ButtonEvent::BlendToggled(false));

        for _ in 0..30 {
            assert!(updater.update(&mut state, keys).is_empty());
        }

        assert!(!state.blend_enabled);
        assert!((state.shape_a_x.offset() - 0.2).abs() < 1e-6);
        assert!((state.shape_b_z.offset() + 0.2).abs() < 1e-6);
    }

    #[test]
    fn wireframe_follows_key_level() {
        let mut updater = updater();
        let mut state = AnimationState::default();
        let held = ButtonKeys {
            wireframe: true,
            ..Default::default()
        };

        for _ in 0..3 {
            assert!(updater.update(&mut state, held).is_empty());
            assert!(state.wireframe);
        }

        updater.update(&mut state, ButtonKeys::default());
        assert!(!state.wireframe);
    }

    #[test]
    fn color_change_only_touches_shape_a() {
        let mut updater = updater();
        let mut state = AnimationState::default();
        let press = ButtonKeys {
            randomize_color: true,
            ..Default::default()
        };

        let events = tap(&mut updater, &mut state, press);

        assert_eq!(events, vec![ButtonEvent::ColorChanged(state.shape_a_color)]);
        assert_eq!(state.shape_b_color, Vector3::new(0.2, 0.5, 1.0));
        for channel in [state.shape_a_color.x, state.shape_a_color.y, state.shape_a_color.z] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[test]
    fn event_log_lines() {
        assert_eq!(ButtonEvent::BlendToggled(true).to_string(), "Transparency ON");
        assert_eq!(ButtonEvent::BlendToggled(false).to_string(), "Transparency OFF");
        assert_eq!(
            ButtonEvent::OffsetX(1.2000000476).to_string(),
            "Triangle 1 offset X = 1.20"
        );
        assert_eq!(
            ButtonEvent::OffsetZ(-0.2).to_string(),
            "Triangle 2 offset Z = -0.20"
        );
        assert_eq!(
            ButtonEvent::ColorChanged(Vector3::new(1.0, 0.5, 0.25)).to_string(),
            "Triangle 1 color changed to (1.000, 0.500, 0.250)"
        );
    }
}
