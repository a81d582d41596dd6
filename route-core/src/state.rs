use serde::{Deserialize, Serialize};

use crate::angle::Angle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Length of the XZ projection.
    pub fn planar_length(&self) -> f32 {
        (self.x as f64).hypot(self.z as f64) as f32
    }
}

/// Physical state of the character at one frame.
///
/// Immutable once built: children come from [`crate::physics::step`], roots
/// from [`SimState::root`] or [`SimState::root_with_h_speed`]. Lineage is not
/// stored here; the search arena tracks parents by handle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    position: Vec3,
    velocity: Vec3,
    h_speed: f32,
    facing: Angle,
    camera: Angle,
    index: u32,
}

/// Hashable identity over every physical attribute of a [`SimState`].
///
/// Floats compare by bit pattern; -0.0 is folded onto +0.0 first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PhysicalKey {
    position: [u32; 3],
    velocity: [u32; 3],
    h_speed: u32,
    facing: u16,
    camera: u16,
    index: u32,
}

#[inline]
fn float_key(value: f32) -> u32 {
    (value + 0.0).to_bits()
}

impl SimState {
    /// Root state whose horizontal speed is the planar length of `velocity`.
    pub fn root(position: Vec3, velocity: Vec3, facing: Angle, camera: Angle) -> Self {
        Self::root_with_h_speed(position, velocity, velocity.planar_length(), facing, camera)
    }

    /// Root state with an explicit (possibly negative) horizontal speed, as
    /// read from a savestate where backwards air movement is possible.
    pub fn root_with_h_speed(
        position: Vec3,
        velocity: Vec3,
        h_speed: f32,
        facing: Angle,
        camera: Angle,
    ) -> Self {
        Self {
            position,
            velocity,
            h_speed,
            facing,
            camera,
            index: 0,
        }
    }

    pub(crate) fn successor(&self, position: Vec3, velocity: Vec3, h_speed: f32) -> Self {
        Self {
            position,
            velocity,
            h_speed,
            facing: self.facing,
            camera: self.camera,
            index: self.index + 1,
        }
    }

    /// Copy of this state with the camera yaw replaced.
    pub fn with_camera(&self, camera: Angle) -> Self {
        Self { camera, ..*self }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[inline]
    pub fn h_speed(&self) -> f32 {
        self.h_speed
    }

    #[inline]
    pub fn facing(&self) -> Angle {
        self.facing
    }

    #[inline]
    pub fn camera(&self) -> Angle {
        self.camera
    }

    /// Frames applied since the root.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.h_speed.is_finite()
    }

    /// XZ distance to a point, computed in f64 and narrowed.
    pub fn planar_distance_to(&self, x: f32, z: f32) -> f32 {
        let dx = self.position.x as f64 - x as f64;
        let dz = self.position.z as f64 - z as f64;
        dx.hypot(dz) as f32
    }

    pub fn key(&self) -> PhysicalKey {
        PhysicalKey {
            position: [
                float_key(self.position.x),
                float_key(self.position.y),
                float_key(self.position.z),
            ],
            velocity: [
                float_key(self.velocity.x),
                float_key(self.velocity.y),
                float_key(self.velocity.z),
            ],
            h_speed: float_key(self.h_speed),
            facing: self.facing.units(),
            camera: self.camera.units(),
            index: self.index,
        }
    }
}
