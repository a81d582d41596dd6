use core::fmt;

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::constants::{STICK_DEAD_ZONE, STICK_DEAD_ZONE_OFFSET, STICK_MAX_RADIUS};
use crate::trig::atan2s;

/// Raw analog stick deflection for one frame. `z` is the vertical stick
/// axis (up is positive), which drives movement along the camera's forward
/// direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StickInput {
    pub x: i8,
    pub z: i8,
}

/// Stick after the engine removes the dead zone and clamps to the unit circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdjustedStick {
    pub x: f32,
    pub z: f32,
    pub magnitude: f32,
}

impl StickInput {
    pub const NEUTRAL: StickInput = StickInput { x: 0, z: 0 };

    #[inline]
    pub const fn new(x: i8, z: i8) -> Self {
        Self { x, z }
    }

    pub fn adjusted(self) -> AdjustedStick {
        let mut x = adjust_axis(self.x);
        let mut z = adjust_axis(self.z);
        let mut magnitude = (x * x + z * z).sqrt();
        if magnitude > STICK_MAX_RADIUS {
            x *= STICK_MAX_RADIUS / magnitude;
            z *= STICK_MAX_RADIUS / magnitude;
            magnitude = STICK_MAX_RADIUS;
        }
        AdjustedStick { x, z, magnitude }
    }

    /// Airborne intended magnitude in [0, 32]: quadratic in stick radius,
    /// halved while in the air.
    pub fn scaled_magnitude(self) -> f32 {
        let ratio = self.adjusted().magnitude / STICK_MAX_RADIUS;
        ratio * ratio * STICK_MAX_RADIUS / 2.0
    }

    /// World yaw the player is pushing toward, given the camera yaw.
    pub fn intended_yaw(self, camera: Angle) -> Angle {
        let stick = self.adjusted();
        atan2s(-stick.z, stick.x) + camera
    }
}

impl From<(i8, i8)> for StickInput {
    fn from((x, z): (i8, i8)) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for StickInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

#[inline]
fn adjust_axis(raw: i8) -> f32 {
    let raw = raw as i32;
    if raw <= -STICK_DEAD_ZONE {
        (raw + STICK_DEAD_ZONE_OFFSET) as f32
    } else if raw >= STICK_DEAD_ZONE {
        (raw - STICK_DEAD_ZONE_OFFSET) as f32
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_zone_reads_as_zero() {
        for raw in -7..=7i8 {
            let stick = StickInput::new(raw, raw).adjusted();
            assert_eq!(stick.magnitude, 0.0, "raw={raw}");
            assert_eq!(StickInput::new(raw, 0).scaled_magnitude(), 0.0);
        }
    }

    #[test]
    fn past_dead_zone_is_offset_by_six() {
        let stick = StickInput::new(8, -8).adjusted();
        assert_eq!(stick.x, 2.0);
        assert_eq!(stick.z, -2.0);
    }

    #[test]
    fn magnitude_clamps_to_radius_64() {
        let stick = StickInput::new(127, 127).adjusted();
        assert_eq!(stick.magnitude, 64.0);
        assert!((stick.x - stick.z).abs() < 1e-5);
        assert_eq!(StickInput::new(-128, 0).scaled_magnitude(), 32.0);
        assert_eq!(StickInput::new(0, 70).scaled_magnitude(), 32.0);
    }

    #[test]
    fn scaled_magnitude_is_quadratic() {
        // raw 38 -> adjusted 32 -> (32/64)^2 * 64 / 2 = 8
        assert_eq!(StickInput::new(38, 0).scaled_magnitude(), 8.0);
    }

    #[test]
    fn intended_yaw_follows_camera() {
        // Stick up is a half turn from the camera yaw.
        let up = StickInput::new(0, 100);
        let base = up.intended_yaw(Angle(0));
        assert_eq!(base, Angle(0x8000));
        assert_eq!(up.intended_yaw(Angle(0x1234)), base + Angle(0x1234));

        let right = StickInput::new(100, 0);
        assert_eq!(right.intended_yaw(Angle(0)), Angle(0x4000));
    }
}
