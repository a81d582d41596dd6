//! Engine constants for the airborne movement model.
//!
//! Values mirror the game's air-step routine; the search never changes them
//! except through `AirParams`.

// Stick processing
pub const STICK_DEAD_ZONE: i32 = 8; // raw |v| below this reads as zero
pub const STICK_DEAD_ZONE_OFFSET: i32 = 6; // subtracted from raw magnitude past the dead zone
pub const STICK_MAX_RADIUS: f32 = 64.0;
pub const INTENDED_MAG_MAX: f32 = 32.0; // airborne intended magnitude is halved

// Horizontal speed (units/frame)
pub const AIR_MAX_H_SPEED: f32 = 32.0;
pub const LONG_JUMP_MAX_H_SPEED: f32 = 48.0;
pub const AIR_MIN_H_SPEED: f32 = -16.0;
pub const AIR_OVERSPEED_DRAG: f32 = 1.0;
pub const AIR_UNDERSPEED_BOOST: f32 = 2.0;
pub const AIR_H_SPEED_APPROACH: f32 = 0.35;
pub const AIR_FORWARD_ACCEL: f32 = 1.5;
pub const AIR_LATERAL_ACCEL: f32 = 10.0;

// Vertical speed (units/frame)
pub const GRAVITY: f32 = 4.0;
pub const TERMINAL_Y_SPEED: f32 = -75.0;

// Position is integrated in quarter steps with a fixed velocity.
pub const AIR_SUBSTEPS: u32 = 4;
