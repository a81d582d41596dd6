//! Single-frame airborne movement.
//!
//! Order within a frame: horizontal speed from the stick, four quarter-steps
//! of position with the new horizontal and old vertical velocity, then
//! gravity. Facing and camera never change here.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::constants::{
    AIR_FORWARD_ACCEL, AIR_H_SPEED_APPROACH, AIR_LATERAL_ACCEL, AIR_MAX_H_SPEED, AIR_MIN_H_SPEED,
    AIR_OVERSPEED_DRAG, AIR_SUBSTEPS, AIR_UNDERSPEED_BOOST, GRAVITY, INTENDED_MAG_MAX,
    LONG_JUMP_MAX_H_SPEED, TERMINAL_Y_SPEED,
};
use crate::state::{SimState, Vec3};
use crate::stick::StickInput;

/// Tunables of the air step. `STANDARD` reproduces a normal jump and
/// `LONG_JUMP` only raises the speed cap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirParams {
    pub max_h_speed: f32,
    pub min_h_speed: f32,
    pub overspeed_drag: f32,
    pub underspeed_boost: f32,
    pub approach_increase: f32,
    pub approach_decrease: f32,
    pub forward_accel: f32,
    pub lateral_accel: f32,
    pub gravity: f32,
    pub terminal_y_speed: f32,
}

impl AirParams {
    pub const STANDARD: AirParams = AirParams {
        max_h_speed: AIR_MAX_H_SPEED,
        min_h_speed: AIR_MIN_H_SPEED,
        overspeed_drag: AIR_OVERSPEED_DRAG,
        underspeed_boost: AIR_UNDERSPEED_BOOST,
        approach_increase: AIR_H_SPEED_APPROACH,
        approach_decrease: AIR_H_SPEED_APPROACH,
        forward_accel: AIR_FORWARD_ACCEL,
        lateral_accel: AIR_LATERAL_ACCEL,
        gravity: GRAVITY,
        terminal_y_speed: TERMINAL_Y_SPEED,
    };

    pub const LONG_JUMP: AirParams = AirParams {
        max_h_speed: LONG_JUMP_MAX_H_SPEED,
        ..Self::STANDARD
    };
}

impl Default for AirParams {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Advance `state` by one frame under `input`.
pub fn step(state: &SimState, input: StickInput, params: &AirParams) -> SimState {
    let (h_speed, x_speed, z_speed) = air_h_speed(state, input, params);
    let velocity = Vec3::new(x_speed, state.velocity().y, z_speed);
    let position = air_move(state.position(), velocity);
    let y_speed = (velocity.y - params.gravity).max(params.terminal_y_speed);

    state.successor(position, Vec3::new(x_speed, y_speed, z_speed), h_speed)
}

fn air_h_speed(state: &SimState, input: StickInput, params: &AirParams) -> (f32, f32, f32) {
    let facing = state.facing();
    let intended_yaw = input.intended_yaw(state.camera());
    let delta = intended_yaw - facing;
    let intended_mag = input.scaled_magnitude();

    let mut perp_speed = 0.0f32;
    let mut h_speed = approach(
        state.h_speed(),
        0.0,
        params.approach_increase,
        params.approach_decrease,
    );
    if intended_mag > 0.0 {
        h_speed += (intended_mag / INTENDED_MAG_MAX) * params.forward_accel * delta.cos();
        perp_speed = delta.sin() * (intended_mag / INTENDED_MAG_MAX) * params.lateral_accel;
    }
    let h_speed = relax_h_speed(h_speed, params);

    let side = facing + Angle::QUARTER_TURN;
    let mut x_speed = facing.sin() * h_speed;
    let mut z_speed = facing.cos() * h_speed;
    x_speed += perp_speed * side.sin();
    z_speed += perp_speed * side.cos();

    (h_speed, x_speed, z_speed)
}

fn air_move(position: Vec3, velocity: Vec3) -> Vec3 {
    let mut next = position;
    let divisor = AIR_SUBSTEPS as f32;
    for _ in 0..AIR_SUBSTEPS {
        next.x += velocity.x / divisor;
        next.y += velocity.y / divisor;
        next.z += velocity.z / divisor;
    }
    next
}

#[inline]
fn approach(current: f32, target: f32, increase: f32, decrease: f32) -> f32 {
    if current < target {
        (current + increase).min(target)
    } else {
        (current - decrease).max(target)
    }
}

/// One-step relaxation toward the speed bounds; never a hard clamp.
#[inline]
fn relax_h_speed(mut h_speed: f32, params: &AirParams) -> f32 {
    if h_speed > params.max_h_speed {
        h_speed -= params.overspeed_drag;
    }
    if h_speed < params.min_h_speed {
        h_speed += params.underspeed_boost;
    }
    h_speed
}

/// Horizontal speed after one frame with a neutral stick.
pub fn coast_h_speed(h_speed: f32, params: &AirParams) -> f32 {
    let decayed = approach(
        h_speed,
        0.0,
        params.approach_increase,
        params.approach_decrease,
    );
    relax_h_speed(decayed, params)
}

/// Coordinate along one axis after coasting `frames` frames, treating `speed`
/// as the horizontal speed along that axis.
pub fn project_coast(position: f32, speed: f32, frames: u32, params: &AirParams) -> f32 {
    let mut position = position;
    let mut speed = speed;
    for _ in 0..frames {
        speed = coast_h_speed(speed, params);
        position += speed;
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_root() -> SimState {
        SimState::root_with_h_speed(
            Vec3::new(435.9137, 4474.0, -1854.505),
            Vec3::new(-16.170256, -75.0, -17.676327),
            23.899746,
            Angle(39780),
            Angle(16384),
        )
    }

    #[test]
    fn neutral_stick_only_decays_speed() {
        let root = bits_root();
        let next = step(&root, StickInput::NEUTRAL, &AirParams::STANDARD);
        assert_eq!(next.h_speed(), 23.899746 - 0.35);
        assert_eq!(next.facing(), root.facing());
        assert_eq!(next.camera(), root.camera());
        assert_eq!(next.index(), 1);

        let expected_x = root.facing().sin() * next.h_speed();
        let expected_z = root.facing().cos() * next.h_speed();
        assert_eq!(next.velocity().x, expected_x);
        assert_eq!(next.velocity().z, expected_z);
    }

    #[test]
    fn position_uses_four_quarter_steps() {
        let root = bits_root();
        let next = step(&root, StickInput::NEUTRAL, &AirParams::STANDARD);
        let mut x = root.position().x;
        let mut y = root.position().y;
        for _ in 0..4 {
            x += next.velocity().x / 4.0;
            y += root.velocity().y / 4.0;
        }
        assert_eq!(next.position().x, x);
        assert_eq!(next.position().y, y);
    }

    #[test]
    fn vertical_speed_floors_at_terminal() {
        let root = bits_root();
        let next = step(&root, StickInput::new(-56, -31), &AirParams::STANDARD);
        assert_eq!(next.velocity().y, -75.0);

        let rising = SimState::root(Vec3::default(), Vec3::new(0.0, 10.0, 0.0), Angle(0), Angle(0));
        let next = step(&rising, StickInput::NEUTRAL, &AirParams::STANDARD);
        assert_eq!(next.velocity().y, 6.0);
        assert_eq!(next.position().y, 10.0);
    }

    #[test]
    fn pushing_against_facing_slows_down() {
        let root = bits_root();
        let back = step(&root, StickInput::new(-56, -31), &AirParams::STANDARD);
        assert!(back.h_speed() < root.h_speed() - 0.35, "h={}", back.h_speed());
    }

    #[test]
    fn overspeed_relaxes_by_one_per_frame() {
        let fast = SimState::root_with_h_speed(
            Vec3::default(),
            Vec3::new(0.0, 0.0, 40.0),
            40.0,
            Angle(0),
            Angle(0),
        );
        let next = step(&fast, StickInput::NEUTRAL, &AirParams::STANDARD);
        assert_eq!(next.h_speed(), 40.0 - 0.35 - 1.0);

        let long = step(&fast, StickInput::NEUTRAL, &AirParams::LONG_JUMP);
        assert_eq!(long.h_speed(), 40.0 - 0.35);
    }

    #[test]
    fn underspeed_relaxes_by_two_per_frame() {
        let backwards = SimState::root_with_h_speed(
            Vec3::default(),
            Vec3::new(0.0, 0.0, -20.0),
            -20.0,
            Angle(0),
            Angle(0),
        );
        let next = step(&backwards, StickInput::NEUTRAL, &AirParams::STANDARD);
        assert_eq!(next.h_speed(), -20.0 + 0.35 + 2.0);
    }

    #[test]
    fn coast_matches_neutral_step() {
        let root = bits_root();
        let next = step(&root, StickInput::NEUTRAL, &AirParams::STANDARD);
        assert_eq!(coast_h_speed(root.h_speed(), &AirParams::STANDARD), next.h_speed());
    }

    #[test]
    fn project_coast_accumulates_decaying_speed() {
        let params = AirParams::STANDARD;
        let projected = project_coast(0.0, 10.0, 3, &params);
        let expected = (10.0f32 - 0.35) + (10.0 - 0.35 - 0.35) + (10.0 - 0.35 - 0.35 - 0.35);
        assert!((projected - expected).abs() < 1e-4);
        assert_eq!(project_coast(5.0, 10.0, 0, &params), 5.0);
    }

    #[test]
    fn approach_stops_at_target() {
        assert_eq!(approach(0.2, 0.0, 0.35, 0.35), 0.0);
        assert_eq!(approach(-0.2, 0.0, 0.35, 0.35), 0.0);
        assert_eq!(approach(1.0, 0.0, 0.35, 0.35), 0.65);
    }

    #[test]
    fn air_params_fill_missing_fields_from_standard() {
        let params: AirParams = serde_json::from_str(r#"{"max_h_speed": 48.0}"#).expect("decode");
        assert_eq!(params, AirParams::LONG_JUMP);
    }
}
