//! Deterministic airborne movement model for TAS route searching.
//!
//! Everything here is a pure function of its inputs: table-driven trig over a
//! 16-bit angle domain, raw stick processing, and the single-frame air step
//! that the search crate expands frame by frame.

pub mod angle;
pub mod constants;
pub mod input_space;
pub mod physics;
pub mod state;
pub mod stick;
pub mod trig;

pub use angle::Angle;
pub use input_space::{input_space, DeadZone, InputRange};
pub use physics::{coast_h_speed, project_coast, step, AirParams};
pub use state::{PhysicalKey, SimState, Vec3};
pub use stick::StickInput;
