use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tas_route_core::{Angle, SimState, StickInput, Vec3};

use crate::catalog::scenario_fingerprint;
use crate::engine::SearchReport;
use crate::scenario::Scenario;
use crate::stats::SearchStats;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteFrame {
    pub index: u32,
    /// Input that produced this frame; `None` for the root.
    pub input: Option<StickInput>,
    pub position: Vec3,
    pub velocity: Vec3,
    pub h_speed: f32,
    pub camera: Angle,
}

impl RouteFrame {
    fn new(state: &SimState, input: Option<StickInput>) -> Self {
        Self {
            index: state.index(),
            input,
            position: state.position(),
            velocity: state.velocity(),
            h_speed: state.h_speed(),
            camera: state.camera(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    pub generated_unix_s: u64,
    pub scenario_id: String,
    pub scenario_fingerprint: String,
    pub distance: f32,
    pub solved: bool,
    pub inputs: Vec<StickInput>,
    pub frames: Vec<RouteFrame>,
    pub stats: SearchStats,
}

impl RouteReport {
    pub fn new(scenario: &Scenario, report: &SearchReport) -> Result<Self> {
        let route = &report.route;
        let frames = route
            .trajectory
            .iter()
            .enumerate()
            .map(|(idx, state)| {
                let input = idx
                    .checked_sub(1)
                    .and_then(|prev| route.inputs.get(prev).copied());
                RouteFrame::new(state, input)
            })
            .collect();

        Ok(Self {
            generated_unix_s: now_unix_s(),
            scenario_id: scenario.id.clone(),
            scenario_fingerprint: scenario_fingerprint(scenario)
                .context("failed fingerprinting scenario")?,
            distance: route.distance,
            solved: route.solved,
            inputs: route.inputs.clone(),
            frames,
            stats: report.stats.clone(),
        })
    }
}

/// TAS route text: one `frame: (x, z)` line per input, frames counted from 1.
pub fn format_route(inputs: &[StickInput]) -> String {
    let mut out = String::new();
    for (idx, input) in inputs.iter().enumerate() {
        out.push_str(&format!("{}: {input}\n", idx + 1));
    }
    out
}

/// One line per state, root first, for `simulate`.
pub fn format_states(states: &[SimState]) -> String {
    let mut out = String::new();
    for state in states {
        let p = state.position();
        let v = state.velocity();
        out.push_str(&format!(
            "index={} pos=({}, {}, {}) vel=({}, {}, {}) h_speed={} camera={}\n",
            state.index(),
            p.x,
            p.y,
            p.z,
            v.x,
            v.y,
            v.z,
            state.h_speed(),
            state.camera()
        ));
    }
    out
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating {}", parent.display()))?;
    }
    let encoded = serde_json::to_vec_pretty(value)?;
    fs::write(path, encoded).with_context(|| format!("failed writing {}", path.display()))
}

fn now_unix_s() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_text_numbers_frames_from_one() {
        let text = format_route(&[StickInput::new(-56, -31), StickInput::new(0, 8)]);
        assert_eq!(text, "1: (-56, -31)\n2: (0, 8)\n");
    }

    #[test]
    fn empty_route_formats_to_nothing() {
        assert_eq!(format_route(&[]), "");
    }
}
