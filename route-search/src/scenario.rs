//! Serializable search problem: root state, input window and rules.
//!
//! A [`Scenario`] is the unit the CLI loads from the catalog or from a JSON
//! file. It implements [`SearchPolicy`] directly, so running one is just
//! [`crate::engine::search`] with the scenario as the policy.

use serde::{Deserialize, Serialize};
use tas_route_core::{AirParams, Angle, DeadZone, InputRange, SimState, Vec3};

use crate::engine::{search, SearchOptions, SearchReport};
use crate::error::{ConfigIssue, SearchError};
use crate::policy::{
    validate_rules, Acceptance, Evaluation, Goal, Improvement, Prune, SearchPolicy,
};
use crate::progress::ProgressSink;
use crate::stats::HistogramSpec;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RootSpec {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Signed horizontal speed from the savestate. Derived from the planar
    /// velocity when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_speed: Option<f32>,
    pub facing: Angle,
    pub camera: Angle,
}

impl RootSpec {
    pub fn state(&self) -> SimState {
        match self.h_speed {
            Some(h_speed) => SimState::root_with_h_speed(
                self.position,
                self.velocity,
                h_speed,
                self.facing,
                self.camera,
            ),
            None => SimState::root(self.position, self.velocity, self.facing, self.camera),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub root: RootSpec,
    pub inputs: InputRange,
    #[serde(default)]
    pub dead_zone: DeadZone,
    pub max_depth: u32,
    pub goal: Goal,
    pub evaluation: Evaluation,
    #[serde(default)]
    pub improvement: Improvement,
    #[serde(default)]
    pub acceptance: Acceptance,
    #[serde(default)]
    pub prune: Prune,
    /// Camera yaw per frame index; entry 0 is the root's. Frames past the
    /// end keep their parent's camera.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub camera_by_index: Vec<Angle>,
    #[serde(default)]
    pub air: AirParams,
    #[serde(default)]
    pub histogram: HistogramSpec,
}

impl Scenario {
    pub fn root_state(&self) -> SimState {
        self.root.state()
    }

    /// Same problem searched to a different depth. An `AtDepth` rule that
    /// pointed at the old bound follows it.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        if let Evaluation::AtDepth { depth } = self.evaluation {
            if depth == self.max_depth {
                self.evaluation = Evaluation::AtDepth { depth: max_depth };
            }
        }
        self.max_depth = max_depth;
        self
    }

    /// Same problem with the input window re-centred at its current centre
    /// and `radius` wide. An axis pinned to a single value stays pinned.
    pub fn with_radius(mut self, radius: u8) -> Self {
        let pinned = |min: i8, max: i8| if min == max { 0 } else { radius };
        let x_radius = pinned(self.inputs.x_min, self.inputs.x_max);
        let z_radius = pinned(self.inputs.z_min, self.inputs.z_max);
        self.inputs = InputRange::around(self.inputs.center(), x_radius, z_radius);
        self
    }

    pub fn run(
        &self,
        options: &SearchOptions,
        sink: &mut dyn ProgressSink,
    ) -> Result<SearchReport, SearchError> {
        search(self.root_state(), self, options, sink)
    }
}

impl SearchPolicy for Scenario {
    fn air_params(&self) -> &AirParams {
        &self.air
    }

    fn input_range(&self) -> InputRange {
        self.inputs
    }

    fn dead_zone(&self) -> DeadZone {
        self.dead_zone
    }

    fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    fn distance(&self, state: &SimState) -> f32 {
        self.goal.distance(state)
    }

    fn improves(&self, candidate: f32, best: f32) -> bool {
        self.improvement.improves(candidate, best)
    }

    fn accepts(&self, state: &SimState, distance: f32) -> bool {
        self.acceptance.accepts(state, distance)
    }

    fn prune(&self, state: &SimState) -> bool {
        let horizon = self.max_depth.saturating_sub(state.index());
        self.prune.rejects(state, &self.goal, &self.air, horizon)
    }

    fn camera_override(&self, index: u32) -> Option<Angle> {
        self.camera_by_index.get(index as usize).copied()
    }

    fn histogram(&self) -> HistogramSpec {
        self.histogram
    }

    fn validate(&self) -> Result<(), ConfigIssue> {
        if !self.goal.is_finite() {
            return Err(ConfigIssue::NonFiniteGoal);
        }
        if let Evaluation::VerticalSpeed { y_speed } = self.evaluation {
            if !y_speed.is_finite() {
                return Err(ConfigIssue::InvalidRule("vertical speed target must be finite"));
            }
        }
        validate_rules(&self.improvement, &self.prune, &self.air)
    }
}
