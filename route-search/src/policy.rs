//! Pluggable rules the engine consults for every child state.

use serde::{Deserialize, Serialize};
use tas_route_core::{project_coast, AirParams, Angle, DeadZone, InputRange, SimState};

use crate::error::ConfigIssue;
use crate::stats::HistogramSpec;

/// Everything the engine needs to know about one search problem.
pub trait SearchPolicy: Sync {
    fn air_params(&self) -> &AirParams;
    fn input_range(&self) -> InputRange;
    fn dead_zone(&self) -> DeadZone {
        DeadZone::STANDARD
    }
    fn max_depth(&self) -> u32;
    fn evaluation(&self) -> Evaluation;
    /// Distance of a state to the goal; smaller is better.
    fn distance(&self, state: &SimState) -> f32;
    /// Whether `candidate` should replace the current best distance.
    fn improves(&self, candidate: f32, best: f32) -> bool {
        candidate < best
    }
    /// Whether `state` is good enough to end the search immediately.
    fn accepts(&self, _state: &SimState, _distance: f32) -> bool {
        false
    }
    /// `true` discards the state before it is evaluated or enqueued.
    fn prune(&self, _state: &SimState) -> bool {
        false
    }
    /// Camera yaw forced onto every child with this frame index.
    fn camera_override(&self, _index: u32) -> Option<Angle> {
        None
    }
    fn histogram(&self) -> HistogramSpec {
        HistogramSpec::default()
    }
    /// Policy-specific checks beyond the engine's own.
    fn validate(&self) -> Result<(), ConfigIssue> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    pub fn position(self, state: &SimState) -> f32 {
        match self {
            Self::X => state.position().x,
            Self::Z => state.position().z,
        }
    }

    pub fn speed(self, state: &SimState) -> f32 {
        match self {
            Self::X => state.velocity().x,
            Self::Z => state.velocity().z,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoalMetric {
    /// Euclidean distance in the XZ plane.
    #[default]
    Planar,
    /// Absolute difference on one horizontal axis.
    Axis { axis: Axis },
}

/// Target point on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub x: f32,
    pub z: f32,
    #[serde(default)]
    pub metric: GoalMetric,
}

impl Goal {
    pub fn distance(&self, state: &SimState) -> f32 {
        match self.metric {
            GoalMetric::Planar => state.planar_distance_to(self.x, self.z),
            GoalMetric::Axis { axis } => (axis.position(state) - self.coordinate(axis)).abs(),
        }
    }

    pub fn coordinate(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Z => self.z,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.z.is_finite()
    }
}

/// Which children get compared against the goal, and which stop there.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evaluation {
    /// Evaluate and stop at exactly this frame index.
    AtDepth { depth: u32 },
    /// Evaluate and stop once vertical speed reaches this value.
    VerticalSpeed { y_speed: f32 },
    /// Evaluate every surviving child and keep expanding it.
    EveryState,
}

impl Evaluation {
    pub fn evaluates(&self, state: &SimState) -> bool {
        match *self {
            Self::AtDepth { depth } => state.index() == depth,
            Self::VerticalSpeed { y_speed } => state.velocity().y == y_speed,
            Self::EveryState => true,
        }
    }

    pub fn is_terminal(&self, state: &SimState) -> bool {
        match self {
            Self::EveryState => false,
            _ => self.evaluates(state),
        }
    }
}

/// When a freshly evaluated distance replaces the best so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Improvement {
    #[default]
    Strict,
    /// Must beat `best / factor`, or land exactly on the goal.
    Ratio { factor: f32 },
    /// Above `above`, must beat `best * factor`; below it any strict gain.
    Coarse { above: f32, factor: f32 },
}

impl Improvement {
    pub fn improves(&self, candidate: f32, best: f32) -> bool {
        match *self {
            Self::Strict => candidate < best,
            Self::Ratio { factor } => candidate <= best / factor || candidate == 0.0,
            Self::Coarse { above, factor } => {
                if candidate > above {
                    candidate < best * factor
                } else {
                    candidate < best
                }
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigIssue> {
        match *self {
            Self::Strict => Ok(()),
            Self::Ratio { factor } if factor.is_finite() && factor >= 1.0 => Ok(()),
            Self::Ratio { .. } => Err(ConfigIssue::InvalidRule("ratio factor must be >= 1")),
            Self::Coarse { above, factor }
                if above.is_finite() && factor.is_finite() && factor > 0.0 && factor <= 1.0 =>
            {
                Ok(())
            }
            Self::Coarse { .. } => Err(ConfigIssue::InvalidRule(
                "coarse factor must be in (0, 1] with a finite threshold",
            )),
        }
    }
}

/// When an evaluated state ends the search early.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Acceptance {
    #[default]
    Never,
    /// Exactly on the goal while nearly at rest horizontally.
    ExactStop { max_abs_h_speed: f32 },
}

impl Acceptance {
    pub fn accepts(&self, state: &SimState, distance: f32) -> bool {
        match *self {
            Self::Never => false,
            Self::ExactStop { max_abs_h_speed } => {
                distance == 0.0 && state.h_speed().abs() < max_abs_h_speed
            }
        }
    }
}

/// Cheap reachability test applied before a child is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Prune {
    #[default]
    None,
    /// Discard when the goal distance exceeds `numerator / index²`.
    ShrinkingRadius { numerator: f32 },
    /// Coast the remaining frames along `axis` (until vertical speed reaches
    /// `target_y_speed`) and discard when the projection misses the goal by
    /// more than `base * growth^frames_left`.
    ProjectedAxis {
        axis: Axis,
        target_y_speed: f32,
        base: f32,
        growth: f32,
    },
}

impl Prune {
    /// `horizon` is the number of frames left before the depth bound; the
    /// coast projection never runs past it.
    pub fn rejects(
        &self,
        state: &SimState,
        goal: &Goal,
        params: &AirParams,
        horizon: u32,
    ) -> bool {
        match *self {
            Self::None => false,
            Self::ShrinkingRadius { numerator } => {
                let index = state.index() as f32;
                goal.distance(state) > numerator / (index * index)
            }
            Self::ProjectedAxis {
                axis,
                target_y_speed,
                base,
                growth,
            } => {
                let horizon = i32::try_from(horizon).unwrap_or(i32::MAX);
                let frames_left =
                    frames_until_y_speed(state, target_y_speed, params).min(horizon);
                let projected = project_coast(
                    axis.position(state),
                    axis.speed(state),
                    frames_left.max(0) as u32,
                    params,
                );
                let tolerance = base * growth.powi(frames_left);
                (projected - goal.coordinate(axis)).abs() > tolerance
            }
        }
    }

    fn validate(&self, params: &AirParams) -> Result<(), ConfigIssue> {
        match *self {
            Self::None => Ok(()),
            Self::ShrinkingRadius { numerator } if numerator.is_finite() && numerator > 0.0 => {
                Ok(())
            }
            Self::ShrinkingRadius { .. } => Err(ConfigIssue::InvalidRule(
                "shrinking radius numerator must be positive",
            )),
            Self::ProjectedAxis {
                target_y_speed,
                base,
                growth,
                ..
            } if target_y_speed.is_finite()
                && target_y_speed >= params.terminal_y_speed
                && base.is_finite()
                && base > 0.0
                && growth.is_finite()
                && growth >= 1.0 =>
            {
                Ok(())
            }
            Self::ProjectedAxis { .. } => Err(ConfigIssue::InvalidRule(
                "projected axis needs a reachable target y speed, a positive base and growth >= 1",
            )),
        }
    }
}

/// Whole frames of gravity left before vertical speed reaches `target`;
/// negative once it is already below.
fn frames_until_y_speed(state: &SimState, target: f32, params: &AirParams) -> i32 {
    let gravity = (params.gravity as i64).max(1);
    let frames = (state.velocity().y as i64 - target as i64) / gravity;
    frames.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

pub(crate) fn validate_rules(
    improvement: &Improvement,
    prune: &Prune,
    params: &AirParams,
) -> Result<(), ConfigIssue> {
    improvement.validate()?;
    prune.validate(params)
}
