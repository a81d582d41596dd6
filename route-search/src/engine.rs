//! Breadth-first search over reachable air states.

use std::collections::{HashSet, VecDeque};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tas_route_core::{input_space, step, PhysicalKey, SimState, StickInput};

use crate::arena::{Arena, NodeId};
use crate::error::{ConfigIssue, SearchError};
use crate::policy::{Evaluation, SearchPolicy};
use crate::progress::{Progress, ProgressSink};
use crate::stats::SearchStats;

pub const DEFAULT_PARALLEL_MIN_INPUTS: usize = 64;

/// Engine tuning that never changes which route is found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Skip children physically identical to an already retained state.
    pub dedup: bool,
    /// Dedicated rayon pool size; `None` uses the global pool.
    pub jobs: Option<usize>,
    /// Expand sequentially when the input space is smaller than this.
    pub parallel_min_inputs: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            dedup: true,
            jobs: None,
            parallel_min_inputs: DEFAULT_PARALLEL_MIN_INPUTS,
        }
    }
}

/// Best state found and the route that reaches it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub node: NodeId,
    pub distance: f32,
    pub solved: bool,
    pub inputs: Vec<StickInput>,
    pub trajectory: Vec<SimState>,
}

impl Route {
    pub fn final_state(&self) -> &SimState {
        // The trajectory always holds at least the root.
        &self.trajectory[self.trajectory.len() - 1]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub route: Route,
    pub stats: SearchStats,
    pub arena: Arena,
}

/// Run a breadth-first search from `root` under `policy`.
///
/// Configuration problems are rejected before any state is expanded. The
/// result is identical for every thread count: children are collected in
/// input order and inserted by this thread only.
pub fn search<P: SearchPolicy + ?Sized>(
    root: SimState,
    policy: &P,
    options: &SearchOptions,
    sink: &mut dyn ProgressSink,
) -> Result<SearchReport, SearchError> {
    let inputs = validate(&root, policy, options)?;

    let pool = match options.jobs {
        Some(jobs) if jobs > 1 => Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .map_err(|err| SearchError::ThreadPool(err.to_string()))?,
        ),
        _ => None,
    };
    let fan_out = if inputs.len() < options.parallel_min_inputs || options.jobs == Some(1) {
        FanOut::Sequential
    } else {
        match &pool {
            Some(pool) => FanOut::Pool(pool),
            None => FanOut::Global,
        }
    };

    run(root, policy, options, &inputs, fan_out, sink)
}

/// Where one state's children are computed.
#[derive(Clone, Copy)]
enum FanOut<'a> {
    Sequential,
    Global,
    Pool(&'a rayon::ThreadPool),
}

fn validate<P: SearchPolicy + ?Sized>(
    root: &SimState,
    policy: &P,
    options: &SearchOptions,
) -> Result<Vec<StickInput>, ConfigIssue> {
    let range = policy.input_range();
    if !range.is_ordered() {
        return Err(ConfigIssue::InvertedInputRange);
    }
    let inputs = input_space(range, policy.dead_zone());
    if inputs.is_empty() {
        return Err(ConfigIssue::EmptyInputSpace);
    }

    let max_depth = policy.max_depth();
    if max_depth == 0 {
        return Err(ConfigIssue::ZeroMaxDepth);
    }
    if let Evaluation::AtDepth { depth } = policy.evaluation() {
        if depth == 0 || depth > max_depth {
            return Err(ConfigIssue::EvaluationDepthOutOfRange { depth, max_depth });
        }
    }

    if !root.is_finite() {
        return Err(ConfigIssue::NonFiniteRoot);
    }
    let histogram = policy.histogram();
    if !histogram.is_valid() {
        return Err(ConfigIssue::InvalidHistogram {
            bucket_width: histogram.bucket_width,
            buckets: histogram.buckets,
        });
    }
    if options.jobs == Some(0) {
        return Err(ConfigIssue::ZeroJobs);
    }

    policy.validate()?;
    if policy.prune(root) {
        return Err(ConfigIssue::RootPruned);
    }

    Ok(inputs)
}

fn run<P: SearchPolicy + ?Sized>(
    root: SimState,
    policy: &P,
    options: &SearchOptions,
    inputs: &[StickInput],
    fan_out: FanOut<'_>,
    sink: &mut dyn ProgressSink,
) -> Result<SearchReport, SearchError> {
    let max_depth = policy.max_depth();
    let evaluation = policy.evaluation();

    let mut arena = Arena::with_root(root);
    let mut visited: HashSet<PhysicalKey> = HashSet::new();
    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    let mut stats = SearchStats::new(policy.histogram());
    let mut best: Option<(NodeId, f32)> = None;

    visited.insert(root.key());
    frontier.push_back(NodeId::ROOT);

    'search: while let Some(parent_id) = frontier.pop_front() {
        let parent = *arena.state(parent_id);
        stats.expanded += 1;

        let children = expand(&parent, inputs, policy, fan_out);
        let child_depth = parent.index() + 1;
        if child_depth > stats.deepest {
            stats.deepest = child_depth;
            sink.on_depth(&Progress {
                depth: child_depth,
                frontier: frontier.len(),
                retained: stats.retained,
                best_distance: best.map(|(_, distance)| distance),
            });
        }

        for (input, child) in inputs.iter().zip(children) {
            stats.generated += 1;

            let key = child.key();
            if options.dedup && visited.contains(&key) {
                stats.duplicates += 1;
                continue;
            }
            if child.index() > max_depth {
                stats.beyond_depth += 1;
                continue;
            }
            if policy.prune(&child) {
                stats.pruned += 1;
                continue;
            }

            let terminal = evaluation.is_terminal(&child) || child.index() >= max_depth;
            let mut node = None;

            if evaluation.evaluates(&child) {
                let distance = policy.distance(&child);
                stats.evaluated += 1;
                stats.terminal_distances.record(distance);

                let improved = match best {
                    None => true,
                    Some((_, best_distance)) => policy.improves(distance, best_distance),
                };
                let accepted = policy.accepts(&child, distance);
                if improved || accepted {
                    let id = arena.push_child(parent_id, *input, child);
                    stats.retained += 1;
                    node = Some(id);
                    best = Some((id, distance));
                }
                if improved {
                    stats.improvements += 1;
                    tracing::debug!(
                        distance,
                        depth = child.index(),
                        route = ?best.map(|(id, _)| arena.lineage(id)),
                        "new best"
                    );
                }
                if accepted {
                    stats.solved = true;
                    tracing::info!(distance, depth = child.index(), "accepted state, stopping");
                    break 'search;
                }
            }

            // Terminal children stay out of Visited and the arena unless
            // they became the best.
            if terminal {
                continue;
            }
            let id = match node {
                Some(id) => id,
                None => {
                    stats.retained += 1;
                    arena.push_child(parent_id, *input, child)
                }
            };
            if options.dedup {
                visited.insert(key);
            }
            frontier.push_back(id);
            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }
    }

    let Some((node, distance)) = best else {
        return Err(SearchError::NoSolutionFound {
            stats: Box::new(stats),
        });
    };

    let route = Route {
        node,
        distance,
        solved: stats.solved,
        inputs: arena.lineage(node),
        trajectory: arena.trajectory(node),
    };
    Ok(SearchReport {
        route,
        stats,
        arena,
    })
}

fn expand<P: SearchPolicy + ?Sized>(
    parent: &SimState,
    inputs: &[StickInput],
    policy: &P,
    fan_out: FanOut<'_>,
) -> Vec<SimState> {
    let child_of = |input: &StickInput| child_state(parent, *input, policy);
    match fan_out {
        FanOut::Sequential => inputs.iter().map(child_of).collect(),
        FanOut::Global => inputs.par_iter().map(child_of).collect(),
        FanOut::Pool(pool) => pool.install(|| inputs.par_iter().map(child_of).collect()),
    }
}

fn child_state<P: SearchPolicy + ?Sized>(
    parent: &SimState,
    input: StickInput,
    policy: &P,
) -> SimState {
    let child = step(parent, input, policy.air_params());
    match policy.camera_override(child.index()) {
        Some(camera) => child.with_camera(camera),
        None => child,
    }
}

/// Apply `inputs` from `root` exactly as the search would, camera overrides
/// included. Returns every state, root first.
pub fn replay<P: SearchPolicy + ?Sized>(
    root: SimState,
    policy: &P,
    inputs: &[StickInput],
) -> Vec<SimState> {
    let mut states = Vec::with_capacity(inputs.len() + 1);
    states.push(root);
    let mut current = root;
    for input in inputs {
        current = child_state(&current, *input, policy);
        states.push(current);
    }
    states
}
