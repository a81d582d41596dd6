//! Built-in scenarios recorded from real TAS setups, plus fingerprints so a
//! report can be tied back to the exact configuration that produced it.

use serde::{Deserialize, Serialize};
use tas_route_core::{AirParams, Angle, DeadZone, InputRange, StickInput, Vec3};

use crate::policy::{Acceptance, Axis, Evaluation, Goal, GoalMetric, Improvement, Prune};
use crate::scenario::{RootSpec, Scenario};
use crate::stats::HistogramSpec;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub description: String,
    pub fingerprint: String,
    pub scenario: serde_json::Value,
}

struct CatalogConfig {
    id: &'static str,
    description: &'static str,
    build: fn() -> Scenario,
}

fn catalog_configs() -> &'static [CatalogConfig] {
    &[
        CatalogConfig {
            id: "bits-holp",
            description: "BitS hold-on-ledge position: 3 frames of falling air movement onto a planar goal.",
            build: bits_holp,
        },
        CatalogConfig {
            id: "wf-holp",
            description: "WF hold-on-ledge position: 4 frames with a per-frame camera yaw table.",
            build: wf_holp,
        },
        CatalogConfig {
            id: "ttm-holp",
            description: "TTM hold-on-ledge position: 4 backwards-speed frames, camera table, coarse improvement.",
            build: ttm_holp,
        },
        CatalogConfig {
            id: "bully",
            description: "Bully push setup: land exactly on the goal with |hSpeed| < 0.2 under a shrinking radius.",
            build: bully,
        },
        CatalogConfig {
            id: "wall-gap",
            description: "Wall gap: match an exact X coordinate when vertical speed reaches -34.",
            build: wall_gap,
        },
    ]
}

fn base_scenario(
    config_id: &str,
    description: &str,
    root: RootSpec,
    inputs: InputRange,
    max_depth: u32,
    goal: Goal,
    evaluation: Evaluation,
) -> Scenario {
    Scenario {
        id: config_id.to_string(),
        description: description.to_string(),
        root,
        inputs,
        dead_zone: DeadZone::STANDARD,
        max_depth,
        goal,
        evaluation,
        improvement: Improvement::Strict,
        acceptance: Acceptance::Never,
        prune: Prune::None,
        camera_by_index: Vec::new(),
        air: AirParams::STANDARD,
        histogram: HistogramSpec::default(),
    }
}

fn planar_goal(x: f32, z: f32) -> Goal {
    Goal {
        x,
        z,
        metric: GoalMetric::Planar,
    }
}

fn describe(id: &str) -> &'static str {
    catalog_configs()
        .iter()
        .find_map(|cfg| (cfg.id == id).then_some(cfg.description))
        .unwrap_or("")
}

fn bits_holp() -> Scenario {
    base_scenario(
        "bits-holp",
        describe("bits-holp"),
        RootSpec {
            position: Vec3::new(435.9137, 4474.0, -1854.505),
            velocity: Vec3::new(-16.170256, -75.0, -17.676327),
            h_speed: Some(23.899746),
            facing: Angle(39780),
            camera: Angle(16384),
        },
        InputRange::around(StickInput::new(-56, -31), 10, 10),
        3,
        planar_goal(392.8576, -1901.0168),
        Evaluation::AtDepth { depth: 3 },
    )
}

fn wf_holp() -> Scenario {
    let cameras = [32768, 32839, 32900, 32972, 33063, 33135, 33216].map(Angle);
    let mut out = base_scenario(
        "wf-holp",
        describe("wf-holp"),
        RootSpec {
            position: Vec3::new(310.12845, 4384.0, -1721.654),
            velocity: Vec3::new(15.524611, -24.0, -12.471047),
            h_speed: Some(19.878021),
            facing: Angle(24066),
            camera: cameras[0],
        },
        InputRange::around(StickInput::new(-45, -27), 5, 5),
        4,
        planar_goal(374.5299, -1773.0754),
        Evaluation::AtDepth { depth: 4 },
    );
    out.camera_by_index = cameras.to_vec();
    out
}

fn ttm_holp() -> Scenario {
    let cameras = [28563, 28552, 28548, 28533, 28524, 28514, 28500].map(Angle);
    let mut out = base_scenario(
        "ttm-holp",
        describe("ttm-holp"),
        RootSpec {
            position: Vec3::new(1094.1227, -476.172, -3675.9717),
            velocity: Vec3::new(-6.70572, -52.0, -0.628647),
            h_speed: Some(-6.7017365),
            facing: Angle(16455),
            camera: cameras[0],
        },
        InputRange::around(StickInput::new(56, 22), 5, 5),
        4,
        planar_goal(1060.8602, -3678.5767),
        Evaluation::AtDepth { depth: 4 },
    );
    out.camera_by_index = cameras.to_vec();
    out.improvement = Improvement::Coarse {
        above: 1.0,
        factor: 0.5,
    };
    out
}

fn bully() -> Scenario {
    let mut out = base_scenario(
        "bully",
        describe("bully"),
        RootSpec {
            position: Vec3::new(-8172.149, -47.469666, -507.29028),
            velocity: Vec3::new(-3.3343077, -75.0, 0.0),
            h_speed: Some(3.3343077),
            facing: Angle(49152),
            camera: Angle(32768),
        },
        InputRange::new(-70, 70, 0, 0),
        12,
        planar_goal(-8171.9707, -507.29028),
        Evaluation::EveryState,
    );
    out.prune = Prune::ShrinkingRadius { numerator: 10.0 };
    out.acceptance = Acceptance::ExactStop {
        max_abs_h_speed: 0.2,
    };
    out
}

fn wall_gap() -> Scenario {
    let mut out = base_scenario(
        "wall-gap",
        describe("wall-gap"),
        RootSpec {
            position: Vec3::new(-258.9269, 2373.0, 5770.877),
            velocity: Vec3::new(30.535696, -10.0, 0.0),
            h_speed: Some(30.535696),
            facing: Angle(16384),
            camera: Angle(49152),
        },
        InputRange::new(0, 0, -46, -30),
        6,
        Goal {
            x: -89.95662,
            z: 5770.877,
            metric: GoalMetric::Axis { axis: Axis::X },
        },
        Evaluation::VerticalSpeed { y_speed: -34.0 },
    );
    out.improvement = Improvement::Ratio { factor: 1.1 };
    out.prune = Prune::ProjectedAxis {
        axis: Axis::X,
        target_y_speed: -34.0,
        base: 2.0,
        growth: 2.0,
    };
    out.histogram = HistogramSpec {
        bucket_width: 0.00001,
        buckets: 1000,
    };
    out
}

pub fn scenario_ids() -> Vec<&'static str> {
    catalog_configs().iter().map(|cfg| cfg.id).collect()
}

pub fn describe_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog_configs()
        .iter()
        .map(|cfg| (cfg.id, cfg.description))
        .collect()
}

pub fn find_scenario(id: &str) -> Option<Scenario> {
    catalog_configs()
        .iter()
        .find(|cfg| cfg.id == id)
        .map(|cfg| (cfg.build)())
}

fn hash_json(value: &serde_json::Value) -> Result<String, serde_json::Error> {
    let encoded = serde_json::to_vec(value)?;
    let digest = crc32(&encoded);
    Ok(format!("crc32:{digest:08x}:len:{}", encoded.len()))
}

/// Stable identifier of a scenario's full configuration.
pub fn scenario_fingerprint(scenario: &Scenario) -> Result<String, serde_json::Error> {
    hash_json(&serde_json::to_value(scenario)?)
}

pub fn catalog_manifest() -> Result<Vec<CatalogEntry>, serde_json::Error> {
    let mut out = Vec::new();
    for cfg in catalog_configs() {
        let config = serde_json::to_value((cfg.build)())?;
        out.push(CatalogEntry {
            id: cfg.id.to_string(),
            description: cfg.description.to_string(),
            fingerprint: hash_json(&config)?,
            scenario: config,
        });
    }
    Ok(out)
}

const CRC_TABLE: [u32; 256] = build_crc_table();

const fn build_crc_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;

    while i < 256 {
        let mut c = i as u32;
        let mut j = 0;

        while j < 8 {
            c = if (c & 1) != 0 {
                0xEDB8_8320u32 ^ (c >> 1)
            } else {
                c >> 1
            };
            j += 1;
        }

        table[i] = c;
        i += 1;
    }

    table
}

fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for byte in data {
        let idx = ((crc ^ (*byte as u32)) & 0xFF) as usize;
        crc = CRC_TABLE[idx] ^ (crc >> 8);
    }
    crc ^ 0xFFFF_FFFFu32
}
