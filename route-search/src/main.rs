use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tas_route_search::catalog::{
    catalog_manifest, describe_scenarios, find_scenario, scenario_fingerprint, scenario_ids,
};
use tas_route_search::report::{format_route, format_states, write_json, RouteReport};
use tas_route_search::util::{parse_angle, parse_inputs};
use tas_route_search::{replay, settings, Scenario, SearchError, TracingProgress};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tas-route")]
#[command(about = "Breadth-first search for frame-perfect airborne stick inputs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ScenarioSource {
    /// Built-in scenario id (see list-scenarios)
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    scenario: Option<String>,
    /// Scenario JSON file (see show-scenario for a template)
    #[arg(long)]
    file: Option<PathBuf>,
    /// Override the root camera yaw (decimal or 0x hex)
    #[arg(long)]
    camera: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List built-in scenarios
    ListScenarios,
    /// Print one scenario as JSON
    ShowScenario {
        #[arg(long)]
        id: String,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Export every built-in scenario with its fingerprint
    CatalogManifest {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Search a scenario and print the best route
    Run {
        #[command(flatten)]
        source: ScenarioSource,
        #[arg(long)]
        max_depth: Option<u32>,
        /// Re-centre the input window with this radius on both axes
        #[arg(long)]
        radius: Option<u8>,
        #[arg(long)]
        jobs: Option<usize>,
        /// Keep physically identical states (diagnostics only; much slower)
        #[arg(long, default_value_t = false)]
        no_dedup: bool,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replay inputs from a scenario's root and print every state
    Simulate {
        #[command(flatten)]
        source: ScenarioSource,
        /// Inputs as "x,z;x,z;..."
        #[arg(long)]
        inputs: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::ListScenarios => {
            for (id, description) in describe_scenarios() {
                println!("{id:12} {description}");
            }
        }
        Commands::ShowScenario { id, output } => {
            let scenario = lookup(&id)?;
            match output {
                Some(path) => {
                    write_json(&path, &scenario)?;
                    println!("wrote={}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&scenario)?),
            }
        }
        Commands::CatalogManifest { output } => {
            let manifest = catalog_manifest()?;
            match output {
                Some(path) => {
                    write_json(&path, &manifest)?;
                    println!("wrote={}", path.display());
                    println!("scenarios={}", manifest.len());
                }
                None => println!("{}", serde_json::to_string_pretty(&manifest)?),
            }
        }
        Commands::Run {
            source,
            max_depth,
            radius,
            jobs,
            no_dedup,
            output,
        } => {
            let mut scenario = load(&source)?;
            if let Some(max_depth) = max_depth {
                scenario = scenario.with_max_depth(max_depth);
            }
            if let Some(radius) = radius {
                scenario = scenario.with_radius(radius);
            }

            let mut options = settings::from_env();
            if jobs.is_some() {
                options.jobs = jobs;
            }
            options.dedup = !no_dedup;

            tracing::info!(
                scenario = %scenario.id,
                max_depth = scenario.max_depth,
                jobs = ?options.jobs,
                dedup = options.dedup,
                "starting search"
            );
            let report = match scenario.run(&options, &mut TracingProgress) {
                Ok(report) => report,
                Err(SearchError::NoSolutionFound { stats }) => {
                    println!("scenario={}", scenario.id);
                    println!("status=no_solution");
                    println!("expanded={}", stats.expanded);
                    println!("pruned={}", stats.pruned);
                    return Err(anyhow!("no solution found for scenario '{}'", scenario.id));
                }
                Err(err) => return Err(err.into()),
            };

            let route = &report.route;
            println!("scenario={}", scenario.id);
            println!("fingerprint={}", scenario_fingerprint(&scenario)?);
            println!("status={}", if route.solved { "solved" } else { "best" });
            println!("distance={}", route.distance);
            println!("frames={}", route.inputs.len());
            println!("expanded={}", report.stats.expanded);
            println!("retained={}", report.stats.retained);
            println!("duplicates={}", report.stats.duplicates);
            println!("pruned={}", report.stats.pruned);
            print!("{}", format_route(&route.inputs));

            if let Some(path) = output {
                let summary = RouteReport::new(&scenario, &report)?;
                write_json(&path, &summary)?;
                println!("output={}", path.display());
            }
        }
        Commands::Simulate { source, inputs } => {
            let scenario = load(&source)?;
            let inputs = parse_inputs(&inputs)?;
            let states = replay(scenario.root_state(), &scenario, &inputs);
            print!("{}", format_states(&states));
            if let Some(last) = states.last() {
                println!("distance={}", scenario.goal.distance(last));
            }
        }
    }

    Ok(())
}

fn lookup(id: &str) -> Result<Scenario> {
    find_scenario(id).ok_or_else(|| {
        let available = scenario_ids().join(", ");
        anyhow!("unknown scenario '{id}'. available: {available}")
    })
}

fn load(source: &ScenarioSource) -> Result<Scenario> {
    let mut scenario = match (&source.scenario, &source.file) {
        (Some(id), _) => lookup(id)?,
        (None, Some(path)) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed reading scenario file {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("failed parsing scenario file {}", path.display()))?
        }
        (None, None) => return Err(anyhow!("pass --scenario <id> or --file <json>")),
    };
    if let Some(camera) = &source.camera {
        scenario.root.camera = parse_angle(camera)?;
    }
    Ok(scenario)
}
