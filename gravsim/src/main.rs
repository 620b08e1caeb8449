use gravsim::{Scenario, ScenarioConfig, Preset, Runner, LogObserver, Model, System, Chain};
use gravsim::{bench_gravity, bench_chain};

use clap::Parser;
use anyhow::{Context, Result};
use serde::Serialize;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless fixed-step gravity and pendulum simulator")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, long)]
    file_name: Option<String>,

    /// Built-in scenario, used when no file is given
    #[arg(short, long, value_enum, default_value = "around-the-sun")]
    preset: Preset,

    /// Override the number of ticks to run
    #[arg(short, long)]
    steps: Option<u64>,

    /// Run the stepper timing sweeps instead of a scenario
    #[arg(long)]
    bench: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum FinalState<'a> {
    Gravity(&'a System),
    Pendulum(&'a Chain),
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let Some(file_name) = &args.file_name else {
        return Ok(args.preset.config());
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::from_yaml_file(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity()?;
        bench_chain()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let steps = args.steps.unwrap_or(scenario.parameters.steps);

    let mut runner = Runner::new(scenario)?;
    let mut observer = LogObserver::default();
    runner.run(steps, &mut observer)?;

    let state = match &runner.scenario.model {
        Model::Gravity { system, .. } => FinalState::Gravity(system),
        Model::Pendulum(chain) => FinalState::Pendulum(chain),
    };
    print!("{}", serde_yaml::to_string(&state)?);

    Ok(())
}
