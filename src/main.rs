use solarsim::{ScenarioConfig, Scenario};
use solarsim::{run_2d, run_headless};
use solarsim::bench_step_frame;

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D solar system simulation")]
struct Args {
    /// Scenario file, looked up in `scenarios/` unless it is an existing path
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Step the simulation without opening a window
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode
    #[arg(long, default_value_t = 365)]
    frames: u64,

    /// Time `step_frame` and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step_frame();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        let scenario = run_headless(scenario, args.frames).context("scenario lost during headless run")?;
        let days = scenario.system.elapsed() / scenario.parameters.timestep;
        println!("after {} frames ({days:.0} days):", scenario.system.frames());
        for label in scenario.system.labels() {
            println!("  {label}");
        }
    } else {
        run_2d(scenario);
    }

    Ok(())
}
