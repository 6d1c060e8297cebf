use quadgrav::{Scenario, ScenarioConfig, bench_solvers};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Override the step count from the scenario file
    #[arg(short, long)]
    steps: Option<usize>,

    /// Run the solver timing comparison instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_solvers();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg);

    let steps = args.steps.unwrap_or(scenario.steps);
    let mut total_interactions: u64 = 0;

    for _ in 0..steps {
        let report = scenario
            .solver
            .step(&mut scenario.system, &scenario.parameters);
        total_interactions += report.interactions;
    }

    println!(
        "ran {} steps of {:?} over {} bodies, {} interactions total",
        steps,
        scenario.solver,
        scenario.system.bodies.len(),
        total_interactions
    );
    for (i, b) in scenario.system.bodies.iter().enumerate() {
        println!(
            "body {i:4}: x = ({:10.4}, {:10.4}), v = ({:8.4}, {:8.4})",
            b.x.x, b.x.y, b.v.x, b.v.y
        );
    }

    Ok(())
}
