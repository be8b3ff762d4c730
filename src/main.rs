use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::thread;

use elevator_sim::simulation::{
    DispatchError, DispatchService, Dispatcher, HallCallGenerator, ScenarioConfig, SimWorld,
    SimulationStats, DEFAULT_MAX_GROUP,
};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Elevator fleet dispatch simulation")]
struct Cli {
    /// Number of hall calls to simulate
    #[arg(long, default_value = "100")]
    calls: u32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Largest group of passengers behind one hall call
    #[arg(long, default_value_t = DEFAULT_MAX_GROUP)]
    max_group: usize,

    /// Route hall calls from several caller threads through the dispatch service
    #[arg(long)]
    service: bool,

    /// Number of caller threads in service mode
    #[arg(long, default_value = "4")]
    callers: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let scenario = ScenarioConfig {
        max_group: cli.max_group,
        ..ScenarioConfig::default()
    };

    if cli.service {
        run_service(&cli, scenario)
    } else {
        run_headless(&cli, scenario)
    }
}

/// Run every hall call on the main thread
fn run_headless(cli: &Cli, scenario: ScenarioConfig) -> Result<()> {
    info!("Running elevator simulation: {} hall call(s)", cli.calls);

    let dispatcher = Dispatcher::default();
    let mut world = match cli.seed {
        Some(seed) => SimWorld::new_with_seed(dispatcher, scenario, seed)?,
        None => SimWorld::new(dispatcher, scenario)?,
    };

    println!("Initial state:");
    world.print_summary();
    println!();

    world.run(cli.calls);

    println!("=== Final State ===");
    world.print_summary();

    world.stats.log_report();
    Ok(())
}

/// Split the hall calls across caller threads sharing one dispatch service
fn run_service(cli: &Cli, scenario: ScenarioConfig) -> Result<()> {
    let callers = cli.callers.max(1);
    info!(
        "Running elevator simulation through the dispatch service: {} hall call(s), {} caller(s)",
        cli.calls, callers
    );

    let dispatcher = Dispatcher::default();
    let bound = dispatcher.reference_floor_bound();
    let service = DispatchService::spawn(dispatcher)?;

    let mut workers = Vec::with_capacity(callers as usize);
    for caller in 0..callers {
        let handle = service.handle();
        let calls = cli.calls / callers + u32::from(caller < cli.calls % callers);
        let seed = cli.seed.map(|s| s.wrapping_add(u64::from(caller)));

        let worker = thread::Builder::new()
            .name(format!("caller-{caller}"))
            .spawn(move || -> Result<SimulationStats> {
                let mut generator = HallCallGenerator::new(scenario, bound, seed)?;
                let mut stats = SimulationStats::new();
                for _ in 0..calls {
                    let (floor, passengers) = generator.next_call();
                    let result = match handle.dispatch_hall_call(floor, &passengers) {
                        Ok(outcome) => Ok(outcome),
                        Err(err) => Err(err
                            .downcast::<DispatchError>()
                            .context("dispatch service failed")?),
                    };
                    stats.record(&result);
                }
                Ok(stats)
            })
            .context("failed to spawn caller thread")?;
        workers.push(worker);
    }

    let mut stats = SimulationStats::new();
    for worker in workers {
        let caller_stats = worker
            .join()
            .map_err(|_| anyhow::anyhow!("caller thread panicked"))??;
        stats.merge(&caller_stats);
    }

    let dispatcher = service.shutdown()?;
    let mut world = SimWorld::new(dispatcher, scenario)?;
    world.stats = stats;
    world.time = world.stats.hall_calls_issued;

    println!("=== Final State ===");
    world.print_summary();

    world.stats.log_report();
    Ok(())
}
