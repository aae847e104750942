/*!
 * Kernel Simulator - Main Entry Point
 *
 * Loads a workload file, runs the scheduler/allocator simulation and prints:
 * - A Gantt chart of CPU usage with summary statistics
 * - A memory timeline of block layout per tick
 * - Or, with --json, the full trace and statistics as JSON
 */

use clap::Parser;
use miette::IntoDiagnostic;
use serde::Serialize;
use tracing::info;

use kernel_sim::core::types::Size;
use kernel_sim::monitoring::span_simulation;
use kernel_sim::process::load_from_file;
use kernel_sim::render::{render_gantt, render_memory_timeline};
use kernel_sim::{
    init_tracing, MemoryInfo, MemoryStats, Process, SchedulerBuilder, SchedulerStats, SimConfig,
    SimError, TraceEntry,
};

#[derive(Parser, Debug)]
#[command(
    name = "kernel-sim",
    version,
    about = "OS scheduler and memory allocation simulator"
)]
struct Cli {
    /// Path to JSON file with processes
    #[arg(long)]
    file: String,

    /// Scheduling algorithm to use
    #[arg(long, default_value = "FCFS", value_parser = ["FCFS", "RR"])]
    scheduler: String,

    /// Time quantum for Round Robin
    #[arg(long, default_value_t = 4)]
    quantum: u64,

    /// Total memory size
    #[arg(long, default_value_t = 1024)]
    memory: Size,

    /// Memory allocation strategy
    #[arg(long, default_value = "first_fit", value_parser = ["first_fit", "best_fit"])]
    strategy: String,

    /// Print the trace and statistics as JSON instead of charts
    #[arg(long)]
    json: bool,
}

/// Machine-readable run report
#[derive(Serialize)]
struct Report<'a> {
    config: &'a SimConfig,
    stats: SchedulerStats,
    memory: MemoryStats,
    completed: &'a [Process],
    rejected: &'a [Process],
    trace: &'a [TraceEntry],
}

fn main() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = SimConfig::from_names(cli.memory, &cli.strategy, &cli.scheduler, cli.quantum)
        .map_err(SimError::from)?;
    let processes = load_from_file(&cli.file).map_err(SimError::from)?;

    let span = span_simulation(
        config.policy.as_str(),
        config.strategy.as_str(),
        config.total_memory,
    );
    let _guard = span.enter();

    let mut scheduler = SchedulerBuilder::from_config(&config)
        .map_err(SimError::from)?
        .build();
    scheduler.run(processes).map_err(SimError::from)?;

    info!(
        ticks = scheduler.time(),
        completed = scheduler.completed().len(),
        rejected = scheduler.rejected().len(),
        "Simulation complete"
    );

    if cli.json {
        let report = Report {
            config: &config,
            stats: scheduler.stats(),
            memory: scheduler.memory().stats(),
            completed: scheduler.completed(),
            rejected: scheduler.rejected(),
            trace: scheduler.trace(),
        };
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
        println!("{}", json);
    } else {
        print!(
            "{}",
            render_gantt(
                scheduler.trace(),
                scheduler.get_stats(),
                &scheduler.get_rejected_processes(),
            )
        );
        println!();
        print!("{}", render_memory_timeline(scheduler.trace()));
    }

    Ok(())
}
