//! Table simulator CLI - plays many seeded hands at one in-memory table.
//!
//! Every action goes through the backend's game flow service, so simulated
//! hands obey the same validation as live play.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use metrics::{build_hand_metrics, RunStats};
use output::OutputWriter;
use simulator::Simulator;
use tracing::{info, warn};
use types::{AiType, OutputFormat};

#[derive(Parser)]
#[command(name = "table-simulator")]
#[command(about = "In-memory Sheepshead table simulator")]
struct Args {
    /// Number of hands to play
    #[arg(short = 'n', long, default_value = "100")]
    hands: u32,

    /// Agent type for all five seats
    #[arg(long, default_value = "random")]
    ai: AiType,

    /// Base seed for deals and agents; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit structured JSON logs (filter from RUST_LOG, default info)
    #[arg(long)]
    json_logs: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the JSONL output
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.json_logs {
        backend::telemetry::init_tracing();
    } else {
        // Silent by default, only warnings and errors.
        let filter = if args.verbose {
            "debug"
        } else if args.show_output {
            "info"
        } else {
            "warn"
        };
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let ai_type = args.ai.name();
    if args.show_output {
        info!(hands = args.hands, seed, ai_type, "Starting table simulator");
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, args.output_format, args.compress)?;
    let simulator = Simulator::new(seed, ai_type)?;

    let start = Instant::now();
    let mut stats = RunStats::default();
    let mut errors = 0u32;

    for _ in 0..args.hands {
        let hand_start = Instant::now();
        match simulator.play_hand() {
            Ok(outcome) => {
                let duration_ms = hand_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_hand_metrics(seed, ai_type, &outcome, duration_ms);
                if let Err(e) = output_writer.write_hand(&metrics) {
                    warn!(hand_no = outcome.hand_no, error = %e, "Failed to write hand metrics");
                }
                stats.record(&outcome.result);
                if args.verbose {
                    info!(hand_no = outcome.hand_no, "{}", outcome.summary);
                }
            }
            Err(e) => {
                // A failed hand leaves the table mid-hand; nothing further can be dealt.
                errors += 1;
                warn!(error = %e, "Hand failed, stopping run");
                break;
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.clone();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());

        let totals = simulator.totals()?;
        print_summary(&stats, &totals, errors, elapsed, args.hands);
    }

    Ok(())
}

fn print_summary(
    stats: &RunStats,
    totals: &[i32; 5],
    errors: u32,
    elapsed: Duration,
    requested: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Hands completed: {}/{}", stats.hands, requested);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if stats.hands == 0 {
        return;
    }
    println!("Average time per hand: {:?}", elapsed / stats.hands);
    println!(
        "Schwanzers: {}, schneider: {}, schwarz: {}",
        stats.schwanzers, stats.schneiders, stats.schwarzes
    );
    println!("Picker side win rate: {:.1}%", stats.pick_win_rate());

    println!("\n=== Results by Seat ===");
    for (seat, (seat_stats, total)) in stats.seats.iter().zip(totals).enumerate() {
        println!(
            "Seat {}: total={}, picks={}, pick_wins={}, alone={}, partner={}, schwanzer_losses={}",
            seat,
            total,
            seat_stats.picks,
            seat_stats.pick_wins,
            seat_stats.alone,
            seat_stats.partner,
            seat_stats.schwanzer_losses
        );
    }
}
