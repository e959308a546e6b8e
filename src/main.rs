use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use intersection_drive::simulation::{DriveScript, SimConfig, SimWorld, ViewKind};

#[derive(Parser)]
#[command(name = "intersection_drive")]
#[command(about = "Headless driving simulation at a signalled intersection")]
struct Cli {
    /// Number of ticks to run when no drive script is given
    #[arg(long, default_value = "1000")]
    ticks: u32,

    /// Duration of one tick in milliseconds
    #[arg(long, default_value = "20")]
    tick_ms: u32,

    /// Seed for tree placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Drive script, e.g. "forward:150,forward+left:40,coast:60,brake"
    #[arg(long)]
    script: Option<String>,

    /// Print a summary every N ticks (0 disables periodic reports)
    #[arg(long, default_value = "250")]
    report_every: u32,

    /// Sleep between ticks so the run proceeds in real time
    #[arg(long)]
    realtime: bool,

    /// Window width used for the viewport layout report
    #[arg(long, default_value = "1300")]
    width: i32,

    /// Window height used for the viewport layout report
    #[arg(long, default_value = "800")]
    height: i32,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,intersection_drive=info"),
    )
    .init();

    let cli = Cli::parse();
    if let Err(e) = run_headless(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli) -> Result<()> {
    let config = SimConfig {
        tick_ms: cli.tick_ms,
        seed: cli.seed,
        ..SimConfig::default()
    };
    let mut world = SimWorld::new(config).context("Invalid simulation configuration")?;

    let script = match &cli.script {
        Some(text) => text.parse::<DriveScript>()?,
        None => format!("forward:{}", cli.ticks).parse::<DriveScript>()?,
    };

    info!(
        "Running {} ticks of {} ms ({} script steps)",
        script.total_ticks(),
        cli.tick_ms,
        script.steps.len()
    );

    println!("Initial state:");
    world.print_summary();
    world.draw_map(60.0);

    let report_every = u64::from(cli.report_every);
    let pause = std::time::Duration::from_millis(u64::from(cli.tick_ms));
    world.run_script(&script, |world| {
        let tick = world.tick_count();
        if report_every > 0 && tick % report_every == 0 {
            println!(
                "--- After tick {} ({:.1}s simulated time) ---",
                tick,
                world.elapsed_ms() as f32 / 1000.0
            );
            world.print_summary();
            world.draw_map(60.0);
        }
        if cli.realtime {
            std::thread::sleep(pause);
        }
    });

    println!("=== Final State ===");
    world.print_summary();
    world.draw_map(60.0);

    println!("--- Viewports ({}x{}) ---", cli.width, cli.height);
    for rig in world.view_rigs(cli.width, cli.height) {
        let name = match rig.kind {
            ViewKind::Chase => "chase",
            ViewKind::RightSide => "right",
            ViewKind::TopDown => "top",
            ViewKind::LeftSide => "left",
        };
        println!(
            "  {:<5} at ({}, {}) {}x{}: eye ({:.1}, {:.1}, {:.1})",
            name,
            rig.viewport.x,
            rig.viewport.y,
            rig.viewport.width,
            rig.viewport.height,
            rig.eye.x,
            rig.eye.y,
            rig.eye.z
        );
    }

    world.log_report();
    Ok(())
}
