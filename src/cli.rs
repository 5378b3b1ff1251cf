use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::SimConfig;
use crate::simulation::Simulation;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation headless and dump the final visible frame as JSON
    Run {
        /// JSON config file; defaults are used when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of production ticks after warm-up
        #[arg(long, default_value_t = 600)]
        ticks: usize,

        /// Simulated frames per second driving the modulation clock
        #[arg(long, default_value_t = 60.0)]
        fps: f64,

        /// Output file for the final frame (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            fps,
            out,
        } => run_headless(config, ticks, fps, out),
    }
}

fn run_headless(
    config_path: Option<PathBuf>,
    ticks: usize,
    fps: f64,
    out: Option<PathBuf>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {:?}", path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse config {:?}", path))?
        }
        None => SimConfig::default(),
    };

    let mut sim = Simulation::new(config)?;
    let frame_dt = 1.0 / fps;

    log::info!("running {} ticks at {} fps", ticks, fps);
    for i in 0..ticks {
        sim.tick(frame_dt);
        if i > 0 && i % 600 == 0 {
            log::info!(
                "tick {}/{}: visible range {:?}",
                i,
                ticks,
                sim.cursor().visible()
            );
        }
    }

    let frame = sim.frame();
    let json = serde_json::to_string_pretty(&frame)?;
    match out {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("failed to write {:?}", path))?;
            log::info!("wrote final frame to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
