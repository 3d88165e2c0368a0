//! Sigil CLI
//!
//! Command-line wrapper around the sigil generator and the solfeggio
//! frequency tables. The library does the real work; this binary only
//! parses arguments and prints results.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sigil_core::{frequency, Chakra};
use sigil_render::{SigilGenerator, DEFAULT_IMAGE_SIZE};

#[derive(Parser)]
#[command(name = "sigil")]
#[command(about = "Deterministic chakra sigil generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sigil image for a wound report
    Generate {
        /// Wound type (e.g. "root", "sacral", "solar_plexus")
        #[arg(short, long)]
        wound: String,

        /// Solver id driving the procedural variations
        #[arg(short, long)]
        solver_id: String,

        /// Chakra frequency label used as fallback (e.g. "396 Hz")
        #[arg(short, long)]
        frequency: Option<String>,

        /// Output path for the PNG
        #[arg(short, long, default_value = "sigil.png")]
        output: PathBuf,

        /// Image side length in pixels
        #[arg(long, default_value_t = DEFAULT_IMAGE_SIZE)]
        size: u32,
    },

    /// Look up the chakra mapping for a solfeggio frequency
    Lookup {
        /// Frequency in Hz (e.g. 396)
        hz: u32,

        /// Print the mapping as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the color palette of a chakra
    Palette {
        /// Chakra name (e.g. "heart")
        name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            wound,
            solver_id,
            frequency,
            output,
            size,
        } => {
            let generator = SigilGenerator::new(frequency.as_deref(), &wound, &solver_id)?;
            let path = generator.generate(&output, size)?;
            println!(
                "{} sigil for solver {} -> {}",
                generator.chakra().name(),
                generator.solver_id(),
                path.display()
            );
        }

        Commands::Lookup { hz, json } => {
            let mapping = frequency::lookup(hz)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&mapping)?);
            } else {
                println!("{} Hz -> {}", mapping.hz, mapping.chakra.name());
                println!(
                    "breath: inhale {} / hold {} / exhale {} ({})",
                    mapping.breath.inhale,
                    mapping.breath.hold,
                    mapping.breath.exhale,
                    mapping.breath.technique
                );
                println!("visualize: {}", mapping.visualization);
            }
        }

        Commands::Palette { name } => {
            let chakra = Chakra::from_name(&name)
                .ok_or_else(|| anyhow::anyhow!("Unsupported wound type: {name}"))?;
            let palette = chakra.palette();
            println!("{} ({} Hz)", chakra.name(), chakra.frequency_hz());
            println!("primary    {}", palette.primary.to_hex());
            println!("secondary  {}", palette.secondary.to_hex());
            println!("accent     {}", palette.accent.to_hex());
            println!("background {}", palette.background.to_hex());
        }
    }

    Ok(())
}
