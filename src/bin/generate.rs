//! `generate` - write a file of random non-negative 32-bit integers.
//!
//! ```text
//! generate --size <SMALL|MEDIUM|LARGE> --output <path> [--seed <u64>]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use pagesort::generator::{generate_file, SizeClass};

#[derive(Parser)]
#[command(
    name = "generate",
    about = "Generate a binary file of random 32-bit integers",
    version
)]
struct Cli {
    /// Output size: SMALL (512 MiB), MEDIUM (1 GiB) or LARGE (2 GiB)
    #[arg(long)]
    size: String,

    /// Path of the file to create
    #[arg(long)]
    output: PathBuf,

    /// Seed for reproducible output (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> pagesort::Result<()> {
    let size: SizeClass = cli.size.parse()?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let count = generate_file(&cli.output, size.byte_budget(), &mut rng)?;
    println!(
        "Generated {} integers ({}) at {}",
        count,
        size,
        cli.output.display()
    );
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
