//! `sort` - sort a binary integer file through a paged array and time it.
//!
//! ```text
//! sort --input <path> --output <path> --alg <QS|IS|BS>
//!      [--page-size <elements>] [--policy <lru|fifo>]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pagesort::{Algorithm, EvictionPolicy, PagedArray, PagedArrayConfig, DEFAULT_PAGE_SIZE};

#[derive(Parser)]
#[command(
    name = "sort",
    about = "Sort a binary file of 32-bit integers with only a few pages in memory",
    version
)]
struct Cli {
    /// File to read the integers from
    #[arg(long)]
    input: PathBuf,

    /// File to write the sorted integers to (may equal --input)
    #[arg(long)]
    output: PathBuf,

    /// Algorithm: QS (quicksort), IS (insertion sort) or BS (bubble sort)
    #[arg(long)]
    alg: String,

    /// Elements per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Eviction policy: lru or fifo
    #[arg(long, default_value = "lru")]
    policy: String,
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
    // Validate everything before touching the filesystem.
    let algorithm: Algorithm = cli.alg.parse()?;
    let policy: EvictionPolicy = cli.policy.parse()?;
    let config = PagedArrayConfig::default()
        .with_page_size(cli.page_size)
        .with_policy(policy);
    config.validate()?;

    let mut array = PagedArray::with_config(&cli.input, &cli.output, config)?;
    info!(%algorithm, elements = array.len(), "sorting");

    let start = Instant::now();
    let sorted = algorithm.run(&mut array);
    let elapsed = start.elapsed();

    // On failure the array still flushes on drop; the output is not sorted.
    sorted?;
    let stats = array.stats();
    array.close()?;

    println!("Sorting completed in {:.6} seconds.", elapsed.as_secs_f64());
    println!("Algorithm used: {}", algorithm.code());
    println!(
        "Accesses: {}, page hits: {}, page faults: {}, evictions: {}, hit rate: {:.2}%",
        stats.accesses(),
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.hit_rate() * 100.0
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
