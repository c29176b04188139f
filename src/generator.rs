//! Random input generation.
//!
//! Produces raw element files for the sorter: `byte_budget / 4` integers
//! drawn uniformly from `[0, i32::MAX]`, native byte order, no header.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use rand::Rng;
use tracing::info;

use crate::common::{Element, Error, Result, ELEMENT_SIZE};

const MIB: u64 = 1024 * 1024;

/// Named output sizes accepted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// 512 MiB.
    Small,
    /// 1 GiB.
    Medium,
    /// 2 GiB.
    Large,
}

impl SizeClass {
    /// Output size in bytes.
    pub fn byte_budget(&self) -> u64 {
        match self {
            SizeClass::Small => 512 * MIB,
            SizeClass::Medium => 1024 * MIB,
            SizeClass::Large => 2048 * MIB,
        }
    }

    /// Number of integers this size produces.
    pub fn element_count(&self) -> u64 {
        self.byte_budget() / ELEMENT_SIZE as u64
    }
}

impl FromStr for SizeClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SMALL" => Ok(SizeClass::Small),
            "MEDIUM" => Ok(SizeClass::Medium),
            "LARGE" => Ok(SizeClass::Large),
            other => Err(Error::InvalidArgument(format!(
                "unknown size '{}' (expected SMALL, MEDIUM or LARGE)",
                other
            ))),
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeClass::Small => "SMALL",
            SizeClass::Medium => "MEDIUM",
            SizeClass::Large => "LARGE",
        };
        f.write_str(name)
    }
}

/// Write `byte_budget / 4` random non-negative integers to `path`.
///
/// A budget that is not a multiple of the element width is rounded down.
/// Returns the number of integers written.
///
/// # Example
/// ```no_run
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let count = pagesort::generator::generate_file("input.bin", 4096, &mut rng)?;
/// assert_eq!(count, 1024);
/// # Ok::<(), pagesort::Error>(())
/// ```
pub fn generate_file<P: AsRef<Path>, R: Rng>(
    path: P,
    byte_budget: u64,
    rng: &mut R,
) -> Result<u64> {
    let count = byte_budget / ELEMENT_SIZE as u64;
    let mut out = BufWriter::new(File::create(path.as_ref())?);

    for _ in 0..count {
        let value: Element = rng.gen_range(0..=Element::MAX);
        out.write_all(&value.to_ne_bytes())?;
    }
    out.flush()?;

    info!(path = %path.as_ref().display(), count, "generated input file");
    Ok(count)
}
