use std::{
    collections::BTreeMap,
    error,
    fmt::Display,
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;
use common::Tagged;
use log::debug;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidJoltText(String),
    NoAdapter,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InvalidJoltText(s) => write!(
                f,
                "Invalid text({}) for joltage adapter rating, expect non-negative numbers",
                s
            ),
            Error::NoAdapter => write!(f, "Given empty list of joltage adapter ratings"),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Joltage adapter ratings file, read from stdin if absent.
    pub input_path: Option<PathBuf>,
}

const MAX_JOLT_DIFF: usize = 3;

pub enum SortedTag {}
/// Joltages from the charging outlet(0) through all adapters to the device, ascending.
pub type Chain = Tagged<SortedTag, Vec<usize>>;

pub fn chain(mut jolts: Vec<usize>) -> Result<Chain, Error> {
    jolts.sort_unstable();
    let device_jolt = jolts.last().ok_or(Error::NoAdapter)? + MAX_JOLT_DIFF;
    jolts.insert(0, 0);
    jolts.push(device_jolt);

    Ok(Chain::new(jolts))
}

/// Histogram of differences between adjacent joltages.
pub fn differentials(chain: &Chain) -> BTreeMap<usize, usize> {
    chain.windows(2).fold(BTreeMap::new(), |mut diffs, w| {
        *diffs.entry(w[1] - w[0]).or_insert(0) += 1;
        diffs
    })
}

/// Count of distinct adapter arrangements connecting the outlet to the device.
pub fn arrangements(chain: &Chain) -> u64 {
    let jolts_n = chain.len();
    let mut ways_to_dev = vec![0u64; jolts_n];
    ways_to_dev[jolts_n - 1] = 1;
    // Accumulate connection ways from rear to front.
    for ind in (1..jolts_n).rev() {
        let mut up_ind = ind;
        while up_ind > 0 && chain[ind] - chain[up_ind - 1] <= MAX_JOLT_DIFF {
            up_ind -= 1;
            // Accumulate to upper joltage adapter.
            ways_to_dev[up_ind] += ways_to_dev[ind];
        }
    }

    debug!("Ways through each joltage: {:?}", ways_to_dev);
    ways_to_dev[0]
}

pub fn read_jolts_n<R: BufRead>(reader: R) -> Result<Vec<usize>, Error> {
    let mut jolts = Vec::new();
    for l in reader.lines() {
        let s = l.map_err(Error::IOError)?;
        let text = s.trim();
        if !text.is_empty() {
            jolts.push(
                text.parse::<usize>()
                    .map_err(|_| Error::InvalidJoltText(s.clone()))?,
            );
        }
    }

    Ok(jolts)
}
