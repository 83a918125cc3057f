use std::{
    error,
    fmt::Display,
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;
use log::debug;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidNumberText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InvalidNumberText(s) => {
                write!(f, "Invalid text: {}, expect a non-negative number", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// XMAS encrypted data file, read from stdin if absent.
    pub input_path: Option<PathBuf>,
    /// Count of previous numbers a number must be a sum of.
    #[arg(short, long, default_value_t = 25)]
    pub preamble: usize,
}

fn is_pair_sum(window: &[u64], n: u64) -> bool {
    window
        .iter()
        .enumerate()
        .any(|(ind, &a)| {
            window[(ind + 1)..]
                .iter()
                .any(|&b| a.checked_add(b) == Some(n))
        })
}

/// The first number which isn't a sum of two(at different positions) of its `preamble` predecessors.
pub fn find_invalid(nums: &[u64], preamble: usize) -> Option<u64> {
    if preamble == 0 {
        return None;
    }

    nums.windows(preamble + 1)
        .map(|w| (&w[..preamble], w[preamble]))
        .find(|(window, n)| !is_pair_sum(window, *n))
        .map(|(_, n)| n)
}

/// The first contiguous range of at least two numbers whose sum is `target`.
pub fn find_weakness_range(nums: &[u64], target: u64) -> Option<&[u64]> {
    // All numbers are non-negative, so the range sum only grows to the right.
    let (mut start, mut sum) = (0, 0u64);
    for (end, &n) in nums.iter().enumerate() {
        // Shrink until adding `n` stays within `target`, or nothing is left to drop.
        while start < end && sum.checked_add(n).map_or(true, |s| s > target) {
            sum -= nums[start];
            start += 1;
        }
        sum += n;
        // A single number equal to the target doesn't count.
        if sum == target && end > start {
            debug!("Found range [{}, {}] summing to {}.", start, end, target);
            return Some(&nums[start..=end]);
        }
    }

    None
}

/// Sum of the smallest and largest number in the weakness range.
pub fn find_weakness(nums: &[u64], target: u64) -> Option<u64> {
    let range = find_weakness_range(nums, target)?;
    let min = range.iter().min()?;
    let max = range.iter().max()?;
    Some(min + max)
}

pub fn read_num<R: BufRead>(reader: R) -> Result<Vec<u64>, Error> {
    let mut nums = Vec::new();
    for l in reader.lines() {
        let s = l.map_err(Error::IOError)?;
        let text = s.trim();
        if !text.is_empty() {
            nums.push(
                text.parse::<u64>()
                    .map_err(|_| Error::InvalidNumberText(s.clone()))?,
            );
        }
    }

    Ok(nums)
}
