use std::{
    error,
    fmt::Display,
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;
use log::trace;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidInputStr(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InvalidInputStr(s) => write!(
                f,
                "Invalid string({}) found in input, expect unsigned integers.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Expense report file, read from stdin if absent.
    pub input_path: Option<PathBuf>,
}

pub const EXPECT_SUM: usize = 2020;

/// Find `count` entries(at different positions) of `sorted_ints` whose sum is `sum`.
pub fn find_ints_of_sum(sorted_ints: &[usize], sum: usize, count: usize) -> Option<Vec<usize>> {
    match count {
        0 => (sum == 0).then(Vec::new),
        1 => sorted_ints.binary_search(&sum).ok().map(|_| vec![sum]),
        _ => sorted_ints.iter().enumerate().find_map(|(ind, &n)| {
            // Search only the rest, so no entry is used twice.
            let rest_sum = sum.checked_sub(n)?;
            trace!("Try {} with {} more entries summing to {}.", n, count - 1, rest_sum);
            find_ints_of_sum(&sorted_ints[(ind + 1)..], rest_sum, count - 1).map(|mut ns| {
                ns.insert(0, n);
                ns
            })
        }),
    }
}

pub fn read_ints<R: BufRead>(reader: R) -> Result<Vec<usize>, Error> {
    reader
        .lines()
        .filter(|l| l.as_ref().map_or(true, |s| !s.trim().is_empty()))
        .map(|l| {
            l.map_err(Error::IOError).and_then(|s| {
                s.trim()
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidInputStr(s.clone()))
            })
        })
        .collect::<Result<Vec<_>, Error>>()
}
