use std::{
    error,
    fmt::Display,
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;
use common::Tagged;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidBoardPassStr(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InvalidBoardPassStr(s) => write!(f, "Invalid board pass string({})", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Boarding pass list file, read from stdin if absent.
    pub input_path: Option<PathBuf>,
}

pub enum SeatTag {}
pub type SeatId = Tagged<SeatTag, usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPass {
    row_ind: usize,
    col_ind: usize,
}

impl TryFrom<&str> for BoardPass {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([FB]{7})([LR]{3})$").unwrap());

        // The pattern leaves only the two digit characters, `c1` is bit 1.
        fn bin_from_str(s: &str, c1: char) -> usize {
            s.chars().fold(0, |n, c| (n << 1) | usize::from(c == c1))
        }

        PATTERN
            .captures(value.trim())
            .map(|caps| BoardPass {
                row_ind: bin_from_str(&caps[1], 'B'),
                col_ind: bin_from_str(&caps[2], 'R'),
            })
            .ok_or_else(|| Error::InvalidBoardPassStr(value.to_string()))
    }
}

impl BoardPass {
    pub fn row(&self) -> usize {
        self.row_ind
    }

    pub fn col(&self) -> usize {
        self.col_ind
    }

    pub fn id(&self) -> SeatId {
        SeatId::new(self.row_ind * 8 + self.col_ind)
    }
}

/// The id missing from the list whose both neighbours are on it.
pub fn find_my_seat(ids: &[SeatId]) -> Option<SeatId> {
    let mut sorted_ids = ids.iter().map(|id| **id).collect::<Vec<_>>();
    sorted_ids.sort_unstable();
    sorted_ids.dedup();
    debug!(
        "Search the gap in {} seat id(s) from {:?} to {:?}.",
        sorted_ids.len(),
        sorted_ids.first(),
        sorted_ids.last()
    );

    sorted_ids
        .windows(2)
        .find(|w| w[0] + 2 == w[1])
        .map(|w| SeatId::new(w[0] + 1))
}

pub fn read_pass<R: BufRead>(reader: R) -> Result<Vec<BoardPass>, Error> {
    let mut passes = Vec::new();
    for l in reader.lines() {
        let s = l.map_err(Error::IOError)?;
        if !s.trim().is_empty() {
            passes.push(BoardPass::try_from(s.as_str())?);
        }
    }

    Ok(passes)
}
