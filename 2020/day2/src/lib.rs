use std::{
    error,
    fmt::Display,
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidPassword(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InvalidPassword(s) => write!(f, "Invalid password: {}", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Password database file, read from stdin if absent.
    pub input_path: Option<PathBuf>,
}

/// One line of the database, the policy numbers and letter with the password they guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEntry {
    pub first: usize,
    pub second: usize,
    pub letter: char,
    pub password: String,
}

impl TryFrom<&str> for PasswordEntry {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d+)-(\d+)\s+(\S):\s*(\S+)$").unwrap());

        let invalid = || Error::InvalidPassword(value.to_string());
        let caps = PATTERN.captures(value.trim()).ok_or_else(invalid)?;
        Ok(PasswordEntry {
            first: caps[1].parse::<usize>().map_err(|_| invalid())?,
            second: caps[2].parse::<usize>().map_err(|_| invalid())?,
            letter: caps[3].chars().next().ok_or_else(invalid)?,
            password: caps[4].to_string(),
        })
    }
}

pub trait Policy {
    fn check(&self, entry: &PasswordEntry) -> bool;
}

/// The letter appears between `first` and `second` times(inclusive).
pub struct SledRentalPolicy;

impl Policy for SledRentalPolicy {
    fn check(&self, entry: &PasswordEntry) -> bool {
        let n = entry.password.chars().filter(|c| *c == entry.letter).count();
        (entry.first..=entry.second).contains(&n)
    }
}

/// Exactly one of the 1-based positions `first` and `second` holds the letter.
pub struct TobogganPolicy;

impl Policy for TobogganPolicy {
    fn check(&self, entry: &PasswordEntry) -> bool {
        fn is_at(s: &str, pos: usize, target_c: char) -> bool {
            pos.checked_sub(1)
                .and_then(|ind| s.chars().nth(ind))
                .is_some_and(|c| c == target_c)
        }

        is_at(&entry.password, entry.first, entry.letter)
            ^ is_at(&entry.password, entry.second, entry.letter)
    }
}

pub fn count_valid<P: Policy + ?Sized>(policy: &P, entries: &[PasswordEntry]) -> usize {
    entries
        .iter()
        .filter(|e| {
            let valid = policy.check(e);
            trace!("{:?} is valid: {}", e, valid);
            valid
        })
        .count()
}

pub fn read_pws<R: BufRead>(reader: R) -> Result<Vec<PasswordEntry>, Error> {
    let mut entries = Vec::new();
    for l in reader.lines() {
        let s = l.map_err(Error::IOError)?;
        if !s.trim().is_empty() {
            entries.push(PasswordEntry::try_from(s.as_str())?);
        }
    }

    Ok(entries)
}
