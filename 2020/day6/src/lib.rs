use std::{
    collections::HashMap,
    error,
    fmt::Display,
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidQuestionChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InvalidQuestionChar(c) => write!(
                f,
                "Invalid character for question code: {}, expect lowercase of ascii letters",
                c
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Customs declaration answers file, read from stdin if absent.
    pub input_path: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct GroupAnswer {
    que_app_counts: HashMap<char, usize>, // <question, count of members answered yes>
    mem_count: usize,
}

impl GroupAnswer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member_n(&self) -> usize {
        self.mem_count
    }

    /// Questions anyone in the group answered.
    pub fn any_app_n(&self) -> usize {
        self.que_app_counts.len()
    }

    /// Questions everyone in the group answered.
    pub fn all_app_n(&self) -> usize {
        self.que_app_counts
            .values()
            .filter(|n| **n == self.mem_count)
            .count()
    }

    fn add_answer(&mut self, text: &str) -> Result<(), Error> {
        let mut answered = text.trim().chars().collect::<Vec<_>>();
        answered.sort_unstable();
        // A question repeated in one line is still one member's answer.
        answered.dedup();
        for q in answered {
            if q.is_ascii_lowercase() {
                *self.que_app_counts.entry(q).or_insert(0) += 1;
            } else {
                return Err(Error::InvalidQuestionChar(q));
            }
        }

        self.mem_count += 1;
        Ok(())
    }
}

pub fn read_ga<R: BufRead>(reader: R) -> Result<Vec<GroupAnswer>, Error> {
    common::groups(common::lines(reader))
        .map(|group| {
            let mut ga = GroupAnswer::new();
            for line in group.map_err(Error::IOError)? {
                ga.add_answer(&line)?;
            }
            Ok(ga)
        })
        .collect()
}
