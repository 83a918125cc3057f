use std::{
    collections::HashMap,
    error,
    fmt::Display,
    io::{self, BufRead},
    ops::RangeInclusive,
    path::PathBuf,
};

use clap::Parser;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    RepeatedPropInPassport(String), // Name of repeated property.
    InvalidPropText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::RepeatedPropInPassport(name) => {
                write!(f, "Found repeated property({}) in passport text.", name)
            }
            Error::InvalidPropText(s) => {
                write!(f, "Invalid property text({}), expect name:value.", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Batch file of passports, read from stdin if absent.
    pub input_path: Option<PathBuf>,
}

pub const REQUIRED_PROP_NAMES: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

#[derive(Debug, Default)]
pub struct Passport {
    props: HashMap<String, String>,
}

impl Passport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_prop(&self, p_name: &str) -> bool {
        self.props.contains_key(p_name)
    }

    pub fn prop(&self, p_name: &str) -> Option<&str> {
        self.props.get(p_name).map(String::as_str)
    }

    /// Has every required property, `cid` is optional.
    pub fn is_complete(&self) -> bool {
        REQUIRED_PROP_NAMES
            .iter()
            .all(|p_name| self.contains_prop(p_name))
    }

    pub fn is_valid(&self, validators: &[&dyn PropValidator]) -> bool {
        validators.iter().all(|vad| {
            let valid = self.prop(vad.name()).is_some_and(|s| vad.validate(s));
            if !valid {
                trace!("Property {} of passport {:?} is invalid.", vad.name(), self.props);
            }
            valid
        })
    }

    fn add_props(&mut self, text: &str) -> Result<(), Error> {
        static PROP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+):(\S+)$").unwrap());

        for field in text.split_whitespace() {
            let caps = PROP_PATTERN
                .captures(field)
                .ok_or_else(|| Error::InvalidPropText(field.to_string()))?;
            if self.contains_prop(&caps[1]) {
                return Err(Error::RepeatedPropInPassport(caps[1].to_string()));
            }
            self.props.insert(caps[1].to_string(), caps[2].to_string());
        }

        Ok(())
    }
}

pub trait PropValidator {
    fn name(&self) -> &'static str;
    fn validate(&self, value: &str) -> bool;
}

fn validate_year(value: &str, range: RangeInclusive<usize>) -> bool {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

    PATTERN.is_match(value) && value.parse::<usize>().is_ok_and(|y| range.contains(&y))
}

pub struct BirthYearVad;

impl PropValidator for BirthYearVad {
    fn name(&self) -> &'static str {
        "byr"
    }

    fn validate(&self, value: &str) -> bool {
        validate_year(value, 1920..=2002)
    }
}

pub struct IssueYearVad;

impl PropValidator for IssueYearVad {
    fn name(&self) -> &'static str {
        "iyr"
    }

    fn validate(&self, value: &str) -> bool {
        validate_year(value, 2010..=2020)
    }
}

pub struct ExpirYearVad;

impl PropValidator for ExpirYearVad {
    fn name(&self) -> &'static str {
        "eyr"
    }

    fn validate(&self, value: &str) -> bool {
        validate_year(value, 2020..=2030)
    }
}

pub struct HeightVad;

impl PropValidator for HeightVad {
    fn name(&self) -> &'static str {
        "hgt"
    }

    fn validate(&self, value: &str) -> bool {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)(cm|in)$").unwrap());

        PATTERN.captures(value).is_some_and(|caps| {
            let range = if &caps[2] == "cm" { 150..=193 } else { 59..=76 };
            caps[1].parse::<usize>().is_ok_and(|h| range.contains(&h))
        })
    }
}

pub struct HairColorVad;

impl PropValidator for HairColorVad {
    fn name(&self) -> &'static str {
        "hcl"
    }

    fn validate(&self, value: &str) -> bool {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-f]{6}$").unwrap());

        PATTERN.is_match(value)
    }
}

pub struct EyeColorVad;

impl PropValidator for EyeColorVad {
    fn name(&self) -> &'static str {
        "ecl"
    }

    fn validate(&self, value: &str) -> bool {
        const COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

        COLORS.contains(&value)
    }
}

pub struct PassportIDVad;

impl PropValidator for PassportIDVad {
    fn name(&self) -> &'static str {
        "pid"
    }

    fn validate(&self, value: &str) -> bool {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{9}$").unwrap());

        PATTERN.is_match(value)
    }
}

pub fn all_validators() -> [&'static dyn PropValidator; 7] {
    [
        &BirthYearVad,
        &IssueYearVad,
        &ExpirYearVad,
        &HeightVad,
        &HairColorVad,
        &EyeColorVad,
        &PassportIDVad,
    ]
}

pub fn read_pp<R: BufRead>(reader: R) -> Result<Vec<Passport>, Error> {
    common::groups(common::lines(reader))
        .map(|group| {
            let mut pp = Passport::new();
            for line in group.map_err(Error::IOError)? {
                pp.add_props(&line)?;
            }
            Ok(pp)
        })
        .collect()
}
