use std::{
    collections::{HashMap, HashSet, VecDeque},
    error,
    fmt::Display,
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidBagRuleText(String),
    RepeatedBagRule(String),
    CyclicContainment(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InvalidBagRuleText(s) => write!(f, "Invalid bag rule({})", s),
            Error::RepeatedBagRule(s) => write!(f, "Found more than one rule for {} bags", s),
            Error::CyclicContainment(s) => {
                write!(f, "Found {} bags containing themselves, count is infinite", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Bag rules file, read from stdin if absent.
    pub input_path: Option<PathBuf>,
}

pub const MY_BAG: &str = "shiny gold";

#[derive(Debug, Default)]
pub struct BagRules {
    bag_qualifiers: HashMap<String, usize>, // <bag qualifier, bag index>
    names: Vec<String>,
    has_rule: Vec<bool>,
    contain_rules: Vec<Vec<(usize, usize)>>, // vec[index of bag contains] = list of (index of bag be contained, count of contained bag).
    contained_rules: Vec<Vec<(usize, usize)>>, // vec[index of bag be contained] = list of (index of bag contains, count of contained bag).
}

impl BagRules {
    pub fn bag_kinds_n(&self) -> usize {
        self.names.len()
    }

    /// Count of bag kinds which can eventually contain at least one given bag.
    pub fn container_kinds_n(&self, qualifier: &str) -> Option<usize> {
        // BFS for bag nodes connected with given bag node in contained graph(self.contained_rules).
        self.bag_qualifiers.get(qualifier).map(|&contained_ind| {
            let mut contain_inds = HashSet::new();
            let mut search_inds = VecDeque::from([contained_ind]);
            while let Some(ind) = search_inds.pop_front() {
                for &(contain_ind, _) in &self.contained_rules[ind] {
                    if contain_ind != contained_ind && contain_inds.insert(contain_ind) {
                        search_inds.push_back(contain_ind);
                    }
                }
            }

            debug!(
                "{} bags can be in {:?}.",
                qualifier,
                contain_inds.iter().map(|&i| &self.names[i]).collect::<Vec<_>>()
            );
            contain_inds.len()
        })
    }

    /// Count of bags inside(directly or not) one given bag.
    pub fn contained_bags_n(&self, qualifier: &str) -> Option<Result<usize, Error>> {
        self.bag_qualifiers.get(qualifier).map(|&ind| {
            let mut counts = vec![None; self.names.len()];
            let mut on_path = vec![false; self.names.len()];
            self.count_inside(ind, &mut counts, &mut on_path)
        })
    }

    fn count_inside(
        &self,
        ind: usize,
        counts: &mut [Option<usize>],
        on_path: &mut [bool],
    ) -> Result<usize, Error> {
        if let Some(n) = counts[ind] {
            return Ok(n);
        }
        if on_path[ind] {
            return Err(Error::CyclicContainment(self.names[ind].clone()));
        }

        on_path[ind] = true;
        let mut n = 0;
        for &(inner_ind, count) in &self.contain_rules[ind] {
            n += count * (1 + self.count_inside(inner_ind, counts, on_path)?);
        }
        on_path[ind] = false;
        counts[ind] = Some(n);

        Ok(n)
    }

    fn add_rule(&mut self, text: &str) -> Result<(), Error> {
        static RULE_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(.+?)\s+bags\s+contain\s+(.+)\.$").unwrap());
        static CONTAINED_BAG_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d+)\s+(.+?)\s+bags?$").unwrap());

        let invalid = || Error::InvalidBagRuleText(text.to_string());
        let caps = RULE_PATTERN.captures(text.trim()).ok_or_else(invalid)?;
        let contain_ind = self.get_or_add_bag(&caps[1]);
        if std::mem::replace(&mut self.has_rule[contain_ind], true) {
            return Err(Error::RepeatedBagRule(caps[1].to_string()));
        }

        if &caps[2] == "no other bags" {
            return Ok(());
        }

        for item in caps[2].split(',') {
            let item_caps = CONTAINED_BAG_PATTERN
                .captures(item.trim())
                .ok_or_else(invalid)?;
            let count = item_caps[1].parse::<usize>().map_err(|_| invalid())?;
            let contained_ind = self.get_or_add_bag(&item_caps[2]);
            self.contain_rules[contain_ind].push((contained_ind, count));
            self.contained_rules[contained_ind].push((contain_ind, count));
        }

        Ok(())
    }

    fn get_or_add_bag(&mut self, qualifier: &str) -> usize {
        *self
            .bag_qualifiers
            .entry(qualifier.to_string())
            .or_insert_with(|| {
                let ind = self.names.len();
                self.names.push(qualifier.to_string());
                self.has_rule.push(false);
                self.contain_rules.push(Vec::new());
                self.contained_rules.push(Vec::new());

                ind
            })
    }
}

pub fn read_br<R: BufRead>(reader: R) -> Result<BagRules, Error> {
    let mut rules = BagRules::default();
    for l in reader.lines() {
        let s = l.map_err(Error::IOError)?;
        if !s.trim().is_empty() {
            rules.add_rule(&s)?;
        }
    }

    Ok(rules)
}
