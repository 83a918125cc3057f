use std::{
    error,
    fmt::Display,
    io::{self, BufRead},
    ops::AddAssign,
    path::PathBuf,
};

use clap::Parser;
use log::debug;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InconsistentRow(usize, usize), // (column number of the current row, column number of earlier row)
    InvalidTileCharacter(char),
    EmptyMap,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InconsistentRow(this_col_n, expect_col_n) => write!(
                f,
                "Inconsistent column number({}) found, expect {} as earlier rows did.",
                this_col_n, expect_col_n
            ),
            Error::InvalidTileCharacter(c) => {
                write!(f, "Found invalid character({}) for tile in map.", c)
            }
            Error::EmptyMap => write!(f, "Given map has no rows."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Map file, read from stdin if absent.
    pub input_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    Open,
    Tree,
}

// Toboggan only goes right and down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slope {
    right: usize,
    down: usize,
}

impl Slope {
    pub fn new(right: usize, down: usize) -> Self {
        Self { right, down }
    }
}

pub const PART1_SLOPE: Slope = Slope { right: 3, down: 1 };

pub const PART2_SLOPES: [Slope; 5] = [
    Slope { right: 1, down: 1 },
    Slope { right: 3, down: 1 },
    Slope { right: 5, down: 1 },
    Slope { right: 7, down: 1 },
    Slope { right: 1, down: 2 },
];

#[derive(Debug, Clone, Default)]
pub struct Position {
    r: usize,
    c: usize,
}

impl AddAssign<&Slope> for Position {
    fn add_assign(&mut self, rhs: &Slope) {
        self.r += rhs.down;
        self.c += rhs.right;
    }
}

pub struct Map {
    tiles: Vec<TileType>,
    row_n: usize,
    col_n: usize,
}

impl Map {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    /// Tile at given position, the map repeats to the right, `None` below the last row.
    pub fn tile(&self, pos: &Position) -> Option<TileType> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get(ind)).copied()
    }

    /// Count trees met from the top left corner to the bottom, moving before each look.
    pub fn count_trees(&self, slope: &Slope) -> usize {
        // A slope that never goes down would never leave the map.
        if slope.down == 0 {
            return 0;
        }

        let mut pos = Position::default();
        let mut tree_n = 0;
        loop {
            pos += slope;
            match self.tile(&pos) {
                Some(TileType::Tree) => tree_n += 1,
                Some(TileType::Open) => (),
                None => break,
            }
        }

        debug!("Slope {:?} meets {} tree(s).", slope, tree_n);
        tree_n
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r >= self.row_n {
            None
        } else {
            Some(pos.r * self.col_n + pos.c % self.col_n)
        }
    }
}

struct MapBuilder {
    tiles: Vec<TileType>,
    col_n: Option<usize>,
    row_n: usize,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            col_n: None,
            row_n: 0,
        }
    }

    pub fn push_row(&mut self, row_str: &str) -> Result<(), Error> {
        let this_col_n = row_str.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(this_col_n, expect_col_n));
        }

        for c in row_str.chars() {
            let tt = match c {
                '.' => TileType::Open,
                '#' => TileType::Tree,
                other => return Err(Error::InvalidTileCharacter(other)),
            };
            self.tiles.push(tt);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Map, Error> {
        match self.col_n {
            Some(col_n) if col_n > 0 => Ok(Map {
                tiles: self.tiles,
                row_n: self.row_n,
                col_n,
            }),
            _ => Err(Error::EmptyMap),
        }
    }
}

pub fn read_map<R: BufRead>(reader: R) -> Result<Map, Error> {
    let mut builder = MapBuilder::new();
    for line in reader.lines() {
        let s = line.map_err(Error::IOError)?;
        let row = s.trim();
        if !row.is_empty() {
            builder.push_row(row)?;
        }
    }

    builder.build()
}
