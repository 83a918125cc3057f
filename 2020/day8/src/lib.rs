use std::{
    collections::HashSet,
    error,
    fmt::Display,
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidInstText(Vec<(usize, String)>), // (1-based index of instruction, source text)
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InvalidInstText(lines) => {
                write!(f, "Found {} invalid instruction(s):", lines.len())?;
                for (ind, text) in lines {
                    write!(f, " instruction #{}({})", ind, text)?;
                }
                Ok(())
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Boot code file, read from stdin if absent.
    pub input_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Acc(isize),
    Nop(isize),
    Jmp(isize),
}

impl Instruction {
    /// The instruction after exchanging `nop` and `jmp`, `acc` can't be exchanged.
    pub fn flipped(&self) -> Option<Self> {
        match *self {
            Instruction::Nop(n) => Some(Instruction::Jmp(n)),
            Instruction::Jmp(n) => Some(Instruction::Nop(n)),
            Instruction::Acc(_) => None,
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Acc(n) => write!(f, "acc {:+}", n),
            Instruction::Nop(n) => write!(f, "nop {:+}", n),
            Instruction::Jmp(n) => write!(f, "jmp {:+}", n),
        }
    }
}

/// One line of boot code as read, before the whole program is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLine {
    Valid(Instruction),
    Invalid(String),
}

impl From<&str> for SourceLine {
    fn from(value: &str) -> Self {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(nop|jmp|acc)\s+([+-]\d+)$").unwrap());

        PATTERN
            .captures(value.trim())
            .and_then(|caps| {
                let n = caps[2].parse::<isize>().ok()?;
                match &caps[1] {
                    "acc" => Some(Instruction::Acc(n)),
                    "nop" => Some(Instruction::Nop(n)),
                    "jmp" => Some(Instruction::Jmp(n)),
                    _ => None,
                }
            })
            .map_or_else(|| SourceLine::Invalid(value.to_string()), SourceLine::Valid)
    }
}

pub fn is_valid_program(lines: &[SourceLine]) -> bool {
    lines.iter().all(|l| matches!(l, SourceLine::Valid(_)))
}

/// Turn source lines into a program, rejecting it wholesale if any line is invalid.
pub fn validate(lines: Vec<SourceLine>) -> Result<Program, Error> {
    let mut code = Vec::with_capacity(lines.len());
    let mut invalid_lines = Vec::new();
    for (ind, line) in lines.into_iter().enumerate() {
        match line {
            SourceLine::Valid(inst) => code.push(inst),
            SourceLine::Invalid(text) => invalid_lines.push((ind + 1, text)),
        }
    }

    if invalid_lines.is_empty() {
        Ok(Program { code })
    } else {
        Err(Error::InvalidInstText(invalid_lines))
    }
}

/// Read-only source of instructions indexed by instruction pointer.
pub trait Code {
    fn len(&self) -> usize;
    fn get(&self, ind: usize) -> Option<Instruction>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    code: Vec<Instruction>,
}

impl Program {
    pub fn new(code: Vec<Instruction>) -> Self {
        Self { code }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.code
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// This program with the instruction at `ind` exchanged, `None` for `acc` or out of range.
    pub fn flipped_at(&self, ind: usize) -> Option<Flipped<'_>> {
        self.code
            .get(ind)
            .and_then(Instruction::flipped)
            .map(|inst| Flipped {
                program: self,
                flip_ind: ind,
                inst,
            })
    }
}

impl Code for Program {
    fn len(&self) -> usize {
        self.code.len()
    }

    fn get(&self, ind: usize) -> Option<Instruction> {
        self.code.get(ind).copied()
    }
}

pub struct Flipped<'a> {
    program: &'a Program,
    flip_ind: usize,
    inst: Instruction,
}

impl Flipped<'_> {
    pub fn flip_ind(&self) -> usize {
        self.flip_ind
    }

    pub fn flipped_inst(&self) -> Instruction {
        self.inst
    }
}

impl Code for Flipped<'_> {
    fn len(&self) -> usize {
        self.program.len()
    }

    fn get(&self, ind: usize) -> Option<Instruction> {
        if ind == self.flip_ind {
            Some(self.inst)
        } else {
            self.program.get(ind)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GCState {
    pub inst_ptr: usize,
    pub acc: isize,
}

impl GCState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Execute a single instruction, knows nothing about program bounds or loops.
pub fn step(inst: Instruction, state: GCState) -> GCState {
    match inst {
        // The accumulator is a machine register, it wraps around on overflow.
        Instruction::Acc(n) => GCState {
            inst_ptr: state.inst_ptr + 1,
            acc: state.acc.wrapping_add(n),
        },
        Instruction::Nop(_) => GCState {
            inst_ptr: state.inst_ptr + 1,
            ..state
        },
        // Jumping before the first instruction lands on it.
        Instruction::Jmp(offset) => GCState {
            inst_ptr: state.inst_ptr.saturating_add_signed(offset),
            ..state
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    Terminated,
    InfiniteLoop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt {
    pub state: GCState,
    pub reason: HaltReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue(GCState),
    Halt(Halt),
}

/// Single step transition of the game console.
pub trait Stepper {
    fn step(&mut self, inst: Instruction, state: GCState) -> Step;
}

pub struct Plain;

impl Stepper for Plain {
    fn step(&mut self, inst: Instruction, state: GCState) -> Step {
        Step::Continue(step(inst, state))
    }
}

/// Halts right before any instruction would be executed a second time.
pub struct LoopDetector<S> {
    inner: S,
    visited: HashSet<usize>,
}

impl<S: Stepper> LoopDetector<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            visited: HashSet::new(),
        }
    }

    pub fn visited(&self) -> &HashSet<usize> {
        &self.visited
    }
}

impl<S: Stepper> Stepper for LoopDetector<S> {
    fn step(&mut self, inst: Instruction, state: GCState) -> Step {
        if !self.visited.insert(state.inst_ptr) {
            return Step::Halt(Halt {
                state,
                reason: HaltReason::InfiniteLoop,
            });
        }

        self.inner.step(inst, state)
    }
}

/// Run `code` from `state` until the instruction pointer leaves it or `stepper` halts.
pub fn run<S: Stepper + ?Sized, C: Code + ?Sized>(
    stepper: &mut S,
    code: &C,
    mut state: GCState,
) -> Halt {
    loop {
        let Some(inst) = code.get(state.inst_ptr) else {
            return Halt {
                state,
                reason: HaltReason::Terminated,
            };
        };

        trace!("#{} {}, acc = {}", state.inst_ptr, inst, state.acc);
        match stepper.step(inst, state) {
            Step::Continue(next) => state = next,
            Step::Halt(halt) => return halt,
        }
    }
}

pub fn run_until_loop<C: Code + ?Sized>(code: &C) -> Halt {
    run(&mut LoopDetector::new(Plain), code, GCState::new())
}

pub fn is_infinite<C: Code + ?Sized>(code: &C) -> bool {
    run_until_loop(code).reason == HaltReason::InfiniteLoop
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fix {
    pub inst_ind: usize,
    pub original: Instruction,
    pub replacement: Instruction,
    pub state: GCState,
}

/// Find the single `nop`/`jmp` exchange that makes the looping program terminate.
///
/// Only instructions on the trajectory of the original run are tried, in the
/// order they are first executed. Expects a looping program (see `is_infinite`),
/// returns `None` once its trajectory closes the loop without any exchange helping.
pub fn repair(program: &Program) -> Option<Fix> {
    let mut tracer = LoopDetector::new(Plain);
    let mut state = GCState::new();
    loop {
        let inst = program.get(state.inst_ptr)?;
        match tracer.step(inst, state) {
            Step::Continue(next) => {
                if let Some(fix) = try_flip(program, state.inst_ptr) {
                    return Some(fix);
                }
                state = next;
            }
            Step::Halt(halt) => {
                debug!(
                    "No exchange on the {} instruction(s) of the loop fixes it, back at #{}.",
                    tracer.visited().len(),
                    halt.state.inst_ptr
                );
                return None;
            }
        }
    }
}

/// Like `repair`, but tries every `nop`/`jmp` in program order.
pub fn repair_by_scan(program: &Program) -> Option<Fix> {
    (0..program.len()).find_map(|ind| try_flip(program, ind))
}

fn try_flip(program: &Program, ind: usize) -> Option<Fix> {
    let candidate = program.flipped_at(ind)?;
    let halt = run_until_loop(&candidate);
    debug!(
        "Exchanged #{} to {}, halted at #{} ({:?}).",
        ind,
        candidate.flipped_inst(),
        halt.state.inst_ptr,
        halt.reason
    );

    (halt.reason == HaltReason::Terminated).then(|| Fix {
        inst_ind: ind,
        original: program.code[ind],
        replacement: candidate.flipped_inst(),
        state: halt.state,
    })
}

/// Terminal state of a run, printable for humans.
pub struct Report<'a, C: ?Sized> {
    code: &'a C,
    halt: &'a Halt,
}

impl<'a, C: Code + ?Sized> Report<'a, C> {
    pub fn new(code: &'a C, halt: &'a Halt) -> Self {
        Self { code, halt }
    }
}

impl<C: Code + ?Sized> Display for Report<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let GCState { inst_ptr, acc } = self.halt.state;
        match self.halt.reason {
            HaltReason::Terminated => write!(
                f,
                "SUCCESS, code run through to end, the accumulator is {}.",
                acc
            ),
            HaltReason::InfiniteLoop => {
                write!(f, "FAIL, infinite loop at line #{}", inst_ptr + 1)?;
                if let Some(inst) = self.code.get(inst_ptr) {
                    write!(f, "({})", inst)?;
                }
                write!(f, ", the accumulator is {}.", acc)
            }
        }
    }
}

/// Read every non-blank line as boot code, invalid lines are kept for validation.
pub fn read_source<R: BufRead>(reader: R) -> Result<Vec<SourceLine>, Error> {
    let mut lines = Vec::new();
    for l in reader.lines() {
        let s = l.map_err(Error::IOError)?;
        if !s.trim().is_empty() {
            lines.push(SourceLine::from(s.as_str()));
        }
    }

    Ok(lines)
}

pub fn read_code<R: BufRead>(reader: R) -> Result<Program, Error> {
    validate(read_source(reader)?)
}
