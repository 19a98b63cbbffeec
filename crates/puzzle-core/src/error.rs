//! Shared error vocabulary (spec.md §7), grounded on the teacher's
//! hand-rolled `ParsePuzzleError`/`LogicError` enums but expressed with
//! `thiserror`, matching every error-enum-shaped crate in the retrieval pack.

use thiserror::Error;

/// A malformed grid size or out-of-range coordinate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    #[error("width and height must each be at least 3, got {w}x{h}")]
    TooSmall { w: i32, h: i32 },
    #[error("point ({x},{y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },
}

/// A malformed run-length puzzle description (spec.md §6).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DescError {
    #[error("unexpected character '{0}' in puzzle description")]
    InvalidCharacter(char),
    #[error("decoded description has length {actual}, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("empty puzzle description")]
    Empty,
}

/// A malformed move string (spec.md §4.7).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("unknown move opcode '{0}'")]
    UnknownOpcode(char),
    #[error("non-numeric move index in '{0}'")]
    NonNumericIndex(char),
    #[error("move index {0} is out of range")]
    IndexOutOfRange(usize),
    #[error("move targets a fixed (clue) edge or cell")]
    TargetIsFixed,
}

/// A bad difficulty or size in a parameter string (spec.md §6).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("malformed parameter string '{0}'")]
    Malformed(String),
    #[error("unknown difficulty character '{0}'")]
    UnknownDifficulty(char),
    #[error(transparent)]
    Geom(#[from] GeomError),
}
