//! Shared building blocks for the grid logic puzzle family: geometry, a
//! disjoint-set forest, bridge detection, a seedable RNG, a run-length
//! description codec, and randomized Hamiltonian path construction.
//!
//! Three puzzle variants (Walls, Stellar, Alcazar) each get their own crate
//! built on top of this one; see `puzzle-walls`, `puzzle-stellar`, and
//! `puzzle-alcazar`.

pub mod dsf;
pub mod error;
pub mod geom;
pub mod loop_finder;
pub mod path_builder;
pub mod rle;
pub mod rng;

pub use dsf::Dsf;
pub use error::{DescError, GeomError, MoveError, ParamError};
pub use geom::{edge_id, horizontal_edge_count, vertical_edge_count, Geom, Move, Orientation, Point, Size, Table};
pub use loop_finder::LoopFinder;
pub use path_builder::generate_hamiltonian_path;
pub use rng::PuzzleRng;

/// The four difficulty tiers named across the three variants (not every
/// variant uses every tier: Alcazar has no TRICKY, Stellar only has NORMAL
/// and HARD — see each variant's `Difficulty` re-export for the subset it
/// actually accepts).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Difficulty {
    Easy,
    Normal,
    Tricky,
    Hard,
}

impl Difficulty {
    pub fn from_char(c: char) -> Option<Difficulty> {
        match c {
            'e' => Some(Difficulty::Easy),
            'n' => Some(Difficulty::Normal),
            't' => Some(Difficulty::Tricky),
            'h' => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Difficulty::Easy => 'e',
            Difficulty::Normal => 'n',
            Difficulty::Tricky => 't',
            Difficulty::Hard => 'h',
        }
    }
}

/// The three-way result every validator (spec.md §4.3) returns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Solved,
    Ambiguous,
    Invalid,
}
