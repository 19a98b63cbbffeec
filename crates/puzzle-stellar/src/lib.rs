//! Stellar: a star/cloud placement puzzle lit by planets. A solved board has
//! exactly one STAR and one CLOUD per row/column, consistent with every
//! planet's illumination (spec.md §3).

pub mod board;
pub mod desc;
pub mod generator;
pub mod moves;
pub mod propagator;
pub mod search;
pub mod validator;

pub use board::{Board, Candidates, Cell, Content, ErrorFlags, Illumination};
pub use generator::generate;
pub use moves::execute_move;
pub use propagator::{propagate_to_fixed_point, solve, solve_sequential, Contradiction};
pub use search::has_unique_solution;
pub use validator::validate;
