//! Alcazar: a path-through-walled-grid puzzle. A solved board has exactly
//! two PATH and two WALL edges at every cell (spec.md §3).

pub mod board;
pub mod desc;
pub mod generator;
pub mod moves;
pub mod propagator;
pub mod validator;

pub use board::{Board, EdgeFlags, EdgeState};
pub use generator::generate;
pub use moves::execute_move;
pub use propagator::{hypothetical_probe, propagate_single_cell, solve_to_quiescence, Contradiction};
pub use validator::validate;
