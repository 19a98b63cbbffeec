//! Board representation for Walls (spec.md §3).
//!
//! Grounded on `core/src/board.rs`'s `Board { size, hint, side, edge_v,
//! edge_h }` shape, generalized: the teacher keeps `Option<Edge>` per edge
//! plus a separate fixed-clue table; we follow spec.md §9's design note and
//! split each edge into a committed `EdgeState` tagged variant and an
//! orthogonal `EdgeFlags` bitflag set (FIXED / ERROR / DRAG) instead of
//! packing everything into one overlapping bitmask the way the original C
//! source does.

use bitflags::bitflags;
use puzzle_core::{edge_id, horizontal_edge_count, vertical_edge_count, Geom, Orientation, Point, Size};

/// The committed state of one edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeState {
    Unknown,
    Wall,
    Line,
}

bitflags! {
    /// Transient/clue flags, orthogonal to [`EdgeState`].
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct EdgeFlags: u8 {
        /// A clue given at puzzle creation; immutable for the player.
        const FIXED = 0b001;
        /// Set by the validator to flag an offending edge.
        const ERROR = 0b010;
        /// Transient marker for a multi-edge mouse drag in progress
        /// (spec.md `original_source/` supplement, §7 of SPEC_FULL.md);
        /// never consulted by the solver/validator.
        const DRAG = 0b100;
    }
}

/// A Walls board: `w`x`h` cells, `w*(h+1)` horizontal edges, `(w+1)*h`
/// vertical edges.
#[derive(Clone, Debug)]
pub struct Board {
    size: Size,
    states: Vec<EdgeState>,
    flags: Vec<EdgeFlags>,
}

impl Board {
    pub fn new(size: Size) -> Board {
        assert!(size.w > 0 && size.h > 0);
        let total = horizontal_edge_count(size.w, size.h) + vertical_edge_count(size.w, size.h);
        Board {
            size,
            states: vec![EdgeState::Unknown; total],
            flags: vec![EdgeFlags::empty(); total],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.w
    }

    pub fn height(&self) -> i32 {
        self.size.h
    }

    fn id(&self, x: i32, y: i32, o: Orientation) -> usize {
        edge_id(self.size.w, self.size.h, x, y, o)
    }

    pub fn total_edges(&self) -> usize {
        self.states.len()
    }

    pub fn state(&self, x: i32, y: i32, o: Orientation) -> EdgeState {
        self.states[self.id(x, y, o)]
    }

    pub fn flags(&self, x: i32, y: i32, o: Orientation) -> EdgeFlags {
        self.flags[self.id(x, y, o)]
    }

    pub fn state_by_id(&self, id: usize) -> EdgeState {
        self.states[id]
    }

    pub fn flags_by_id(&self, id: usize) -> EdgeFlags {
        self.flags[id]
    }

    /// Set an edge's committed state, honoring FIXED (a move that would
    /// mutate a fixed edge is silently rejected, spec.md §7). Returns
    /// `true` if the state actually changed.
    pub fn set_state(&mut self, x: i32, y: i32, o: Orientation, state: EdgeState) -> bool {
        let id = self.id(x, y, o);
        self.set_state_by_id(id, state)
    }

    pub fn set_state_by_id(&mut self, id: usize, state: EdgeState) -> bool {
        if self.flags[id].contains(EdgeFlags::FIXED) {
            return false;
        }
        if self.states[id] == state {
            return false;
        }
        self.states[id] = state;
        true
    }

    pub fn set_fixed(&mut self, x: i32, y: i32, o: Orientation, state: EdgeState) {
        let id = self.id(x, y, o);
        self.set_fixed_by_id(id, state);
    }

    pub fn set_fixed_by_id(&mut self, id: usize, state: EdgeState) {
        self.states[id] = state;
        self.flags[id].insert(EdgeFlags::FIXED);
    }

    pub fn clear_errors(&mut self) {
        for f in &mut self.flags {
            f.remove(EdgeFlags::ERROR);
        }
    }

    pub fn mark_error_by_id(&mut self, id: usize) {
        self.flags[id].insert(EdgeFlags::ERROR);
    }

    pub fn is_fixed_by_id(&self, id: usize) -> bool {
        self.flags[id].contains(EdgeFlags::FIXED)
    }

    /// The four incident edge ids of cell `p`, in a fixed order
    /// `[up, right, down, left]`. Border cells still get four ids — edges
    /// on the outer border are ordinary entries in the same arrays.
    pub fn incident_edges(&self, p: Point) -> [usize; 4] {
        let (w, h) = (self.size.w, self.size.h);
        [
            edge_id(w, h, p.x, p.y, Orientation::Horizontal),
            edge_id(w, h, p.x + 1, p.y, Orientation::Vertical),
            edge_id(w, h, p.x, p.y + 1, Orientation::Horizontal),
            edge_id(w, h, p.x, p.y, Orientation::Vertical),
        ]
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        let (w, h) = (self.size.w, self.size.h);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    pub fn point_to_index(&self, p: Point) -> i32 {
        p.y * self.size.w + p.x
    }

    /// `true` if edge `id` lies on the outer border of the grid.
    pub fn is_border_edge(&self, id: usize) -> bool {
        let (w, h) = (self.size.w, self.size.h);
        let h_total = horizontal_edge_count(w, h);
        if id < h_total {
            let y = id as i32 / w;
            y == 0 || y == h
        } else {
            let local = id - h_total;
            let x = local as i32 % (w + 1);
            x == 0 || x == w
        }
    }

    pub fn all_edge_ids(&self) -> std::ops::Range<usize> {
        0..self.states.len()
    }
}

impl Geom for Board {
    fn size(&self) -> Size {
        self.size
    }
}
