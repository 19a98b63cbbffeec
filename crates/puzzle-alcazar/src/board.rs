//! Board representation for Alcazar (spec.md §3).
//!
//! Shares its edge layout with Walls (`(w+1)*h` vertical, `w*(h+1)`
//! horizontal edges addressed through `puzzle_core::edge_id`), but the edge
//! alphabet is `{NONE, WALL, PATH}` instead of `{UNKNOWN, WALL, LINE}` and
//! carries a `DRAG` flag natively rather than as a Walls-only supplement.

use bitflags::bitflags;
use puzzle_core::{edge_id, horizontal_edge_count, vertical_edge_count, Geom, Orientation, Point, Size};

/// The committed state of one edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeState {
    None,
    Wall,
    Path,
}

bitflags! {
    /// Transient/clue flags, orthogonal to [`EdgeState`].
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct EdgeFlags: u8 {
        const FIXED = 0b001;
        const ERROR = 0b010;
        const DRAG = 0b100;
    }
}

/// An Alcazar board: same edge counts as Walls, different alphabet.
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
            states: vec![EdgeState::None; total],
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

    /// The four incident edge ids of cell `p`, `[up, right, down, left]`.
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

    /// `true` if `p` is one of the grid's four corner cells.
    pub fn is_corner_cell(&self, p: Point) -> bool {
        let (w, h) = (self.size.w, self.size.h);
        (p.x == 0 || p.x == w - 1) && (p.y == 0 || p.y == h - 1)
    }

    /// The two border edges of a corner cell (the ones the corner-cell rule
    /// forbids from being simultaneously open/PATH).
    pub fn corner_border_edges(&self, p: Point) -> [usize; 2] {
        let (w, h) = (self.size.w, self.size.h);
        let horiz = if p.y == 0 {
            edge_id(w, h, p.x, 0, Orientation::Horizontal)
        } else {
            edge_id(w, h, p.x, h, Orientation::Horizontal)
        };
        let vert = if p.x == 0 {
            edge_id(w, h, 0, p.y, Orientation::Vertical)
        } else {
            edge_id(w, h, w, p.y, Orientation::Vertical)
        };
        [horiz, vert]
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
