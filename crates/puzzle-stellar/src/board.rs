//! Board representation for Stellar (spec.md §3).
//!
//! Unlike Walls/Alcazar's edge-addressed boards, Stellar is cell-addressed:
//! every cell holds either a pencil-mark candidate set (`GUESS`) or a single
//! committed value, one of which is `PLANET` carrying an illumination.
//! `Illumination`'s nine variants are carried over verbatim from
//! `original_source/Unfinished/stellar.c` (SPEC_FULL.md §7): spec.md §4.6.3
//! only says "9 legal states" without listing them.

use bitflags::bitflags;
use puzzle_core::{Point, Size};

bitflags! {
    /// Pencil-mark candidates for an undetermined cell.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct Candidates: u8 {
        const STAR = 0b001;
        const CLOUD = 0b010;
        const CROSS = 0b100;
    }
}

bitflags! {
    /// Per-cell validator error flags (spec.md §3 "Error state (Stellar)").
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct ErrorFlags: u8 {
        const STAR = 0b00_0001;
        const CLOUD = 0b00_0010;
        const LEFT = 0b00_0100;
        const RIGHT = 0b00_1000;
        const TOP = 0b01_0000;
        const BOTTOM = 0b10_0000;
    }
}

/// A planet's illumination: fully dark, one of four half-lit sides, or one
/// of four three-quarter-lit adjacent-side combinations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Illumination {
    Dark,
    Left,
    Right,
    Top,
    Bottom,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

impl Illumination {
    pub const ALL_NINE: [Illumination; 9] = [
        Illumination::Dark,
        Illumination::Left,
        Illumination::Right,
        Illumination::Top,
        Illumination::Bottom,
        Illumination::LeftTop,
        Illumination::LeftBottom,
        Illumination::RightTop,
        Illumination::RightBottom,
    ];

    pub fn left(self) -> bool {
        matches!(self, Illumination::Left | Illumination::LeftTop | Illumination::LeftBottom)
    }

    pub fn right(self) -> bool {
        matches!(self, Illumination::Right | Illumination::RightTop | Illumination::RightBottom)
    }

    pub fn top(self) -> bool {
        matches!(self, Illumination::Top | Illumination::LeftTop | Illumination::RightTop)
    }

    pub fn bottom(self) -> bool {
        matches!(self, Illumination::Bottom | Illumination::LeftBottom | Illumination::RightBottom)
    }
}

/// A committed cell value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Content {
    Empty,
    Star,
    Cloud,
    Cross,
    Planet(Illumination),
}

/// A single cell: either a live candidate set, or a committed value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Guess(Candidates),
    Committed(Content),
}

impl Cell {
    pub fn is_committed(&self, content: Content) -> bool {
        matches!(self, Cell::Committed(c) if *c == content)
    }
}

/// A square `n`x`n` Stellar board.
#[derive(Clone, Debug)]
pub struct Board {
    size: Size,
    cells: Vec<Cell>,
    errors: Vec<ErrorFlags>,
}

impl Board {
    pub fn new(size: Size) -> Board {
        assert!(size.w > 0 && size.h > 0);
        let total = (size.w * size.h) as usize;
        Board {
            size,
            cells: vec![Cell::Guess(Candidates::all()); total],
            errors: vec![ErrorFlags::empty(); total],
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

    fn index(&self, p: Point) -> usize {
        (p.y * self.size.w + p.x) as usize
    }

    pub fn index_to_point(&self, i: usize) -> Point {
        let w = self.size.w;
        Point::new(i as i32 % w, i as i32 / w)
    }

    pub fn cell(&self, p: Point) -> Cell {
        self.cells[self.index(p)]
    }

    pub fn cell_by_index(&self, i: usize) -> Cell {
        self.cells[i]
    }

    pub fn set_cell(&mut self, p: Point, cell: Cell) {
        let i = self.index(p);
        self.cells[i] = cell;
    }

    pub fn set_cell_by_index(&mut self, i: usize, cell: Cell) {
        self.cells[i] = cell;
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn errors(&self, p: Point) -> ErrorFlags {
        self.errors[self.index(p)]
    }

    pub fn clear_errors(&mut self) {
        for e in &mut self.errors {
            *e = ErrorFlags::empty();
        }
    }

    pub fn mark_error(&mut self, p: Point, flags: ErrorFlags) {
        let i = self.index(p);
        self.errors[i].insert(flags);
    }

    pub fn cells_iter(&self) -> impl Iterator<Item = Point> + '_ {
        let (w, h) = (self.size.w, self.size.h);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    pub fn row(&self, y: i32) -> Vec<Point> {
        (0..self.size.w).map(|x| Point::new(x, y)).collect()
    }

    pub fn column(&self, x: i32) -> Vec<Point> {
        (0..self.size.h).map(|y| Point::new(x, y)).collect()
    }
}
