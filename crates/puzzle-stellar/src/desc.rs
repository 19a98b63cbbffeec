//! Puzzle description codec for Stellar (spec.md §6): row-major run-length
//! stream of empty-cell letters (`a`..`z` = 1..26, `z` never implies
//! anything beyond its own 26 — chain more `z`s for longer gaps) and
//! explicit two-character planet codes. Unlike the Walls/Alcazar wall
//! stream, a letter never implies a trailing planet: a planet carries an
//! illumination payload that can't be inferred, so it's always spelled out.

use crate::board::{Board, Cell, Content, Illumination};
use puzzle_core::{DescError, Size};

fn planet_code(illum: Illumination) -> [char; 2] {
    let x = if illum.left() {
        'L'
    } else if illum.right() {
        'R'
    } else {
        'X'
    };
    let y = if illum.top() {
        'T'
    } else if illum.bottom() {
        'B'
    } else {
        'X'
    };
    [x, y]
}

fn illum_from_code(x: char, y: char) -> Result<Illumination, DescError> {
    Ok(match (x, y) {
        ('X', 'X') => Illumination::Dark,
        ('L', 'X') => Illumination::Left,
        ('R', 'X') => Illumination::Right,
        ('X', 'T') => Illumination::Top,
        ('X', 'B') => Illumination::Bottom,
        ('L', 'T') => Illumination::LeftTop,
        ('L', 'B') => Illumination::LeftBottom,
        ('R', 'T') => Illumination::RightTop,
        ('R', 'B') => Illumination::RightBottom,
        _ => return Err(DescError::InvalidCharacter(x)),
    })
}

pub fn encode(board: &Board) -> String {
    let total = board.total_cells();
    let mut out = String::new();
    let mut i = 0;
    while i < total {
        if let Cell::Committed(Content::Planet(illum)) = board.cell_by_index(i) {
            let [x, y] = planet_code(illum);
            out.push(x);
            out.push(y);
            i += 1;
            continue;
        }
        let mut run = 0usize;
        while i < total && run < 26 && !matches!(board.cell_by_index(i), Cell::Committed(Content::Planet(_))) {
            run += 1;
            i += 1;
        }
        out.push((b'a' + (run - 1) as u8) as char);
    }
    out
}

pub fn decode(size: Size, s: &str) -> Result<Board, DescError> {
    let total = (size.w * size.h) as usize;
    if s.is_empty() {
        return Err(DescError::Empty);
    }
    let mut board = Board::new(size);
    let mut i = 0usize;
    let chars: Vec<char> = s.chars().collect();
    let mut ci = 0usize;

    while ci < chars.len() {
        let c = chars[ci];
        if c.is_ascii_lowercase() {
            let run = (c as u8 - b'a') as usize + 1;
            for _ in 0..run {
                if i >= total {
                    return Err(DescError::LengthMismatch { expected: total, actual: i });
                }
                board.set_cell_by_index(i, Cell::Guess(crate::board::Candidates::all()));
                i += 1;
            }
            ci += 1;
        } else if c.is_ascii_uppercase() {
            if ci + 1 >= chars.len() {
                return Err(DescError::InvalidCharacter(c));
            }
            let illum = illum_from_code(c, chars[ci + 1])?;
            if i >= total {
                return Err(DescError::LengthMismatch { expected: total, actual: i });
            }
            board.set_cell_by_index(i, Cell::Committed(Content::Planet(illum)));
            i += 1;
            ci += 2;
        } else {
            return Err(DescError::InvalidCharacter(c));
        }
    }

    if i != total {
        return Err(DescError::LengthMismatch { expected: total, actual: i });
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_core::Point;

    #[test]
    fn roundtrip() {
        let size = Size::new(5, 5);
        let mut board = Board::new(size);
        board.set_cell(Point::new(0, 0), Cell::Committed(Content::Planet(Illumination::Left)));
        board.set_cell(Point::new(2, 2), Cell::Committed(Content::Planet(Illumination::RightBottom)));

        let d1 = encode(&board);
        let decoded1 = decode(size, &d1).unwrap();
        let d2 = encode(&decoded1);
        assert_eq!(d1, d2);
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(matches!(
            decode(Size::new(3, 3), "aa"),
            Err(DescError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(decode(Size::new(3, 3), ""), Err(DescError::Empty)));
    }

    proptest::proptest! {
        /// spec.md §8 P1 — roundtrip through decode/encode/decode holds for
        /// any placement of planets, not just a hand-picked pair.
        #[test]
        fn desc_roundtrip_prop(slots in proptest::collection::vec(0usize..10, 9)) {
            let size = Size::new(3, 3);
            let mut board = Board::new(size);
            for (i, &slot) in slots.iter().enumerate() {
                if slot < 9 {
                    board.set_cell_by_index(i, Cell::Committed(Content::Planet(Illumination::ALL_NINE[slot])));
                }
            }
            let d1 = encode(&board);
            let decoded1 = decode(size, &d1).unwrap();
            let d2 = encode(&decoded1);
            proptest::prop_assert_eq!(d1, d2);
        }
    }
}
