//! Puzzle description codec for Alcazar (spec.md §6): horizontals then
//! verticals, each run-length encoded separately and joined with `,`.

use crate::board::{Board, EdgeState};
use puzzle_core::rle::{decode_wall_stream, encode_wall_stream};
use puzzle_core::{horizontal_edge_count, vertical_edge_count, DescError, Orientation, Size};

pub fn encode(board: &Board) -> String {
    let (w, h) = (board.width(), board.height());
    let mut horiz = Vec::with_capacity(horizontal_edge_count(w, h));
    for y in 0..=h {
        for x in 0..w {
            horiz.push(board.state(x, y, Orientation::Horizontal) == EdgeState::Wall);
        }
    }
    let mut vert = Vec::with_capacity(vertical_edge_count(w, h));
    for y in 0..h {
        for x in 0..=w {
            vert.push(board.state(x, y, Orientation::Vertical) == EdgeState::Wall);
        }
    }
    format!("{},{}", encode_wall_stream(&horiz), encode_wall_stream(&vert))
}

pub fn decode(size: Size, s: &str) -> Result<Board, DescError> {
    let (w, h) = (size.w, size.h);
    let (horiz_str, vert_str) = s.split_once(',').ok_or(DescError::Empty)?;
    let horiz = decode_wall_stream(horiz_str, horizontal_edge_count(w, h))?;
    let vert = decode_wall_stream(vert_str, vertical_edge_count(w, h))?;

    let mut board = Board::new(size);
    let mut i = 0;
    for y in 0..=h {
        for x in 0..w {
            let state = if horiz[i] { EdgeState::Wall } else { EdgeState::None };
            board.set_fixed(x, y, Orientation::Horizontal, state);
            i += 1;
        }
    }
    i = 0;
    for y in 0..h {
        for x in 0..=w {
            let state = if vert[i] { EdgeState::Wall } else { EdgeState::None };
            board.set_fixed(x, y, Orientation::Vertical, state);
            i += 1;
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let size = Size::new(4, 4);
        let mut board = Board::new(size);
        board.set_state(0, 0, Orientation::Vertical, EdgeState::Wall);
        board.set_state(2, 1, Orientation::Horizontal, EdgeState::Wall);

        let d1 = encode(&board);
        let decoded1 = decode(size, &d1).unwrap();
        let d2 = encode(&decoded1);
        let decoded2 = decode(size, &d2).unwrap();

        for id in decoded1.all_edge_ids() {
            assert_eq!(decoded1.state_by_id(id), decoded2.state_by_id(id));
        }
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(matches!(decode(Size::new(3, 3), "abc"), Err(DescError::Empty)));
    }

    proptest::proptest! {
        /// spec.md §8 P1 — roundtrip through decode/encode/decode holds for
        /// any wall layout.
        #[test]
        fn desc_roundtrip_prop(bits in proptest::collection::vec(proptest::bool::ANY, 40)) {
            let size = Size::new(4, 4);
            let mut board = Board::new(size);
            for (id, &wall) in board.all_edge_ids().zip(bits.iter()) {
                board.set_state_by_id(id, if wall { EdgeState::Wall } else { EdgeState::None });
            }
            let d1 = encode(&board);
            let decoded1 = decode(size, &d1).unwrap();
            let d2 = encode(&decoded1);
            proptest::prop_assert_eq!(d1, d2);
        }
    }
}
