//! Puzzle description codec for Walls (spec.md §6): verticals then
//! horizontals, concatenated, run-length encoded over the wall/non-wall
//! alphabet.

use crate::board::{Board, EdgeState};
use puzzle_core::rle::{decode_wall_stream, encode_wall_stream};
use puzzle_core::{horizontal_edge_count, vertical_edge_count, DescError, Orientation, Size};

/// Encode the WALL/non-WALL layout of `board` (fixed clues only — this is
/// the puzzle-creation description, not a full solve state dump).
pub fn encode(board: &Board) -> String {
    let (w, h) = (board.width(), board.height());
    let v_count = vertical_edge_count(w, h);
    let h_count = horizontal_edge_count(w, h);
    let mut walls = Vec::with_capacity(v_count + h_count);

    for y in 0..h {
        for x in 0..=w {
            walls.push(board.state(x, y, Orientation::Vertical) == EdgeState::Wall);
        }
    }
    for y in 0..=h {
        for x in 0..w {
            walls.push(board.state(x, y, Orientation::Horizontal) == EdgeState::Wall);
        }
    }

    encode_wall_stream(&walls)
}

/// Decode a description into a fresh board with every wall/non-wall edge
/// marked FIXED (this is how a generated puzzle's clues are installed;
/// a freshly decoded board has no LINE edges yet — those are for the
/// player/solver to determine).
pub fn decode(size: Size, s: &str) -> Result<Board, DescError> {
    let (w, h) = (size.w, size.h);
    let total = vertical_edge_count(w, h) + horizontal_edge_count(w, h);
    if s.is_empty() {
        return Err(DescError::Empty);
    }
    let walls = decode_wall_stream(s, total)?;

    let mut board = Board::new(size);
    let mut i = 0;
    for y in 0..h {
        for x in 0..=w {
            let state = if walls[i] { EdgeState::Wall } else { EdgeState::Unknown };
            board.set_fixed(x, y, Orientation::Vertical, state);
            i += 1;
        }
    }
    for y in 0..=h {
        for x in 0..w {
            let state = if walls[i] { EdgeState::Wall } else { EdgeState::Unknown };
            board.set_fixed(x, y, Orientation::Horizontal, state);
            i += 1;
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// spec.md §8 P1 — roundtrip through decode/encode/decode.
    #[test]
    fn roundtrip() {
        let size = Size::new(4, 4);
        let mut board = Board::new(size);
        // Lay a few walls down directly (bypassing FIXED, since we're
        // building the "clue" board to encode).
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
    fn rejects_empty() {
        assert!(matches!(decode(Size::new(3, 3), ""), Err(DescError::Empty)));
    }

    proptest::proptest! {
        /// spec.md §8 P1 — roundtrip through decode/encode/decode holds for
        /// any wall layout, not just the hand-picked one above.
        #[test]
        fn desc_roundtrip_prop(bits in proptest::collection::vec(proptest::bool::ANY, 40)) {
            let size = Size::new(4, 4);
            let mut board = Board::new(size);
            for (id, &wall) in board.all_edge_ids().zip(bits.iter()) {
                board.set_state_by_id(id, if wall { EdgeState::Wall } else { EdgeState::Unknown });
            }
            let d1 = encode(&board);
            let decoded1 = decode(size, &d1).unwrap();
            let d2 = encode(&decoded1);
            proptest::prop_assert_eq!(d1, d2);
        }
    }
}
