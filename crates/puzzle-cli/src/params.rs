//! Parameter string parsing (spec.md §6): `WxH[d<c>]` for Walls/Alcazar,
//! `S[d<c>]` for Stellar. Grounded on `cli/src/parse_arg.rs`'s
//! `Width`/`Height` decodable newtypes, reworked as plain parsing functions
//! over `clap`-supplied strings instead of a `docopt` `Decodable` impl.

use puzzle_core::{Difficulty, GeomError, ParamError, Size};

pub fn parse_size_wh(s: &str) -> Result<Size, ParamError> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| ParamError::Malformed(s.to_string()))?;
    let w: i32 = w.parse().map_err(|_| ParamError::Malformed(s.to_string()))?;
    let h: i32 = h.parse().map_err(|_| ParamError::Malformed(s.to_string()))?;
    if w < 3 || h < 3 {
        return Err(ParamError::Geom(GeomError::TooSmall { w, h }));
    }
    Ok(Size::new(w, h))
}

pub fn parse_size_n(s: &str) -> Result<i32, ParamError> {
    let n: i32 = s.parse().map_err(|_| ParamError::Malformed(s.to_string()))?;
    if n < 3 {
        return Err(ParamError::Geom(GeomError::TooSmall { w: n, h: n }));
    }
    Ok(n)
}

pub fn parse_difficulty(c: char, allowed: &[Difficulty]) -> Result<Difficulty, ParamError> {
    let diff = Difficulty::from_char(c).ok_or(ParamError::UnknownDifficulty(c))?;
    if !allowed.contains(&diff) {
        return Err(ParamError::UnknownDifficulty(c));
    }
    Ok(diff)
}

pub fn format_param_wh(size: Size, difficulty: Difficulty) -> String {
    format!("{}x{}d{}", size.w, size.h, difficulty.as_char())
}

pub fn format_param_n(n: i32, difficulty: Difficulty) -> String {
    format!("{}d{}", n, difficulty.as_char())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_size_below_three() {
        assert!(matches!(
            parse_size_wh("2x5"),
            Err(ParamError::Geom(GeomError::TooSmall { w: 2, h: 5 }))
        ));
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(matches!(parse_size_wh("55"), Err(ParamError::Malformed(_))));
    }

    #[test]
    fn rejects_difficulty_outside_allowed_subset() {
        let allowed = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];
        assert!(matches!(
            parse_difficulty('t', &allowed),
            Err(ParamError::UnknownDifficulty('t'))
        ));
    }

    #[test]
    fn accepts_allowed_difficulty() {
        let allowed = [Difficulty::Normal, Difficulty::Hard];
        assert_eq!(parse_difficulty('h', &allowed).unwrap(), Difficulty::Hard);
    }
}
