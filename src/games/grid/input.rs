//! Parsing of typed moves.

use super::Move;
use tracing::{debug, instrument};

/// Parses a `row,col` line in 1-based coordinates.
///
/// Returns `None` when the line is not exactly two comma-separated integers.
/// Range is not checked here; that is the game's job.
#[instrument]
pub fn parse_move(raw: &str) -> Option<Move> {
    let (row, col) = raw.trim().split_once(',')?;
    let row = row.trim().parse::<i64>().ok()?;
    let col = col.trim().parse::<i64>().ok()?;

    let mv = Move::from_one_based(row, col);
    debug!(%mv, "Parsed move");
    Some(mv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_converts_to_zero_based() {
        assert_eq!(parse_move("1,3"), Some(Move::new(0, 2)));
        assert_eq!(parse_move("  2 , 2 \n"), Some(Move::new(1, 1)));
    }

    #[test]
    fn test_parse_keeps_out_of_range_values() {
        assert_eq!(parse_move("0,1"), Some(Move::new(-1, 0)));
        assert_eq!(parse_move("6,2"), Some(Move::new(5, 1)));
    }

    #[test]
    fn test_parse_extreme_numbers_without_overflow() {
        assert_eq!(
            parse_move("-9223372036854775808,1"),
            Some(Move::new(i64::MIN, 0))
        );
        assert_eq!(
            parse_move("9223372036854775807,-9223372036854775808"),
            Some(Move::new(i64::MAX - 1, i64::MIN))
        );
        assert_eq!(parse_move("99999999999999999999,1"), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for raw in ["", "1", "1,", ",1", "a,b", "1,2,3", "1;2", "1.5,2"] {
            assert_eq!(parse_move(raw), None, "{raw:?} should not parse");
        }
    }
}
