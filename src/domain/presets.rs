//! Classic Game of Life pattern library.

use super::Pattern;

/// Glider - simplest spaceship, moves down-right one cell every 4 steps
pub fn glider() -> Pattern {
    Pattern::from_rows(
        "Glider",
        &[
            &[0, 1, 0],
            &[0, 0, 1],
            &[1, 1, 1],
        ],
    )
}

/// Blinker - period 2 oscillator, a 3-cell horizontal line
pub fn blinker() -> Pattern {
    Pattern::from_rows(
        "Blinker",
        &[
            &[0, 0, 0],
            &[1, 1, 1],
            &[0, 0, 0],
        ],
    )
}

/// Block - simple still life
pub fn block() -> Pattern {
    Pattern::from_rows(
        "Block",
        &[
            &[1, 1],
            &[1, 1],
        ],
    )
}

/// Gosper glider gun - produces a glider every 30 generations.
/// Laid out vertically, firing downward.
pub fn glider_gun() -> Pattern {
    Pattern::from_rows(
        "Gosper Glider Gun",
        &[
            &[0, 0, 0, 0, 1, 1, 0, 0, 0],
            &[0, 0, 0, 0, 1, 1, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 1, 1, 1, 0, 0],
            &[0, 0, 0, 1, 0, 0, 0, 1, 0],
            &[0, 0, 1, 0, 0, 0, 0, 0, 1],
            &[0, 0, 1, 0, 0, 0, 0, 0, 1],
            &[0, 0, 0, 0, 0, 1, 0, 0, 0],
            &[0, 0, 0, 1, 0, 0, 0, 1, 0],
            &[0, 0, 0, 0, 1, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0, 1, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 1, 1, 0, 0, 0, 0],
            &[0, 0, 1, 1, 1, 0, 0, 0, 0],
            &[0, 1, 0, 0, 0, 1, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[1, 1, 0, 0, 0, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 1, 0, 0, 0, 0, 0],
            &[0, 0, 1, 1, 0, 0, 0, 0, 0],
        ],
    )
}

/// All available patterns
pub fn all_patterns() -> Vec<Pattern> {
    vec![glider(), blinker(), block(), glider_gun()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_preset_dimensions() {
        assert_eq!(glider().dimensions(), (3, 3));
        assert_eq!(blinker().dimensions(), (3, 3));
        assert_eq!(block().dimensions(), (2, 2));
        assert_eq!(glider_gun().dimensions(), (36, 9));
    }

    #[test]
    fn test_preset_populations() {
        let alive = |p: &Pattern| p.iter_cells().filter(|(_, _, c)| c.is_alive()).count();
        assert_eq!(alive(&glider()), 5);
        assert_eq!(alive(&blinker()), 3);
        assert_eq!(alive(&block()), 4);
        assert_eq!(alive(&glider_gun()), 36);
    }

    #[test]
    fn test_blinker_row_is_horizontal() {
        let b = blinker();
        assert_eq!(b.get(1, 0), Some(Cell::Alive));
        assert_eq!(b.get(1, 1), Some(Cell::Alive));
        assert_eq!(b.get(1, 2), Some(Cell::Alive));
        assert_eq!(b.get(0, 1), Some(Cell::Dead));
    }
}
