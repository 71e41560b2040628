//! Terrain symbol classification and movement costs.
//!
//! Follows the Moving-AI benchmark alphabet: ground (`.`, `G`), swamp
//! (`S`), water (`W`) and graded terrain letters, with `T`, `@` and `O`
//! as obstacles. Both functions are total over `char`; anything
//! unrecognized is impassable.

/// Whether a terrain symbol can be entered at all.
///
/// Ground, swamp and water are passable, as is any uppercase terrain
/// grade except the obstacle symbols `T`, `@` and `O`.
#[inline]
pub fn passable(sym: char) -> bool {
    matches!(sym, '.' | 'G' | 'S' | 'W')
        || (sym.is_ascii_uppercase() && !matches!(sym, 'T' | '@' | 'O'))
}

/// Cost of entering a cell with the given terrain symbol.
///
/// Plain ground costs 1, swamp costs 2, and graded terrain letters cost
/// their rank in the alphabet (`A` = 1, `B` = 2, …). Impassable symbols
/// cost [`f64::INFINITY`] and never become graph nodes.
#[inline]
pub fn cost(sym: char) -> f64 {
    match sym {
        '.' | 'G' => 1.0,
        'S' => 2.0,
        'A'..='Z' if passable(sym) => (sym as u32 - 'A' as u32 + 1) as f64,
        _ => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_symbols() {
        assert!(passable('.'));
        assert!(passable('G'));
        assert_eq!(cost('.'), 1.0);
        assert_eq!(cost('G'), 1.0);
    }

    #[test]
    fn swamp_costs_double() {
        assert!(passable('S'));
        assert_eq!(cost('S'), 2.0);
    }

    #[test]
    fn graded_letters_cost_their_rank() {
        assert_eq!(cost('A'), 1.0);
        assert_eq!(cost('B'), 2.0);
        assert_eq!(cost('W'), 23.0);
        assert_eq!(cost('Z'), 26.0);
    }

    #[test]
    fn obstacles_are_impassable() {
        for sym in ['T', '@', 'O', '#'] {
            assert!(!passable(sym), "{sym} should be impassable");
            assert!(cost(sym).is_infinite());
        }
    }

    #[test]
    fn total_over_unrecognized_symbols() {
        for sym in ['a', 'z', ' ', '0', '!', 'é'] {
            assert!(!passable(sym), "{sym} should be impassable");
            assert!(cost(sym).is_infinite());
        }
    }
}
