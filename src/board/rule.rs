use std::sync::OnceLock;

/// The number of (state, neighbour count) pairs a cell can be in
const STATES: usize = 2 * 9;
type RuleTable = [bool; STATES];

/// Returns a Singleton lookup table for the B3/S23 ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
fn get_rule_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(generate_rule_table)
}

#[inline]
fn table_index(alive: bool, neighbors: u8) -> usize {
    debug_assert!(neighbors <= 8, "more than 8 neighbours");
    usize::from(alive) * 9 + usize::from(neighbors)
}

/// Creates a lookup table for the B3/S23 ruleset
///
/// The table is indexed by the current state of a cell and its live neighbour
/// count, see [`table_index`].
///
/// Returns whether the cell is alive in the next generation
fn generate_rule_table() -> RuleTable {
    let mut table = [false; STATES];
    for alive in [false, true] {
        for neighbors in 0..=8 {
            table[table_index(alive, neighbors)] = matches!((alive, neighbors), (true, 2) | (_, 3));
        }
    }
    table
}

/// The state of a cell in the next generation
#[inline]
pub(super) fn next_state(alive: bool, neighbors: u8) -> bool {
    get_rule_table()[table_index(alive, neighbors)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(next_state(false, 3));

        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        assert!(!next_state(true, 4));
        assert!(!next_state(true, 8));
        assert!(!next_state(false, 2));
        assert!(!next_state(false, 4));
    }

    #[test]
    fn only_three_births() {
        let births: Vec<u8> = (0..=8).filter(|&n| next_state(false, n)).collect();

        assert_eq!(births, vec![3]);
    }
}
