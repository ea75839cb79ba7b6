/// Highest possible number of live neighbors
const MAX_NEIGHBORS: usize = 8;
type RuleTable = [[bool; MAX_NEIGHBORS + 1]; 2];

/// Lookup table for the B3/S23 ruleset, indexed by `[alive][neighbors]`
static RULE: RuleTable = generate_rule_table();

/// Creates the lookup table for the Game of Life ruleset
///
/// A dead cell is born with exactly 3 live neighbors, a live cell survives
/// with 2 or 3.
const fn generate_rule_table() -> RuleTable {
    let mut table = [[false; MAX_NEIGHBORS + 1]; 2];
    let mut neighbors = 0;
    while neighbors <= MAX_NEIGHBORS {
        table[0][neighbors] = neighbors == 3;
        table[1][neighbors] = neighbors == 2 || neighbors == 3;
        neighbors += 1;
    }
    table
}

/// Whether a cell is alive in the next generation.
///
/// `neighbors` is the live-neighbor count and never exceeds 8.
#[inline]
pub(super) fn next_state(alive: bool, neighbors: u8) -> bool {
    RULE[usize::from(alive)][usize::from(neighbors)]
}
