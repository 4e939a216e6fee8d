//! Pool grouping.
//!
//! Partitions a division's player list into consecutive pools of four and
//! applies the anti-clustering swap so that two same-state or same-club pairs
//! do not meet in the same first-round sheet. The swap is a single-pass
//! heuristic over a fixed window of four players, not a constraint solver:
//! it never re-checks whether the swap introduced a new clash and never tries
//! alternative pairings. That limitation is deliberate and load-bearing for
//! reproducing printed sheets.

use crate::constants::POOL_SIZE;
use crate::roster::PlayerRecord;

/// An ordered pool of up to four players from one division. Position encodes
/// bracket seeding: 1 vs 2 and 3 vs 4 are the first-round pairings.
pub type Group = Vec<PlayerRecord>;

/// Returns true when the pool would pit two same-state pairs or two same-club
/// pairs against each other in the first round. Comparisons are exact string
/// equality on the fields as entered; no case or whitespace normalization.
fn pairs_cluster(pool: &[PlayerRecord]) -> bool {
    let (p1, p2, p3, p4) = (&pool[0], &pool[1], &pool[2], &pool[3]);
    (p1.state == p2.state && p3.state == p4.state)
        || (p1.club == p2.club && p3.club == p4.club)
}

/// Partitions `players` into ordered pools of up to [`POOL_SIZE`].
///
/// Chunk boundaries are purely positional (elements 0-3, 4-7, ...), with the
/// input order as the base seeding. Full pools that trip the anti-clustering
/// rule get positions 2 and 4 swapped exactly once; a trailing pool of one to
/// three players is passed through unmodified. Deterministic given input
/// order, which is the order records were first encountered during
/// classification.
///
/// # Examples
/// ```
/// use bracket_sheets::grouper::group_players;
/// use bracket_sheets::testing_utils::TestDataBuilder;
///
/// let division = vec![
///     TestDataBuilder::player("A", "16", "57.0", "male"),
///     TestDataBuilder::player("B", "16", "58.0", "male"),
///     TestDataBuilder::player("C", "16", "59.0", "male"),
///     TestDataBuilder::player("D", "16", "60.0", "male"),
///     TestDataBuilder::player("E", "16", "61.0", "male"),
/// ];
///
/// let pools = group_players(&division);
/// assert_eq!(pools.len(), 2);
/// assert_eq!(pools[0].len(), 4);
/// assert_eq!(pools[1].len(), 1);
/// ```
pub fn group_players(players: &[PlayerRecord]) -> Vec<Group> {
    let mut pools = Vec::with_capacity(players.len().div_ceil(POOL_SIZE));

    for chunk in players.chunks(POOL_SIZE) {
        let mut pool: Group = chunk.to_vec();
        if pool.len() == POOL_SIZE && pairs_cluster(&pool) {
            pool.swap(1, 3);
        }
        pools.push(pool);
    }

    pools
}
