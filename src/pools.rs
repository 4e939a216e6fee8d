//! The output boundary: the ordered sequence of pool assignments handed to a
//! sheet renderer.

use serde::Serialize;
use tracing::info;

use crate::division::DivisionBuckets;
use crate::grouper::{Group, group_players};

/// One printed sheet's worth of assignment: a division label, a 1-based pool
/// index within that division, and the seeded pool itself.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PoolAssignment {
    pub division: String,
    pub group_index: usize,
    pub players: Group,
}

impl PoolAssignment {
    /// Heading as printed at the top of the sheet, e.g. `"16-17 MALE - Group 2"`.
    pub fn heading(&self) -> String {
        format!("{} - Group {}", self.division, self.group_index)
    }
}

/// Runs the grouper over every division bucket and flattens the result into
/// the output sequence: divisions in first-populated order, pools in ascending
/// index within each division.
pub fn build_pools(buckets: &DivisionBuckets) -> Vec<PoolAssignment> {
    let mut assignments = Vec::new();

    for (division, players) in buckets.iter() {
        let pools = group_players(players);
        info!(
            "Division {}: {} players in {} pool(s)",
            division,
            players.len(),
            pools.len()
        );
        for (index, pool) in pools.into_iter().enumerate() {
            assignments.push(PoolAssignment {
                division: division.to_string(),
                group_index: index + 1,
                players: pool,
            });
        }
    }

    assignments
}
