//! Division buckets.
//!
//! An insertion-ordered mapping from division label to the players assigned
//! to it. The order in which divisions are first populated is the order their
//! sheets are printed, and the order of players inside a bucket is the base
//! seeding for the grouper. A fresh instance is built for every run; nothing
//! here is shared or static.

use std::collections::HashMap;

use tracing::debug;

use crate::classifier::{WeightClassTable, classify};
use crate::roster::PlayerRecord;

/// Ordered label -> players mapping built by one pass over the roster.
#[derive(Debug, Default)]
pub struct DivisionBuckets {
    order: Vec<String>,
    buckets: HashMap<String, Vec<PlayerRecord>>,
}

impl DivisionBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a player to the bucket for `label`, creating the bucket at the
    /// end of the division order on first sight of the label.
    pub fn push(&mut self, label: String, player: PlayerRecord) {
        if !self.buckets.contains_key(&label) {
            self.order.push(label.clone());
        }
        self.buckets.entry(label).or_default().push(player);
    }

    /// Iterates buckets in first-populated order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PlayerRecord])> {
        self.order.iter().map(|label| {
            (
                label.as_str(),
                self.buckets[label].as_slice(),
            )
        })
    }

    /// Number of distinct divisions seen so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The players bucketed under `label`, if any.
    pub fn get(&self, label: &str) -> Option<&[PlayerRecord]> {
        self.buckets.get(label).map(Vec::as_slice)
    }
}

/// Classifies every player and buckets them by division label in one pass,
/// preserving entry order within each bucket.
pub fn bucket_players(players: Vec<PlayerRecord>, table: &WeightClassTable) -> DivisionBuckets {
    let mut buckets = DivisionBuckets::new();
    for player in players {
        let label = classify(&player.age, &player.weight, &player.gender, table);
        debug!("Assigned {} to division {}", player.name, label);
        buckets.push(label, player);
    }
    buckets
}
