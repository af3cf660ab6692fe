// src/reconcile.rs
//
// Collapse duplicate detections of the same player into one record per
// identity key. Candidates are folded left-to-right in extraction order;
// first-seen key order is preserved in the output.

use std::collections::HashMap;

use crate::params::MAX_PLAYERS;
use crate::record::PlayerRecord;

/// Deduplicate by identity key, keeping the most informative record.
pub fn dedup_players(parsed: Vec<PlayerRecord>) -> Vec<PlayerRecord> {
    let mut by_key: HashMap<String, usize> = HashMap::new();
    let mut survivors: Vec<PlayerRecord> = Vec::new();

    for candidate in parsed {
        let key = candidate.identity_key();
        if let Some(&ix) = by_key.get(&key) {
            if replaces(&survivors[ix], &candidate) {
                survivors[ix] = candidate;
            }
        } else {
            by_key.insert(key, survivors.len());
            survivors.push(candidate);
        }
    }

    survivors.truncate(MAX_PLAYERS);
    logd!("Reconcile: {} records after dedup", survivors.len());
    survivors
}

/// A candidate beats the current survivor only when it brings projection
/// data the survivor lacks, or strictly more of it.
fn replaces(survivor: &PlayerRecord, candidate: &PlayerRecord) -> bool {
    match (survivor.projected, candidate.projected) {
        (None, Some(_)) => true,
        (Some(s), Some(c)) => c > s,
        _ => false,
    }
}
