// src/lineup.rs
//
// Lineup view over reconciled records: fixed slot order, alias matching
// for the defense naming variants, FLEX derived from RB + WR + TE.

use crate::core::text::normalize_name;
use crate::record::PlayerRecord;
use crate::score::trade_value;

/// Lineup slots in display order, with the position codes mapping to each.
/// FLEX has no codes of its own; it is filled from RB, WR and TE below.
const SLOT_ALIASES: &[(&str, &[&str])] = &[
    ("QB", &["QB"]),
    ("RB", &["RB"]),
    ("WR", &["WR"]),
    ("TE", &["TE"]),
    ("FLEX", &[]),
    ("D/ST", &["D/ST", "DST", "DEFENSE", "DEF"]),
    ("K", &["K"]),
];

const FLEX_SOURCES: &[&str] = &["RB", "WR", "TE"];

/// Group record names under lineup slots. Records with no recognized
/// position are omitted; names are listed once per slot.
pub fn group_by_slot(records: &[PlayerRecord]) -> Vec<(String, Vec<String>)> {
    let mut slots: Vec<(String, Vec<String>)> = SLOT_ALIASES
        .iter()
        .map(|(slot, _)| (s!(*slot), Vec::new()))
        .collect();

    for rec in records {
        let pos = rec.position.to_ascii_uppercase();
        if pos.is_empty() {
            continue;
        }
        for (ix, (_, aliases)) in SLOT_ALIASES.iter().enumerate() {
            if aliases.contains(&pos.as_str()) {
                let names = &mut slots[ix].1;
                if !names.iter().any(|n| n == &rec.name) {
                    names.push(rec.name.clone());
                }
                break;
            }
        }
    }

    let mut flex = Vec::new();
    for source in FLEX_SOURCES {
        if let Some((_, names)) = slots.iter().find(|(slot, _)| slot == source) {
            flex.extend(names.iter().cloned());
        }
    }
    if let Some(entry) = slots.iter_mut().find(|(slot, _)| slot == "FLEX") {
        entry.1 = flex;
    }

    slots
}

/// Trade value for a free-text player name, or None when no record
/// matches. Names are compared in normalized form, so punctuation and
/// case differences do not break the lookup.
pub fn lookup_value(records: &[PlayerRecord], name: &str) -> Option<f64> {
    let want = normalize_name(name);
    if want.is_empty() {
        return None;
    }
    records
        .iter()
        .find(|r| normalize_name(&r.name) == want)
        .map(trade_value)
}
