// src/select.rs
//
// Candidate location: find the nodes likely to represent exactly one
// player each. Structural row/card selectors are precise but brittle to
// markup drift; an independent textual scan over generic containers
// recovers candidates when the structure changes. Results are unioned
// into one set, so selector order never affects the outcome.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::params::{MAX_PLAYERS, MIN_CANDIDATE_TEXT};

/// Row/card idioms seen across roster page variants.
const ROW_PATTERNS: &[&str] = &[
    ".playerRow",
    ".player-row",
    ".Table__TR",
    ".Table__TR--player",
    "[data-playerid]",
    ".PlayerCard",
    ".playerSlot",
    ".playerListItem",
];

static ROW_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    ROW_PATTERNS
        .iter()
        .map(|p| Selector::parse(p).unwrap_or_else(|_| unreachable!()))
        .collect()
});

static GENERIC_CONTAINERS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div, li, tr").unwrap_or_else(|_| unreachable!()));

static PROJ_SIGNAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bProj\b").unwrap_or_else(|_| unreachable!()));

static POS_SIGNAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(QB|RB|WR|TE|K|DST)\b").unwrap_or_else(|_| unreachable!()));

/// Flattened text of an element subtree.
pub fn flat_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Scan a parsed document for player-shaped nodes.
/// Never fails; an empty page yields an empty candidate set.
pub fn locate_candidates(doc: &Html) -> Vec<ElementRef<'_>> {
    let mut seen: HashSet<_> = HashSet::new();
    let mut found = Vec::new();

    for sel in ROW_SELECTORS.iter() {
        for el in doc.select(sel) {
            if seen.insert(el.id()) {
                found.push(el);
            }
        }
    }

    // Textual fallback: generic containers whose text carries a projection
    // keyword or a whole-word position code.
    for el in doc.select(&GENERIC_CONTAINERS) {
        if seen.contains(&el.id()) {
            continue;
        }
        let text = flat_text(el);
        if PROJ_SIGNAL.is_match(&text) || POS_SIGNAL.is_match(&text) {
            seen.insert(el.id());
            found.push(el);
        }
    }

    found.retain(|el| flat_text(*el).trim().chars().count() > MIN_CANDIDATE_TEXT);
    found.truncate(MAX_PLAYERS);

    logd!("Select: {} candidate nodes", found.len());
    found
}
