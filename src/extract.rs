// src/extract.rs
//! Field extraction: one candidate element in, one `PlayerRecord` out.
//!
//! Every field runs its own cascade of strategies, tried in order, first
//! hit wins: specific class names and profile-link anchors before text
//! signals, text signals before giving up. A field with no usable source
//! stays absent; the record itself is always produced. Worst case is a
//! record carrying only a name and the raw text.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::core::num::lenient_number;
use crate::core::text::first_line;
use crate::record::PlayerRecord;
use crate::select::flat_text;

/// Attribute variants that carry a stable player id across page versions.
const ID_ATTRS: &[&str] = &["data-playerid", "data-player-id", "data-playersid"];

/// Name-bearing markup, most specific first. The anchor pattern catches
/// profile links when no dedicated class survives a redesign.
const NAME_PATTERNS: &[&str] = &[
    ".playerName",
    ".player-name",
    ".PlayerName",
    "[data-player-name]",
    "a[href*='/player/']",
];

const PROJ_PATTERNS: &[&str] = &[".playerGameCell__projected", ".projected-points"];

fn parse_all(patterns: &[&str]) -> Vec<Selector> {
    patterns
        .iter()
        .map(|p| Selector::parse(p).unwrap_or_else(|_| unreachable!()))
        .collect()
}

static NAME_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| parse_all(NAME_PATTERNS));
static PROJ_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| parse_all(PROJ_PATTERNS));

static POS_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(QB|RB|WR|TE|K|DEF|DST)\b").unwrap_or_else(|_| unreachable!()));

static PROJ_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bProj\b|\bProjected\b").unwrap_or_else(|_| unreachable!()));

static PROJ_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Proj(?:ected)?:?\s*([0-9]+(?:\.[0-9]+)?)").unwrap_or_else(|_| unreachable!())
});

static WEEK_NUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Week\s*\d+:\s*([0-9]+(?:\.[0-9]+)?)").unwrap_or_else(|_| unreachable!())
});

static BARE_NUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap_or_else(|_| unreachable!()));

static ADP_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ADP[:\s]*([0-9]+(?:\.[0-9]+)?)").unwrap_or_else(|_| unreachable!())
});

/// Build a record from one candidate node. Never fails.
pub fn parse_player(el: ElementRef<'_>) -> PlayerRecord {
    let text = flat_text(el);

    let player_id = ID_ATTRS
        .iter()
        .find_map(|a| el.value().attr(a).filter(|v| !v.is_empty()))
        .map(|v| v.to_string());

    let name = extract_name(el, &text);

    // First whole-word code anywhere in the text wins; no precedence
    // between codes when several appear.
    let position = POS_CODE
        .find(&text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let projected = extract_projected(el, &text);
    let recent = extract_recent(&text);
    let adp = captured_number(&ADP_LABEL, &text);

    PlayerRecord {
        player_id,
        name,
        position,
        team: s!(),
        projected,
        recent,
        adp,
        raw_text: text,
    }
}

fn extract_name(el: ElementRef<'_>, text: &str) -> String {
    let mut name = s!();
    for sel in NAME_SELECTORS.iter() {
        if let Some(hit) = el.select(sel).next() {
            name = flat_text(hit).trim().to_string();
            break;
        }
    }
    if name.is_empty() {
        name = first_line(text);
    }
    name
}

/// Projection cascade: known cell classes, then the first descendant
/// mentioning a projection word. When either finds an element, that
/// element's text is the only source tried; a direct label regex on the
/// whole text runs only if no element matched at all.
fn extract_projected(el: ElementRef<'_>, text: &str) -> Option<f64> {
    let hit = PROJ_SELECTORS
        .iter()
        .find_map(|sel| el.select(sel).next())
        .or_else(|| projected_descendant(el));

    match hit {
        Some(node) => lenient_number(&flat_text(node)),
        None => captured_number(&PROJ_LABEL, text),
    }
}

/// First descendant element (self excluded) whose text mentions Proj or
/// Projected as a whole word.
fn projected_descendant(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|d| PROJ_WORD.is_match(&flat_text(*d)))
}

/// Weakest heuristic in the pipeline: prefer a "Week N:"-labelled number,
/// else take the first numeric token anywhere in the text, which may well
/// be a jersey number or a week count. Downstream scoring assumes exactly
/// this source, so it stays as it is.
fn extract_recent(text: &str) -> Option<f64> {
    if let Some(v) = captured_number(&WEEK_NUM, text) {
        return Some(v);
    }
    BARE_NUM.find(text).and_then(|m| m.as_str().parse::<f64>().ok())
}

fn captured_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
