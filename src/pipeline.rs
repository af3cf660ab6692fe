// src/pipeline.rs
//! Top level of the extraction pipeline: locate -> parse -> reconcile
//! over one parsed snapshot. Pure and synchronous; each stage owns the
//! records it is handed and nothing is cached between calls, so
//! concurrent invocations on different snapshots cannot interfere.

use scraper::Html;

use crate::record::PlayerRecord;
use crate::{extract, reconcile, select};

/// Run the full pipeline over a parsed document.
pub fn extract_players(doc: &Html) -> Vec<PlayerRecord> {
    let candidates = select::locate_candidates(doc);
    let parsed: Vec<PlayerRecord> = candidates.into_iter().map(extract::parse_player).collect();
    reconcile::dedup_players(parsed)
}

/// Convenience entry point for callers holding raw HTML.
pub fn extract_players_from(html: &str) -> Vec<PlayerRecord> {
    let doc = Html::parse_document(html);
    extract_players(&doc)
}
