// src/params.rs
use std::path::PathBuf;

use crate::csv::Delim;

/// Hard cap on candidates per pass and on reconciled records.
pub const MAX_PLAYERS: usize = 400;

/// Candidates with this many characters of text or fewer are noise
/// (icons, empty cells).
pub const MIN_CANDIDATE_TEXT: usize = 10;

/// What the CLI does with the extracted records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Records,
    Lineup,
    Value(String),
}

#[derive(Clone)]
pub struct Params {
    pub input: Option<PathBuf>,  // saved HTML snapshot to read
    pub action: Action,
    pub out: Option<PathBuf>,    // output file; stdout when absent
    pub format: Delim,
    pub include_headers: bool,   // header row before the records
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: None,
            action: Action::Records,
            out: None,
            format: Delim::Csv,
            include_headers: false,
        }
    }
}
