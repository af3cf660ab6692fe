// src/record.rs

/// One detected player, as reported by a single candidate node.
///
/// Numeric fields are `None` when the page did not yield a usable value;
/// a present `0.0` always means a literal zero on the page. `raw_text`
/// keeps the node's flattened text verbatim for dedup fallback keys.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRecord {
    /// Stable id when the markup exposes one (data-playerid and friends).
    pub player_id: Option<String>,
    pub name: String,
    /// Position code (QB, RB, ...) or empty when undetermined.
    pub position: String,
    /// Reserved; pages rarely expose this near the player node.
    pub team: String,
    pub projected: Option<f64>,
    pub recent: Option<f64>,
    /// Average draft position; lower is better.
    pub adp: Option<f64>,
    pub raw_text: String,
}

impl PlayerRecord {
    /// Dedup key: the stable id when present, else the display name, else
    /// a prefix of the raw text. Lowercased.
    pub fn identity_key(&self) -> String {
        if let Some(id) = self.player_id.as_deref() {
            if !id.is_empty() {
                return id.to_lowercase();
            }
        }
        if !self.name.is_empty() {
            return self.name.to_lowercase();
        }
        self.raw_text.chars().take(30).collect::<String>().to_lowercase()
    }
}
