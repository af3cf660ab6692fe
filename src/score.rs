// src/score.rs

use crate::record::PlayerRecord;

/// Upper bound of the trade-value scale.
pub const MAX_VALUE: f64 = 200.0;

/// Heuristic trade value in [0, 200]. Pure: the result depends only on
/// the record's projection, recent form, ADP and position.
///
/// Absent inputs default here and only here: projection to 0, recent form
/// to 60% of projection, draft-position bonus to nothing. The
/// divide/round/rescale sequence affects rounding at boundary values and
/// must stay in this exact order, clamp last.
pub fn trade_value(p: &PlayerRecord) -> f64 {
    let proj = p.projected.unwrap_or(0.0);
    let recent = p.recent.unwrap_or(proj * 0.6);

    let base = proj * 2.0;
    let recent_boost = recent * 1.5;
    let adp_factor = match p.adp {
        Some(adp) if adp > 0.0 => (100.0 - adp.min(100.0)) * 0.3,
        _ => 0.0,
    };

    let mut raw = base + recent_boost + adp_factor;
    match p.position.to_ascii_uppercase().as_str() {
        "QB" => raw *= 0.95,
        "TE" => raw *= 0.9,
        _ => {}
    }

    let normalized = (raw / 40.0 * 100.0).round();
    ((normalized * 10.0).round() / 10.0).clamp(0.0, MAX_VALUE)
}
