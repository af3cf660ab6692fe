// tests/extract_pipeline.rs
//
// End-to-end pipeline checks over small HTML snapshots: locate, parse,
// reconcile, score.

use ff_scrape::pipeline::extract_players_from;
use ff_scrape::score::trade_value;

#[test]
fn roster_row_parses_every_field() {
    let page = r#"
        <html><body><table>
          <tr class="playerRow">
            <td>Patrick Mahomes</td>
            <td>QB</td>
            <td>Proj: 24.5</td>
            <td>Week1: 18</td>
            <td>ADP: 3</td>
          </tr>
        </table></body></html>
    "#;

    let records = extract_players_from(page);
    assert_eq!(records.len(), 1);

    let p = &records[0];
    assert_eq!(p.name, "Patrick Mahomes");
    assert_eq!(p.position, "QB");
    assert_eq!(p.projected, Some(24.5));
    assert_eq!(p.recent, Some(18.0));
    assert_eq!(p.adp, Some(3.0));

    // 24.5*2 + 18*1.5 + (100-3)*0.3, QB-adjusted and rescaled, lands far
    // above the cap.
    assert_eq!(trade_value(p), 200.0);
}

#[test]
fn duplicate_detections_keep_the_higher_projection() {
    let page = r#"
        <html><body>
          <div class="PlayerCard">
            <span class="playerName">Travis Kelce</span>
            <div>Proj: 12</div>
          </div>
          <div class="PlayerCard">
            <span class="playerName">Travis Kelce</span>
            <div>Proj: 15</div>
          </div>
        </body></html>
    "#;

    let records = extract_players_from(page);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Travis Kelce");
    assert_eq!(records[0].projected, Some(15.0));
}

#[test]
fn shared_player_id_collapses_despite_different_names() {
    let page = r#"
        <html><body><table>
          <tr class="playerRow" data-playerid="p123">
            <td>Pat Mahomes</td><td>QB</td><td>Proj: 20</td>
          </tr>
          <tr class="playerRow" data-playerid="p123">
            <td>Patrick Mahomes</td><td>QB</td><td>Proj: 24.5</td>
          </tr>
        </table></body></html>
    "#;

    let records = extract_players_from(page);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Patrick Mahomes");
    assert_eq!(records[0].projected, Some(24.5));
}

#[test]
fn numberless_node_has_absent_fields_and_scores_zero() {
    let page = r#"
        <html><body><ul>
          <li class="playerListItem">Mystery Practice Squad Guy</li>
        </ul></body></html>
    "#;

    let records = extract_players_from(page);
    assert_eq!(records.len(), 1);

    let p = &records[0];
    assert_eq!(p.name, "Mystery Practice Squad Guy");
    assert_eq!(p.position, "");
    assert_eq!(p.projected, None);
    assert_eq!(p.recent, None);
    assert_eq!(p.adp, None);
    assert_eq!(trade_value(p), 0.0);
}

#[test]
fn textual_fallback_recovers_drifted_markup() {
    // No known row/card class anywhere; the position token is the only
    // signal that this div is a candidate.
    let page = r#"
        <html><body>
          <div class="rosterLine">Josh Allen QB Proj: 22.1</div>
        </body></html>
    "#;

    let records = extract_players_from(page);
    assert_eq!(records.len(), 1);

    let p = &records[0];
    assert_eq!(p.position, "QB");
    assert_eq!(p.projected, Some(22.1));
    // The recent-form heuristic takes the first number it sees, which
    // here is the projection again. Known imprecision, kept as is.
    assert_eq!(p.recent, Some(22.1));
}

#[test]
fn empty_page_yields_empty_set_not_an_error() {
    let records = extract_players_from("<html><body><p>nothing to see</p></body></html>");
    assert!(records.is_empty());
}

#[test]
fn output_never_exceeds_the_record_cap() {
    let mut page = String::from("<html><body><table>");
    for i in 0..450 {
        page.push_str(&format!(
            r#"<tr class="playerRow" data-playerid="id{i}">
                 <td>Bench Player Somebody</td><td>RB</td><td>Proj: 4</td>
               </tr>"#
        ));
    }
    page.push_str("</table></body></html>");

    let records = extract_players_from(&page);
    assert_eq!(records.len(), 400);
}
