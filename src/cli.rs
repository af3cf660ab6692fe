// src/cli.rs
use std::{env, fs, path::PathBuf};

use color_eyre::eyre::{Result, bail, eyre};

use crate::csv::{self, Delim};
use crate::lineup;
use crate::params::{Action, Params};
use crate::pipeline;
use crate::record::PlayerRecord;
use crate::score::trade_value;

pub fn run() -> Result<()> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let input = params
        .input
        .clone()
        .ok_or_else(|| eyre!("Missing --input <file> (see --help)"))?;
    let html = fs::read_to_string(&input)?;
    logf!("Read {} bytes from {}", html.len(), input.display());

    let records = pipeline::extract_players_from(&html);
    logf!("Extracted {} records", records.len());

    let output = match &params.action {
        Action::Records => render_records(&records, &params),
        Action::Lineup => render_lineup(&records),
        Action::Value(name) => match lineup::lookup_value(&records, name) {
            Some(v) => format!("Trade value: {v}\n"),
            None => s!("Value not found\n"),
        },
    };

    match &params.out {
        Some(path) => fs::write(path, output)?,
        None => print!("{output}"),
    }
    Ok(())
}

fn render_records(records: &[PlayerRecord], params: &Params) -> String {
    let headers = params.include_headers.then(|| {
        ["Name", "Pos", "Team", "Id", "Proj", "Recent", "ADP", "Value"]
            .iter()
            .map(|h| s!(*h))
            .collect::<Vec<_>>()
    });
    let rows: Vec<Vec<String>> = records.iter().map(record_row).collect();
    csv::rows_to_string(&rows, &headers, params.format.sep())
}

/// Absent numerics render as empty cells, not zeros.
fn record_row(p: &PlayerRecord) -> Vec<String> {
    fn num(v: Option<f64>) -> String {
        v.map(|n| n.to_string()).unwrap_or_default()
    }
    vec![
        p.name.clone(),
        p.position.clone(),
        p.team.clone(),
        p.player_id.clone().unwrap_or_default(),
        num(p.projected),
        num(p.recent),
        num(p.adp),
        trade_value(p).to_string(),
    ]
}

fn render_lineup(records: &[PlayerRecord]) -> String {
    let mut out = s!();
    for (slot, names) in lineup::group_by_slot(records) {
        if names.is_empty() {
            out.push_str(&format!("{slot}: none found\n"));
        } else {
            out.push_str(&format!("{slot}: {}\n", names.join(", ")));
        }
    }
    out
}

fn parse_cli(params: &mut Params) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --input"))?;
                params.input = Some(PathBuf::from(v));
            }
            "--lineup" => params.action = Action::Lineup,
            "--value" => {
                let v = args.next().ok_or_else(|| eyre!("Missing player name for --value"))?;
                params.action = Action::Value(v);
            }
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| eyre!("Missing output path"))?;
                params.out = Some(PathBuf::from(v));
            }
            "--format" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --format"))?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => bail!("Unknown format: {other}"),
                };
            }
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {a}"),
        }
    }
    Ok(())
}
