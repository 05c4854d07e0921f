use anyhow::{Context, Result, bail};
use itertools::Itertools;
use log::{debug, warn};
use nestplot::entities::{Bin, PieceId, PlacementRecord};

use crate::io::shapes::parse_finite;

/// Parses a positions file in which every bin starts with the number of records it holds.
///
/// Records are `id rotation x y`. Lines with fewer than four tokens count towards the
/// announced number of records but are ignored, as are malformed records.
/// Bins without any valid record are dropped, the remaining bins are numbered from 1.
pub fn parse_counted_positions(content: &str) -> Vec<Bin> {
    let lines = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect_vec();

    let mut bins = vec![];
    let mut idx = 0;
    while idx < lines.len() {
        let Ok(n_records) = lines[idx].parse::<usize>() else {
            debug!("[POS] expected a record count, skipping line: {:?}", lines[idx]);
            idx += 1;
            continue;
        };
        idx += 1;

        let mut records = vec![];
        for _ in 0..n_records {
            let Some(line) = lines.get(idx) else {
                break;
            };
            idx += 1;
            let tokens = line.split_whitespace().collect_vec();
            if tokens.len() < 4 {
                continue;
            }
            let record = tokens[0]
                .parse::<usize>()
                .context("invalid piece index")
                .and_then(|i| parse_record(PieceId::Index(i), &tokens[1..4]));
            match record {
                Ok(record) => records.push(record),
                Err(e) => warn!("[POS] malformed record skipped: {line:?}, {e}"),
            }
        }
        if !records.is_empty() {
            bins.push(Bin::new(bins.len() + 1, records));
        }
    }
    bins
}

/// Parses a positions file in which every line holding a single integer starts a new bin.
///
/// Records are `name rotation x y`, lines which do not match are ignored.
/// Bins without any record are dropped, the remaining bins are numbered from 1.
pub fn parse_headered_positions(content: &str) -> Vec<Bin> {
    let mut bins: Vec<Bin> = vec![];
    let mut records = vec![];

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let tokens = line.split_whitespace().collect_vec();
        match tokens.as_slice() {
            [header] if header.parse::<i64>().is_ok() => flush(&mut records, &mut bins),
            [name, fields @ ..] if fields.len() >= 3 => {
                match parse_record(PieceId::Name(name.to_string()), &fields[..3]) {
                    Ok(record) => records.push(record),
                    Err(e) => debug!("[POS] malformed record skipped: {line:?}, {e}"),
                }
            }
            _ => debug!("[POS] line ignored: {line:?}"),
        }
    }
    flush(&mut records, &mut bins);
    bins
}

fn flush(records: &mut Vec<PlacementRecord>, bins: &mut Vec<Bin>) {
    if !records.is_empty() {
        bins.push(Bin::new(bins.len() + 1, std::mem::take(records)));
    }
}

/// `rotation x y`
fn parse_record(piece_id: PieceId, fields: &[&str]) -> Result<PlacementRecord> {
    let [rotation, x, y] = fields else {
        bail!("expected rotation, x and y, found: {fields:?}");
    };
    PlacementRecord::new(
        piece_id,
        parse_number(rotation)?,
        parse_number(x)?,
        parse_number(y)?,
    )
}

fn parse_number(token: &str) -> Result<f64> {
    parse_finite(token).with_context(|| format!("invalid number: {token:?}"))
}
