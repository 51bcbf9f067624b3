//! HURDAT2 style track files.
//!
//! A file is a run of storm blocks: a header line (`AL012020, NAME, fixes,`) followed by
//! the data lines of that storm. Lines are scanned from the bottom up, data lines pile up
//! until the header that owns them shows up, and are flushed into a profile at that point.

use std::fs;
use std::ops::Range;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{Error, Result};
use crate::geodesy::{parse_degrees, LatLon};
use crate::models::{StormProfile, TrackRecord};

const HEADER_FIELDS: usize = 2;
const DATA_FIELDS: usize = 20;
/// Radii of 64 kt winds, NE/SE/SW/NW.
const QUADRANT_RADII: Range<usize> = 16..20;

/// Parse every file in order, concatenating their storms.
pub fn parse<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<StormProfile>> {
    let mut storms = Vec::new();
    for path in paths {
        storms.extend(parse_file(path.as_ref())?);
    }
    Ok(storms)
}

pub fn parse_file(path: &Path) -> Result<Vec<StormProfile>> {
    let text = fs::read_to_string(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(path, &text)
}

/// Parse already loaded file contents. `path` only shows up in errors.
///
/// Data lines that come before the first header of the file have no storm to belong to
/// and fail the parse.
pub fn parse_str(path: &Path, text: &str) -> Result<Vec<StormProfile>> {
    let mut storms = Vec::new();
    let mut route = Vec::new();
    let mut earliest_fix_line = 0;

    let lines: Vec<&str> = text.lines().collect();
    for (index, line) in lines.into_iter().enumerate().rev() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let malformed = |reason: String| Error::MalformedInput {
            path: path.to_path_buf(),
            line: line_number,
            reason,
        };
        let fields = split_fields(line);

        if is_header(line) {
            let (id, name) = parse_header(&fields).map_err(malformed)?;
            let mut fixes = std::mem::take(&mut route);
            fixes.reverse();
            storms.push(StormProfile {
                id,
                name,
                route: fixes,
            });
        } else {
            route.push(parse_record(&fields).map_err(malformed)?);
            earliest_fix_line = line_number;
        }
    }

    if !route.is_empty() {
        return Err(Error::MalformedInput {
            path: path.to_path_buf(),
            line: earliest_fix_line,
            reason: format!("{} track record(s) before the first storm header", route.len()),
        });
    }

    storms.reverse();
    log::debug!("Parsed {} storms from {}", storms.len(), path.display());
    Ok(storms)
}

fn is_header(line: &str) -> bool {
    line.chars().next().map_or(false, char::is_alphabetic)
}

fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').map(str::trim).collect();
    // lines end with a comma
    if fields.len() > 1 && fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}

fn parse_header(fields: &[&str]) -> std::result::Result<(String, String), String> {
    if fields.len() < HEADER_FIELDS {
        return Err(format!(
            "storm header needs an identifier and a name, found {} field(s)",
            fields.len()
        ));
    }
    if fields[0].is_empty() {
        return Err("storm header has an empty identifier".to_string());
    }
    Ok((fields[0].to_string(), fields[1].to_string()))
}

fn parse_record(fields: &[&str]) -> std::result::Result<TrackRecord, String> {
    if fields.len() < DATA_FIELDS {
        return Err(format!(
            "track record needs at least {} fields, found {}",
            DATA_FIELDS,
            fields.len()
        ));
    }

    let date = NaiveDate::parse_from_str(fields[0], "%Y%m%d")
        .map_err(|e| format!("invalid date {:?}: {}", fields[0], e))?;
    let time = NaiveTime::parse_from_str(fields[1], "%H%M")
        .map_err(|e| format!("invalid time {:?}: {}", fields[1], e))?;

    let latitude = parse_degrees(fields[4], 'N', 'S')
        .ok_or_else(|| format!("invalid latitude {:?}", fields[4]))?;
    let longitude = parse_degrees(fields[5], 'E', 'W')
        .ok_or_else(|| format!("invalid longitude {:?}", fields[5]))?;
    LatLon::new(latitude, longitude).map_err(|e| e.to_string())?;

    let max_sustained_wind = fields[6]
        .parse()
        .map_err(|_| format!("invalid maximum sustained wind {:?}", fields[6]))?;

    let mut quadrant_radii = [0.0; 4];
    for (radius, raw) in quadrant_radii.iter_mut().zip(&fields[QUADRANT_RADII]) {
        *radius = raw
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite())
            .ok_or_else(|| format!("invalid wind radius {:?}", raw))?;
    }

    let extra = fields[7..QUADRANT_RADII.start]
        .iter()
        .chain(&fields[QUADRANT_RADII.end..])
        .map(|f| f.to_string())
        .collect();

    Ok(TrackRecord {
        date,
        time,
        record_identifier: fields[2].to_string(),
        status: fields[3].to_string(),
        latitude,
        longitude,
        max_sustained_wind,
        quadrant_radii,
        extra,
    })
}
