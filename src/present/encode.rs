// src/present/encode.rs
//! The two export encodings.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::{config::consts::CSV_HEADER, error::Result, order::OrderRecord};

/// Pretty-printed JSON array, two-space indent.
pub fn to_json(records: &[OrderRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Header line, then one row per record with every field quoted.
/// Rows are `\n`-separated with no trailing newline; embedded quotes are
/// doubled.
pub fn to_csv(records: &[OrderRecord]) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for r in records {
        wtr.write_record(r.cells())?;
    }
    let body = wtr.into_inner().map_err(|e| e.into_error())?;
    let body = String::from_utf8_lossy(&body);

    let mut out = CSV_HEADER.join(",");
    out.push('\n');
    out.push_str(body.strip_suffix('\n').unwrap_or(&body));
    Ok(out)
}
