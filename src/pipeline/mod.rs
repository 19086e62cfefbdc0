// Cleaning pipeline: parse, normalize, dedupe, impute, filter, serialize.

pub mod dedupe;
pub mod impute;
pub mod normalize;
pub mod parse;
pub mod serialize;
pub mod table;

use crate::error::Result;
use crate::report::CleaningReport;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Output of one cleaning run: the serialized table and its report.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub cleaned: Vec<u8>,
    pub report: CleaningReport,
}

/// Runs the full cleaning pipeline over one raw CSV buffer.
///
/// Stateless and synchronous: the outcome is fully determined by the
/// input bytes and the dropped-column set, so concurrent callers need no
/// coordination. `drop_columns` must hold normalized names; entries not
/// present in the table are ignored.
#[instrument(skip(raw, drop_columns), fields(input_bytes = raw.len()))]
pub fn clean(raw: &[u8], drop_columns: &HashSet<String>) -> Result<CleanOutcome> {
    let mut table = parse::parse_table(raw)?;
    let original_shape = table.shape();
    debug!(rows = original_shape.rows, cols = original_shape.cols, "parsed input");

    normalize::normalize_headers(&mut table);
    let dropped_columns = normalize::drop_columns(&mut table, drop_columns);
    let duplicate_rows = dedupe::drop_duplicate_rows(&mut table);
    impute::impute_missing(&mut table);
    let empty_rows = dedupe::drop_empty_rows(&mut table);

    let cleaned = serialize::write_table(&table)?;
    let report = CleaningReport::from_table(original_shape, &table);

    info!(
        rows = report.cleaned_shape.rows,
        cols = report.cleaned_shape.cols,
        dropped_columns,
        duplicate_rows,
        empty_rows,
        "cleaning finished"
    );
    Ok(CleanOutcome { cleaned, report })
}
