//! Tabular (CSV) export of a projection timeline

use csv::{Terminator, WriterBuilder};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::projection::TimelineRow;

/// Column headers, in output order
pub const CSV_HEADER: [&str; 4] = ["Year", "InvestedCapital", "NominalValue", "RealValue"];

/// Write the header and one line per row, in the order given
///
/// Values are the already-rounded integers from the rows.
pub fn write_timeline_csv<W: Write>(writer: W, rows: &[TimelineRow]) -> Result<(), ExportError> {
    let mut csv = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(CSV_HEADER)?;
    for row in rows {
        csv.write_record([
            row.year.to_string(),
            row.invested_capital.to_string(),
            row.nominal_value.to_string(),
            row.real_value.to_string(),
        ])?;
    }
    csv.flush()?;

    Ok(())
}

/// Render the timeline as a CSV string
pub fn timeline_csv_string(rows: &[TimelineRow]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_timeline_csv(&mut buffer, rows)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the timeline to a CSV file
pub fn export_timeline_csv<P: AsRef<Path>>(
    path: P,
    rows: &[TimelineRow],
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_timeline_csv(BufWriter::new(file), rows)?;
    info!("timeline ({} rows) written to {}", rows.len(), path.display());
    Ok(())
}
