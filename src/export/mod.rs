//! Export adapters consuming finished projections
//!
//! None of these feed back into the engine; they only read a
//! [`ProjectionResult`](crate::projection::ProjectionResult).

mod document;
pub mod format;
mod tabular;

pub use document::{DocumentExporter, DEFAULT_TITLE};
pub use format::{format_compact, format_currency, format_percent, CurrencyFormat};
pub use tabular::{export_timeline_csv, timeline_csv_string, write_timeline_csv, CSV_HEADER};
