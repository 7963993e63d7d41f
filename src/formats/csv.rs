//! CSV table generation.
//!
//! The output is specified byte-by-byte (minimal quoting, `\n` row separator,
//! no trailing newline), so rows are assembled by hand rather than through a
//! CSV writer. Any RFC 4180 reader parses the result back losslessly; the
//! test suite uses the `csv` crate as that oracle.

use crate::escape::escape_csv_field;

/// Renders organized rows as a CSV document.
pub fn generate_csv(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| escape_csv_field(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
