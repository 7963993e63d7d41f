//! String escaping for the generated artifacts.
//!
//! `escape_dart_literal` covers exactly the one format it serves: values
//! embedded in double-quoted Dart string literals. It escapes embedded double
//! quotes and nothing else; it is not a general-purpose string-literal
//! escaper.

/// Escapes a value for embedding in a double-quoted Dart string literal.
pub fn escape_dart_literal(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Escapes a single CSV field per RFC 4180 minimal quoting.
///
/// Fields containing a comma, double quote, carriage return, or line feed get
/// embedded quotes doubled and the whole field wrapped in double quotes; all
/// other fields are returned unchanged (no forced quoting).
pub fn escape_csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
