//! JSON document generation.

use crate::{error::Error, organize::JsonExport};

/// Serializes the organized JSON model with 2-space indentation.
///
/// Key order is insertion order throughout: languages as supplied, keys as
/// supplied, translations per key in language order.
pub fn generate_json(model: &JsonExport) -> Result<String, Error> {
    serde_json::to_string_pretty(model).map_err(Error::Json)
}
