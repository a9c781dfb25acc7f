//! Scalar type names to XSD datatype IRIs.

use crate::model::iris::*;

/// Maps a declared type name to its `xsd:` datatype IRI.
///
/// Matching ignores case, surrounding whitespace and an `xsd:` prefix.
/// Names outside the table map to `xsd:string`.
#[must_use]
pub fn map_datatype(name: &str) -> &'static str {
    let trimmed = name.trim();
    let bare = trimmed
        .strip_prefix("xsd:")
        .or_else(|| trimmed.strip_prefix(XSD))
        .unwrap_or(trimmed);
    match bare.to_ascii_lowercase().as_str() {
        "integer" | "int" => XSD_INTEGER,
        "long" => XSD_LONG,
        "short" => XSD_SHORT,
        "byte" => XSD_BYTE,
        "nonnegativeinteger" => XSD_NON_NEGATIVE_INTEGER,
        "positiveinteger" => XSD_POSITIVE_INTEGER,
        "decimal" | "number" | "numeric" | "money" | "currency" => XSD_DECIMAL,
        "double" => XSD_DOUBLE,
        "float" => XSD_FLOAT,
        "boolean" | "bool" => XSD_BOOLEAN,
        "date" => XSD_DATE,
        "datetime" | "timestamp" => XSD_DATETIME,
        "time" => XSD_TIME,
        "uri" | "url" | "anyuri" => XSD_ANY_URI,
        "string" | "text" => XSD_STRING,
        _ => {
            if !bare.is_empty() {
                tracing::debug!(datatype = name, "unknown datatype, using xsd:string");
            }
            XSD_STRING
        }
    }
}
