//! Parser for the `Key: ... Value: ...` text dump

use std::collections::BTreeMap;
use tracing::debug;

/// Marker that starts every entry
pub const KEY_MARKER: &str = "Key:";

/// Marker separating an entry's key from its value
pub const VALUE_MARKER: &str = "Value:";

/// Split a raw dump into a key -> value map
///
/// Segments are delimited by `Key:`. A segment becomes an entry only when it
/// contains exactly one `Value:`; anything else is dropped without error.
/// Later duplicates of a key overwrite earlier ones.
#[must_use]
pub fn parse_entries(text: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    let mut skipped = 0_usize;

    for segment in text.split(KEY_MARKER) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let parts: Vec<&str> = segment.split(VALUE_MARKER).collect();
        if let [key, value] = parts.as_slice() {
            entries.insert(key.trim().to_owned(), value.trim().to_owned());
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        debug!("Skipped {skipped} malformed segment(s)");
    }

    entries
}
