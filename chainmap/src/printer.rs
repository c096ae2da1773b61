//! Text rendering of a dictionary through its read operations.

use crate::dictionary::Dictionary;
use alloc::string::String;
use core::fmt::{self, Display, Write};

/// Writes one `Key: k, Value: v` line per entry, in the dictionary's key order.
///
/// Only [`Dictionary::keys`] and [`Dictionary::get`] are used. A key that
/// disappears between the two calls is skipped.
pub fn write_dictionary<K, V, D, W>(dict: &D, out: &mut W) -> fmt::Result
where
    D: Dictionary<K, V> + ?Sized,
    K: Display,
    V: Display,
    W: Write,
{
    for key in dict.keys() {
        if let Ok(value) = dict.get(&key) {
            writeln!(out, "Key: {}, Value: {}", key, value)?;
        }
    }
    Ok(())
}

/// Renders the dictionary into a new string.
pub fn render_dictionary<K, V, D>(dict: &D) -> String
where
    D: Dictionary<K, V> + ?Sized,
    K: Display,
    V: Display,
{
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_dictionary(dict, &mut out);
    out
}
