//! Association lists: lists of `(key . value)` pairs where the first match wins.

use super::{bad_arg_type, eqv, is_equal, list, proper_items};
use crate::{EvalResult, Expr, ListError, Value};

/// The first entry whose key is [`is_equal`] to `key`.
pub fn assoc(key: &Value, alist: &Value) -> Result<Option<Value>, ListError> {
    assoc_by(key, alist, |key, entry_key| Ok(is_equal(key, entry_key)))
}

/// [`assoc`] using [`eqv`].
pub fn assv(key: &Value, alist: &Value) -> Result<Option<Value>, ListError> {
    assoc_by(key, alist, |key, entry_key| Ok(eqv(key, entry_key)))
}

/// [`assoc`] with a custom equality, called as `eq(key, entry_key)`.
///
/// Entries that aren't pairs are an error.
pub fn assoc_by<F>(key: &Value, alist: &Value, mut eq: F) -> Result<Option<Value>, ListError>
where
    F: FnMut(&Value, &Value) -> Result<bool, ListError>,
{
    for entry in super::iter(alist) {
        let (entry_key, _) = entry
            .split_cons()
            .ok_or_else(|| bad_arg_type(&entry, 1, "association list entry"))?;
        if eq(key, &entry_key)? {
            return Ok(Some(entry));
        }
    }
    Ok(None)
}

/// Put a new `(key . value)` entry on the front.
pub fn alist_cons(key: Value, value: Value, alist: Value) -> Value {
    Expr::pair(Expr::pair(key, value), alist)
}

/// Copy the spine and every entry pair. Keys and values are shared.
pub fn alist_copy(alist: &Value) -> EvalResult {
    let mut entries = Vec::new();
    for entry in proper_items(alist, 0)? {
        let (key, value) = entry
            .split_cons()
            .ok_or_else(|| bad_arg_type(&entry, 0, "association list entry"))?;
        entries.push(Expr::pair(key, value));
    }
    Ok(list(&entries))
}
