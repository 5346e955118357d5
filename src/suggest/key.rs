//! Cache key derivation for popular-word requests.

/// Separates the five key segments (seed plus the four set dimensions).
/// Tag, role, field, and exclude values never contain a newline, so
/// segments cannot bleed into each other.
const KEY_DELIMITER: char = '\n';

/// Derive the canonical cache key for a popular-word request.
///
/// Each set-valued dimension is sorted lexicographically before joining,
/// so callers may supply values in any order and still land on the same
/// key. An absent seed contributes an empty first segment.
///
/// Values within one dimension are concatenated with no inner separator,
/// so distinct sets can collapse to the same segment (`["ab", "c"]` and
/// `["a", "bc"]` both flatten to `"abc"`). Accepted: the key only indexes
/// the cache, and a collision costs a shared entry, not an error.
pub fn cache_key(
    seed: Option<&str>,
    tags: &[String],
    roles: &[String],
    fields: &[String],
    excludes: &[String],
) -> String {
    let mut key = String::with_capacity(96);
    key.push_str(seed.unwrap_or_default());
    for dimension in [tags, roles, fields, excludes] {
        key.push(KEY_DELIMITER);
        let mut values: Vec<&str> = dimension.iter().map(String::as_str).collect();
        values.sort_unstable();
        for value in values {
            key.push_str(value);
        }
    }
    key
}
