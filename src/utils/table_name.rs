//! Validation and quoting of configured SQL table names.
//!
//! Table names come from configuration and are interpolated into SQL, so
//! only plain identifiers, optionally schema-qualified, are accepted.

use regex::Regex;
use std::sync::LazyLock;

static TABLE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}(\.[A-Za-z_][A-Za-z0-9_]{0,62})?$").unwrap()
});

/// Returns `true` for `table` or `schema.table` made of ASCII identifier
/// characters, each part at most 63 bytes (PostgreSQL's limit).
pub fn is_valid_table_name(name: &str) -> bool {
    TABLE_NAME_REGEX.is_match(name)
}

/// Quotes each part of a validated table name, e.g.
/// `public.daily_visits` -> `"public"."daily_visits"`.
///
/// Returns `None` if the name is not valid.
pub fn quote_table_name(name: &str) -> Option<String> {
    if !is_valid_table_name(name) {
        return None;
    }

    Some(
        name.split('.')
            .map(|part| format!("\"{part}\""))
            .collect::<Vec<_>>()
            .join("."),
    )
}
