//! Name canonicalization shared by both sides of the geocode join.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Decompose, drop combining marks, lowercase, and keep only `[a-z0-9]`.
///
/// `"Château Élan"` and `"chateau elan"` both become `"chateauelan"`.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
