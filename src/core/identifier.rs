//! Product identifier generation.
//!
//! Identifiers have the form `<PREFIX>-<8 hex chars>`: the prefix is the first
//! three characters of the category name, uppercased, and the suffix is drawn
//! from a v4 UUID. This is a pure function of the category and the randomness
//! source - no store access, no uniqueness registry. 32 bits of suffix entropy
//! make collisions negligible at realistic catalog sizes; the store still
//! rejects a colliding insert rather than overwriting.

use uuid::Uuid;

/// Number of random hex characters after the prefix.
const SUFFIX_LEN: usize = 8;

/// Generates a category-prefixed product identifier, e.g. `HON-1a2b3c4d`.
///
/// Category names shorter than three characters simply produce a shorter
/// prefix (cannot happen with the fixed category enumeration).
#[must_use]
pub fn generate_product_id(category: &str) -> String {
    let prefix: String = category.chars().take(3).collect::<String>().to_uppercase();
    let hex = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &hex[..SUFFIX_LEN])
}
