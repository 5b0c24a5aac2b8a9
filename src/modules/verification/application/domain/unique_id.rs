use regex::Regex;
use std::sync::LazyLock;

pub const UNIQUE_ID_PREFIX: &str = "VU-";
pub const UNIQUE_ID_SUFFIX_LEN: usize = 6;
pub const UNIQUE_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

static UNIQUE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^VU-[A-Z0-9]{6}$").expect("unique id pattern is a valid regex")
});

/// True when `token` has the shape of a freshly issued public token.
///
/// Imported snapshots may carry tokens of other shapes; lookups never
/// require this to hold.
pub fn is_well_formed(token: &str) -> bool {
    UNIQUE_ID_PATTERN.is_match(token)
}
