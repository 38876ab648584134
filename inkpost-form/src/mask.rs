//! Character masking for the name field.

use once_cell::sync::Lazy;
use regex::Regex;

/// Diagnostic message logged whenever the mask rejects a keystroke.
pub const ILLEGAL_CHAR_MESSAGE: &str = "Illegal character typed";

/// How long the rejected-input flash stays on the field, in milliseconds.
pub const FLASH_MS: i32 = 200;

/// Characters a name may contain: letters, spaces, hyphens, apostrophes.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z '\-]*$").expect("name pattern must compile"));

/// Result of running the mask over a freshly edited value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskOutcome {
    /// The whole value matches the allowed pattern; leave it alone.
    Accepted,
    /// The value was rejected; `masked` is the value with its last
    /// character stripped.
    Rejected { masked: String },
}

/// Test `value` against the allowed name pattern and, on failure, strip
/// the last character.
///
/// Only the most recently typed character is assumed responsible; the
/// stripped value is not re-verified. A paste containing several illegal
/// characters is therefore corrected one trailing character per input
/// event, exactly as each keystroke arrives.
#[must_use]
pub fn mask_name(value: &str) -> MaskOutcome {
    if NAME_PATTERN.is_match(value) {
        return MaskOutcome::Accepted;
    }
    let masked = match value.char_indices().next_back() {
        Some((idx, _)) => value[..idx].to_string(),
        None => String::new(),
    };
    MaskOutcome::Rejected { masked }
}

/// Whether a value satisfies the name character pattern.
#[must_use]
pub fn is_masked_clean(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}
