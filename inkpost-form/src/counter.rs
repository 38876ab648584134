//! Remaining-character accounting for the message field.

/// Maximum length of the message field, in characters.
pub const MESSAGE_MAX_CHARS: usize = 500;

/// Remaining-count threshold at or below which the counter warns.
pub const WARN_THRESHOLD: usize = 50;

/// What the inline counter should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    /// Rendered as the label's inline countdown, e.g. `(42 left)`.
    pub label: String,
    /// Apply the near-limit warning style.
    pub warning: bool,
}

/// Characters left before the limit. Lengths beyond the limit count as
/// zero remaining.
#[must_use]
pub fn remaining(max: usize, len: usize) -> usize {
    max - len.min(max)
}

/// Build the counter display for the current value.
#[must_use]
pub fn counter_view(max: usize, value: &str) -> CounterView {
    let left = remaining(max, value.chars().count());
    CounterView {
        label: format!("({left} left)"),
        warning: left <= WARN_THRESHOLD,
    }
}

/// Truncate a value that exceeds the limit (possible via paste) to exactly
/// `max` characters. Returns `None` when the value already fits.
#[must_use]
pub fn clamp_to_limit(value: &str, max: usize) -> Option<String> {
    let mut indices = value.char_indices();
    let (end, _) = indices.nth(max)?;
    Some(value[..end].to_string())
}
