//! Inkpost Form Engine
//!
//! Platform-agnostic logic for the Inkpost contact form: declarative
//! field rules with a pure validator, the name-field character mask, the
//! message character counter, the session diagnostic log, and the theme
//! preference model. No DOM and no platform dependencies; the web crate
//! wires these into events and storage.

pub mod counter;
pub mod diag;
pub mod field;
pub mod form;
pub mod mask;
pub mod theme;

// Re-export commonly used types
pub use counter::{CounterView, MESSAGE_MAX_CHARS, WARN_THRESHOLD, clamp_to_limit, counter_view};
pub use diag::{DiagnosticsError, ErrorRecord, SessionLog};
pub use field::{FieldId, FieldRule, Validity, rule_for, validate};
pub use form::{ContactForm, InputOutcome, SubmitReport};
pub use mask::{FLASH_MS, ILLEGAL_CHAR_MESSAGE, MaskOutcome, is_masked_clean, mask_name};
pub use theme::{PreferenceStore, THEME_STORAGE_KEY, ThemePreference};
