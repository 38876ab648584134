//! The contact-form engine.
//!
//! Owns the three field values, their validation state, and the session
//! diagnostic log. UI layers feed it the named events (input-changed,
//! focus-lost, submit-attempted) and read back what to display; nothing
//! in here touches a DOM.

use crate::counter::{MESSAGE_MAX_CHARS, clamp_to_limit};
use crate::diag::{DiagnosticsError, SessionLog};
use crate::field::{FieldId, FieldRule, Validity, rule_for, validate};
use crate::mask::{ILLEGAL_CHAR_MESSAGE, MaskOutcome, mask_name};

/// One field's slot in the form: its rule, current value, and state.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSlot {
    rule: FieldRule,
    value: String,
    validity: Validity,
}

impl FieldSlot {
    fn new(field: FieldId) -> Self {
        Self {
            rule: rule_for(field),
            value: String::new(),
            validity: Validity::Untouched,
        }
    }

    fn revalidate(&mut self) -> Validity {
        self.validity = match validate(&self.rule, &self.value) {
            Ok(()) => Validity::Valid,
            Err(msg) => Validity::Invalid(msg),
        };
        self.validity
    }
}

/// What the UI should do after an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOutcome {
    /// The value to reflect back into the control (masking or clamping
    /// may have rewritten what the user typed).
    pub value: String,
    /// Apply the transient rejected-keystroke flash to the field.
    pub flash: bool,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReport {
    /// Submission may proceed; false means gating cancelled it.
    pub accepted: bool,
}

/// Headless state of the contact form for one page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    name: FieldSlot,
    email: FieldSlot,
    message: FieldSlot,
    log: SessionLog,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(SessionLog::new())
    }
}

impl ContactForm {
    /// Create a form wired to an explicitly owned session log.
    #[must_use]
    pub fn new(log: SessionLog) -> Self {
        Self {
            name: FieldSlot::new(FieldId::Name),
            email: FieldSlot::new(FieldId::Email),
            message: FieldSlot::new(FieldId::Message),
            log,
        }
    }

    fn slot(&self, field: FieldId) -> &FieldSlot {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut FieldSlot {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        }
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        &self.slot(field).value
    }

    /// Current lifecycle state of a field.
    #[must_use]
    pub fn validity(&self, field: FieldId) -> Validity {
        self.slot(field).validity
    }

    /// The accumulated diagnostic log.
    #[must_use]
    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Reset the session log without touching field state.
    pub fn reset_log(&mut self) {
        self.log.clear();
    }

    /// Serialize the whole diagnostic history for the hidden field.
    ///
    /// # Errors
    /// Returns [`DiagnosticsError`] if JSON encoding fails.
    pub fn diagnostics(&self) -> Result<String, DiagnosticsError> {
        self.log.to_json()
    }

    /// Handle a value change in a field.
    ///
    /// The name field runs the character mask first: a rejected value is
    /// stripped of its last character, flashed, and logged. The message
    /// field is clamped to [`MESSAGE_MAX_CHARS`]. The field is then
    /// revalidated against its rule.
    pub fn input_changed(&mut self, field: FieldId, typed: String, now: &str) -> InputOutcome {
        let mut value = typed;
        let mut flash = false;

        if field == FieldId::Name {
            if let MaskOutcome::Rejected { masked } = mask_name(&value) {
                value = masked;
                flash = true;
                // The record carries the corrected value, not the raw
                // keystroke.
                self.log.record(field, &value, ILLEGAL_CHAR_MESSAGE, now);
            }
        }
        if field == FieldId::Message {
            if let Some(clamped) = clamp_to_limit(&value, MESSAGE_MAX_CHARS) {
                value = clamped;
            }
        }

        let slot = self.slot_mut(field);
        slot.value.clone_from(&value);
        slot.revalidate();

        InputOutcome { value, flash }
    }

    /// Handle a field losing focus: revalidate and log a record when the
    /// field is invalid.
    pub fn focus_lost(&mut self, field: FieldId, now: &str) {
        let validity = self.slot_mut(field).revalidate();
        if let Validity::Invalid(msg) = validity {
            let value = self.slot(field).value.clone();
            self.log.record(field, &value, msg, now);
        }
    }

    /// Message for the shared status line: the first currently-invalid
    /// field in fixed order [name, email, message], or `None` when every
    /// field's value passes its rule.
    ///
    /// Evaluated from current values rather than the per-field lifecycle
    /// state, so an untouched empty required field still surfaces its
    /// message once any event triggers a repaint.
    #[must_use]
    pub fn first_error(&self) -> Option<&'static str> {
        FieldId::SCAN_ORDER.iter().find_map(|&field| {
            let slot = self.slot(field);
            validate(&slot.rule, &slot.value).err()
        })
    }

    /// Handle a submit attempt: revalidate every field, log a record per
    /// invalid field, and report whether submission may proceed.
    ///
    /// The diagnostic payload is written on every attempt, accepted or
    /// blocked; callers snapshot it via [`Self::diagnostics`].
    pub fn submit(&mut self, now: &str) -> SubmitReport {
        let mut accepted = true;
        for field in FieldId::SCAN_ORDER {
            if let Validity::Invalid(msg) = self.slot_mut(field).revalidate() {
                accepted = false;
                let value = self.slot(field).value.clone();
                self.log.record(field, &value, msg, now);
            }
        }
        SubmitReport { accepted }
    }
}
