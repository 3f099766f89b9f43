//! Contact form submit cycle.
//!
//! Nothing is sent anywhere: a submit logs the fields, shows a sending
//! state, then a confirmation, then returns to idle.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Time spent in the sending state.
pub const SENDING_MS: u32 = 1500;

/// Time the confirmation stays on the button.
pub const SENT_MS: u32 = 3000;

pub const IDLE_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Message Sent Successfully!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    phase: Phase,
    /// Bumped when the form fields should be cleared.
    pub reset_seq: u64,
}

impl ContactForm {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => IDLE_LABEL,
            Phase::Sending => SENDING_LABEL,
            Phase::Sent => SENT_LABEL,
        }
    }

    #[must_use]
    pub fn button_disabled(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Start a submit. Ignored unless idle.
    pub fn submit(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Sending;
        true
    }

    /// Sending delay elapsed: confirm and clear the form.
    pub fn sent(&mut self) {
        if self.phase == Phase::Sending {
            self.phase = Phase::Sent;
            self.reset_seq += 1;
        }
    }

    /// Confirmation delay elapsed.
    pub fn restore(&mut self) {
        if self.phase == Phase::Sent {
            self.phase = Phase::Idle;
        }
    }
}

/// Whether the form fields should be cleared, given the `reset_seq` seen on
/// the previous run and the current one. Phase changes leave the sequence
/// alone, so they never clear the fields.
#[must_use]
pub fn reset_due(previous: Option<u64>, current: u64) -> bool {
    current != 0 && previous != Some(current)
}
