//! Agreement gate
//!
//! The confirmation modal that intercepts submission until the creator
//! acknowledges the campaign terms. The gate never submits anything
//! itself; it reports a decision and the owner re-triggers the submit.

/// Outcome of closing the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Agreed,
    Cancelled,
}

/// Checkbox-gated confirmation modal state. Acknowledgment is scoped to one
/// submission attempt: reopening the drawer resets it.
#[derive(Clone, Debug, Default)]
pub struct AgreementGate {
    open: bool,
    acknowledged: bool,
}

impl AgreementGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Show the modal. The checkbox starts unchecked.
    pub fn open(&mut self) {
        self.open = true;
        self.acknowledged = false;
    }

    /// The checkbox.
    pub fn set_acknowledged(&mut self, checked: bool) {
        self.acknowledged = checked;
    }

    /// The primary action button; only enabled once the checkbox is
    /// checked. Agreeing closes the modal and keeps the acknowledgment so
    /// the owner's re-triggered submit passes the gate.
    pub fn confirm(&mut self) -> GateDecision {
        if !self.acknowledged {
            return GateDecision::Cancelled;
        }
        self.open = false;
        GateDecision::Agreed
    }

    /// Dismiss: discard the acknowledgment and close.
    pub fn cancel(&mut self) -> GateDecision {
        self.open = false;
        self.acknowledged = false;
        GateDecision::Cancelled
    }

    /// Reset for a new submission attempt (drawer reopened).
    pub fn reset(&mut self) {
        self.open = false;
        self.acknowledged = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_requires_checkbox() {
        let mut gate = AgreementGate::new();
        gate.open();
        assert_eq!(gate.confirm(), GateDecision::Cancelled);
        assert!(gate.is_open());

        gate.set_acknowledged(true);
        assert_eq!(gate.confirm(), GateDecision::Agreed);
        assert!(!gate.is_open());
        assert!(gate.acknowledged());
    }

    #[test]
    fn test_cancel_resets_checkbox() {
        let mut gate = AgreementGate::new();
        gate.open();
        gate.set_acknowledged(true);
        assert_eq!(gate.cancel(), GateDecision::Cancelled);
        assert!(!gate.acknowledged());
    }

    #[test]
    fn test_reopen_clears_prior_acknowledgment() {
        let mut gate = AgreementGate::new();
        gate.open();
        gate.set_acknowledged(true);
        gate.confirm();

        gate.open();
        assert!(!gate.acknowledged());
    }
}
