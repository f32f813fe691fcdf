use secrecy::{ExposeSecret, Secret};

/// Where the credential lives and how it is compared is injected; the gate
/// itself only tracks the two states.
pub trait PasscodeCheck: Send + Sync {
    fn verify(&self, submitted: &str) -> bool;
}

/// Plaintext comparison against the single shared household passcode.
pub struct SharedPasscode(Secret<String>);

impl SharedPasscode {
    pub fn new(passcode: Secret<String>) -> Self {
        Self(passcode)
    }
}

impl PasscodeCheck for SharedPasscode {
    fn verify(&self, submitted: &str) -> bool {
        submitted == self.0.expose_secret()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

/// Two-state session gate. A correct submission flips it to `Unlocked` and
/// it stays there for the lifetime of the process; there is no lockout, no
/// rate limiting and no expiry.
pub struct SessionGate {
    state: GateState,
    check: Box<dyn PasscodeCheck>,
}

impl SessionGate {
    pub fn new(check: Box<dyn PasscodeCheck>) -> Self {
        Self {
            state: GateState::Locked,
            check,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// Returns the state after processing the submission; a mismatch leaves
    /// the gate locked.
    pub fn submit(&mut self, passcode: &str) -> GateState {
        if self.check.verify(passcode) {
            self.state = GateState::Unlocked;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SessionGate {
        SessionGate::new(Box::new(SharedPasscode::new(Secret::new(
            "Elliot".to_owned(),
        ))))
    }

    #[test]
    fn starts_locked() {
        assert!(!gate().is_unlocked());
    }

    #[test]
    fn correct_passcode_unlocks() {
        let mut gate = gate();
        assert_eq!(gate.submit("Elliot"), GateState::Unlocked);
        assert!(gate.is_unlocked());
    }

    #[test]
    fn wrong_passcode_stays_locked() {
        let mut gate = gate();
        for wrong in ["", "elliot", "Elliot ", "hunter2"] {
            assert_eq!(gate.submit(wrong), GateState::Locked);
        }
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn unlock_persists_across_later_submissions() {
        let mut gate = gate();
        gate.submit("Elliot");
        assert_eq!(gate.submit("wrong"), GateState::Unlocked);
        assert!(gate.is_unlocked());
    }
}
