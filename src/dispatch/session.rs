use uuid::Uuid;

/// Mutable state of one voice session, passed explicitly into every
/// dispatch, never a global. Lifecycle matches the listening session:
/// restarting listening builds a fresh one.
#[derive(Debug)]
pub struct DispatchSession {
    pub id: Uuid,
    consecutive_errors: u32,
    /// Current item for list navigation. Single-writer: only the list
    /// commands touch it.
    pub list_cursor: usize,
    /// Last feedback sentence, for the repeat command.
    pub last_spoken: Option<String>,
}

impl DispatchSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            consecutive_errors: 0,
            list_cursor: 0,
            last_spoken: None,
        }
    }

    /// Record a failed dispatch. Returns true exactly when this failure
    /// is the third consecutive one: the caller upgrades its feedback
    /// with the help hint and the counter is already back at zero, so
    /// escalation fires at most once per three consecutive failures.
    pub fn record_failure(&mut self) -> bool {
        self.consecutive_errors += 1;
        if self.consecutive_errors >= 3 {
            self.consecutive_errors = 0;
            true
        } else {
            false
        }
    }

    pub fn record_success(&mut self) {
        self.consecutive_errors = 0;
    }

    pub fn consecutive_errors(&self) -> u32 {
        self.consecutive_errors
    }
}

impl Default for DispatchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escalates_on_third_and_resets() {
        let mut session = DispatchSession::new();
        assert!(!session.record_failure());
        assert!(!session.record_failure());
        assert!(session.record_failure(), "third consecutive failure escalates");
        assert_eq!(session.consecutive_errors(), 0, "counter resets right after firing");
        // The cycle starts over.
        assert!(!session.record_failure());
    }

    #[test]
    fn success_resets_the_run() {
        let mut session = DispatchSession::new();
        session.record_failure();
        session.record_failure();
        session.record_success();
        assert_eq!(session.consecutive_errors(), 0);
        assert!(!session.record_failure());
        assert!(!session.record_failure());
    }
}
