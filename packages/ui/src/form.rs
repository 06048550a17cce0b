/// Where a form submission currently stands.
///
/// One value models both the "submitting" flag and the error message, so
/// the two can never disagree (no error shown while a request is in
/// flight, no spinner left behind an error).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// Nothing has been attempted yet.
    #[default]
    Idle,
    /// Client-side checks are running; any prior error is cleared.
    Validating,
    /// The request is on the wire.
    Submitting,
    /// The attempt failed; the message is shown verbatim.
    Error(String),
    /// The server accepted the submission. Terminal, the view navigates away.
    Success,
}

impl SubmitState {
    /// True while the request is in flight; drives the disabled button.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// False only while a request is in flight, making re-entrancy explicit.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// The message to display, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_and_submittable() {
        let state = SubmitState::default();
        assert_eq!(state, SubmitState::Idle);
        assert!(state.can_submit());
        assert!(!state.is_submitting());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_only_submitting_blocks_resubmission() {
        assert!(SubmitState::Idle.can_submit());
        assert!(SubmitState::Validating.can_submit());
        assert!(!SubmitState::Submitting.can_submit());
        assert!(SubmitState::Error("nope".to_string()).can_submit());
        assert!(SubmitState::Success.can_submit());
    }

    #[test]
    fn test_error_message_only_in_error_state() {
        let failed = SubmitState::Error("Valid email is required.".to_string());
        assert_eq!(failed.error(), Some("Valid email is required."));
        assert!(SubmitState::Submitting.error().is_none());
        assert!(SubmitState::Success.error().is_none());
    }
}
