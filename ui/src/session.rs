//! Lifecycle state machine for one product modal.
//!
//! The machine is plain data so the whole order flow can be exercised in
//! unit tests without a running renderer. Components drive it through a
//! `Signal<ModalSession>` and spawn the async work around it.

use std::time::Duration;

use api::OrderDraft;

/// How long the success acknowledgement stays up before the modal closes
/// itself.
pub const SUCCESS_CLOSE_DELAY: Duration = Duration::from_secs(3);

/// Where a modal is in its life: `Closed → Form → Submitting → Success`
/// and back to `Closed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumIs)]
pub enum SessionState {
    #[default]
    Closed,
    Form,
    Submitting,
    Success,
}

/// One modal's lifecycle plus the draft it owns.
///
/// Transitions that do not apply to the current state are no-ops. That rule
/// is what lets a late submission callback land harmlessly after the buyer
/// already closed the modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalSession {
    state: SessionState,
    pub draft: OrderDraft,
}

impl ModalSession {
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// `Closed → Form` with a fresh draft.
    pub fn open(&mut self) {
        if self.state.is_closed() {
            self.draft.reset();
            self.state = SessionState::Form;
        }
    }

    /// `Form → Submitting`. Returns whether the caller may start a request;
    /// a second press while one is outstanding gets `false`.
    pub fn begin_submit(&mut self) -> bool {
        if self.state.is_form() {
            self.state = SessionState::Submitting;
            true
        } else {
            false
        }
    }

    /// `Submitting → Form`. The draft keeps everything the buyer typed so
    /// they can correct and retry.
    pub fn submit_failed(&mut self) {
        if self.state.is_submitting() {
            self.state = SessionState::Form;
        }
    }

    /// `Submitting → Success`. The draft is cleared; the caller starts the
    /// auto-close timer.
    pub fn submit_succeeded(&mut self) {
        if self.state.is_submitting() {
            self.draft.reset();
            self.state = SessionState::Success;
        }
    }

    /// `Success → Closed`, fired by the auto-close timer.
    pub fn close_timer_elapsed(&mut self) {
        if self.state.is_success() {
            self.close();
        }
    }

    /// Manual close from the backdrop or close button. Ignored while a
    /// request is in flight. Returns whether the modal is now closed.
    pub fn request_close(&mut self) -> bool {
        match self.state {
            SessionState::Form | SessionState::Success => {
                self.close();
                true
            }
            SessionState::Submitting => false,
            SessionState::Closed => true,
        }
    }

    fn close(&mut self) {
        self.draft.reset();
        self.state = SessionState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Network;

    fn open_session_with_draft() -> ModalSession {
        let mut session = ModalSession::default();
        session.open();
        session.draft.contact = "@alice".to_owned();
        session.draft.notes = "test".to_owned();
        session.draft.transaction_id = "abc123".to_owned();
        session
    }

    #[test]
    fn open_creates_a_fresh_draft_defaulted_to_solana() {
        let mut session = ModalSession::default();
        session.open();
        assert!(session.state().is_form());
        assert_eq!(session.draft, OrderDraft::default());
        assert_eq!(session.draft.network, Network::Solana);
    }

    #[test]
    fn duplicate_submit_is_refused_while_one_is_outstanding() {
        let mut session = open_session_with_draft();
        assert!(session.begin_submit());
        assert!(!session.begin_submit());
        assert!(session.state().is_submitting());
    }

    #[test]
    fn failure_returns_to_form_with_input_intact() {
        let mut session = open_session_with_draft();
        let before = session.draft.clone();
        session.begin_submit();
        session.submit_failed();
        assert!(session.state().is_form());
        assert_eq!(session.draft, before);
        // The control is usable again.
        assert!(session.begin_submit());
    }

    #[test]
    fn success_clears_the_draft_and_the_timer_closes_the_modal() {
        let mut session = open_session_with_draft();
        session.begin_submit();
        session.submit_succeeded();
        assert!(session.state().is_success());
        assert_eq!(session.draft, OrderDraft::default());
        session.close_timer_elapsed();
        assert!(session.state().is_closed());
    }

    #[test]
    fn manual_close_from_form_discards_the_draft() {
        let mut session = open_session_with_draft();
        assert!(session.request_close());
        assert!(session.state().is_closed());
        assert_eq!(session.draft, OrderDraft::default());
    }

    #[test]
    fn manual_close_is_ignored_while_submitting() {
        let mut session = open_session_with_draft();
        session.begin_submit();
        assert!(!session.request_close());
        assert!(session.state().is_submitting());
    }

    #[test]
    fn late_completion_after_close_is_a_no_op() {
        let mut session = open_session_with_draft();
        session.begin_submit();
        // The buyer cannot close a Submitting session, but the shell can
        // tear it down by unmounting; model that as a direct reset.
        let mut stale = session.clone();
        stale.state = SessionState::Closed;
        stale.submit_succeeded();
        assert!(stale.state().is_closed());
        stale.submit_failed();
        assert!(stale.state().is_closed());
        stale.close_timer_elapsed();
        assert!(stale.state().is_closed());
    }

    #[test]
    fn timer_expiry_outside_success_does_nothing() {
        let mut session = open_session_with_draft();
        session.close_timer_elapsed();
        assert!(session.state().is_form());
    }
}
