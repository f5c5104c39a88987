//! The registration modal's multi-step form.
//!
//! ```text
//! idle --review--> reviewing --confirm--> submitting --ok--> success
//!  ^                  |                        |
//!  +------edit--------+                        +--failure--> error --reset--> idle
//! ```
//!
//! A confirm with a missing screenshot or an unconfigured endpoint goes
//! straight from `reviewing` to `error` without transmitting.

use tracing::{debug, instrument, warn};

use crate::client::Transmitter;
use crate::config;
use crate::encoding;
use crate::error::SubmissionError;
use crate::model::{DraftField, EventRecord, RegistrationDraft, RegistrationPayload, Screenshot};

/// Where the modal is in the registration flow.
#[derive(Debug, Clone, PartialEq, Eq, strum_macros::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionState {
    Idle,
    Reviewing,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionState {
    /// Message shown in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one confirm attempt of one modal session.
///
/// An outcome is only applied to the workflow that issued the ticket, and
/// only while that workflow is still submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket {
    pub(crate) session: u64,
}

/// A confirmed registration waiting to be encoded and sent.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    ticket: SubmissionTicket,
    event_title: &'static str,
    draft: RegistrationDraft,
    screenshot: Screenshot,
}

impl PendingSubmission {
    /// Ticket to hand back with the outcome.
    pub fn ticket(&self) -> SubmissionTicket {
        self.ticket
    }

    /// Encode the screenshot, build the payload and hand it to `transmitter`.
    ///
    /// Nothing is sent when `transmitter` still points at the placeholder
    /// address, whatever endpoint the confirm step was checked against.
    #[instrument(skip_all, fields(event = self.event_title))]
    pub async fn send<T: Transmitter>(&self, transmitter: &T) -> Result<(), SubmissionError> {
        if !config::is_configured(transmitter.endpoint()) {
            warn!(endpoint = transmitter.endpoint(), "transmitter endpoint not configured");
            return Err(SubmissionError::EndpointUnconfigured);
        }

        let encoded = encoding::encode_screenshot(&self.screenshot)
            .await
            .map_err(SubmissionError::transmission)?;

        let payload = RegistrationPayload {
            event: self.event_title.to_string(),
            team_name: self.draft.team_name.clone(),
            participants: self.draft.participants().to_vec(),
            contact_email: self.draft.contact_email.clone(),
            contact_phone: self.draft.contact_phone.clone(),
            transaction_id: self.draft.transaction_id.clone(),
            screenshot: encoded,
            screenshot_name: self.screenshot.name.clone(),
        };

        transmitter.transmit(&payload).await.map_err(|e| {
            warn!(error = %e, "registration transmission failed");
            SubmissionError::transmission(e)
        })
    }
}

/// State of one open registration modal.
#[derive(Debug, Clone)]
pub struct RegistrationWorkflow {
    session: u64,
    event: &'static EventRecord,
    draft: RegistrationDraft,
    state: SubmissionState,
}

impl RegistrationWorkflow {
    /// Start a fresh registration for `event`: empty draft, `Idle`.
    pub fn new(event: &'static EventRecord) -> Self {
        Self::with_session(event, 0)
    }

    pub(crate) fn with_session(event: &'static EventRecord, session: u64) -> Self {
        debug!(event = event.id, session, "registration opened");
        Self {
            session,
            event,
            draft: RegistrationDraft::new(),
            state: SubmissionState::Idle,
        }
    }

    /// Event being registered for.
    pub fn event(&self) -> &'static EventRecord {
        self.event
    }

    /// The form contents as entered so far.
    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Current step of the flow.
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub(crate) fn session(&self) -> u64 {
        self.session
    }

    fn editable(&self, op: &'static str) -> bool {
        if self.state == SubmissionState::Idle {
            return true;
        }
        debug!(op, state = self.state.as_ref(), "draft is not editable, ignoring");
        false
    }

    /// Set a scalar field of the draft. Returns whether the draft changed.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) -> bool {
        if !self.editable("update_field") {
            return false;
        }
        self.draft.set(field, value.into());
        true
    }

    /// Set a field by its form input name, e.g. `"teamName"`.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<bool, strum::ParseError> {
        let field: DraftField = name.parse()?;
        Ok(self.update_field(field, value))
    }

    /// Set the name in participant slot `index`; out of range is ignored.
    pub fn set_participant(&mut self, index: usize, name: impl Into<String>) -> bool {
        self.editable("set_participant") && self.draft.set_participant(index, name.into())
    }

    /// Append a blank participant slot; does nothing once the team is full.
    pub fn add_participant(&mut self) -> bool {
        self.editable("add_participant") && self.draft.push_participant()
    }

    /// Remove the slot at `index`; the last remaining slot is never removed.
    pub fn remove_participant(&mut self, index: usize) -> bool {
        self.editable("remove_participant") && self.draft.remove_participant(index)
    }

    /// Stage the payment screenshot, replacing any earlier one.
    pub fn attach_screenshot(&mut self, screenshot: Screenshot) -> bool {
        if !self.editable("attach_screenshot") {
            return false;
        }
        debug!(name = %screenshot.name, "screenshot attached");
        self.draft.screenshot = Some(screenshot);
        true
    }

    /// `Idle -> Reviewing`.
    pub fn review(&mut self) -> bool {
        self.transition(SubmissionState::Idle, SubmissionState::Reviewing)
    }

    /// Go back and edit: `Reviewing -> Idle`.
    pub fn edit(&mut self) -> bool {
        self.transition(SubmissionState::Reviewing, SubmissionState::Idle)
    }

    /// Try again after a failure: `Error -> Idle`, keeping the draft.
    pub fn reset(&mut self) -> bool {
        if !matches!(self.state, SubmissionState::Error(_)) {
            warn!(state = self.state.as_ref(), "reset outside error state, ignoring");
            return false;
        }
        debug!("error -> idle");
        self.state = SubmissionState::Idle;
        true
    }

    fn transition(&mut self, from: SubmissionState, to: SubmissionState) -> bool {
        if self.state != from {
            warn!(
                state = self.state.as_ref(),
                expected = from.as_ref(),
                target = to.as_ref(),
                "illegal transition, ignoring"
            );
            return false;
        }
        debug!(from = from.as_ref(), to = to.as_ref(), "transition");
        self.state = to;
        true
    }

    /// Check the confirm preconditions and move to `Submitting`.
    ///
    /// Returns `None` when called outside `Reviewing`, or when a precondition
    /// failed and the workflow moved to `Error` instead.
    pub fn begin_submit(&mut self, endpoint: &str) -> Option<PendingSubmission> {
        if self.state != SubmissionState::Reviewing {
            warn!(state = self.state.as_ref(), "confirm outside review, ignoring");
            return None;
        }

        let screenshot = match (config::is_configured(endpoint), &self.draft.screenshot) {
            (false, _) => return self.fail(SubmissionError::EndpointUnconfigured),
            (true, None) => return self.fail(SubmissionError::MissingAttachment),
            (true, Some(screenshot)) => screenshot.clone(),
        };

        debug!("reviewing -> submitting");
        self.state = SubmissionState::Submitting;
        Some(PendingSubmission {
            ticket: SubmissionTicket {
                session: self.session,
            },
            event_title: self.event.title,
            draft: self.draft.clone(),
            screenshot,
        })
    }

    fn fail(&mut self, err: SubmissionError) -> Option<PendingSubmission> {
        warn!(error = %err, "registration not sent");
        self.state = SubmissionState::Error(err.to_string());
        None
    }

    /// Apply the outcome of a [`PendingSubmission`]. Outcomes for another
    /// session, or arriving when no longer submitting, are ignored.
    pub fn finish(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<(), SubmissionError>,
    ) -> bool {
        if ticket.session != self.session || self.state != SubmissionState::Submitting {
            warn!(
                ticket = ticket.session,
                session = self.session,
                state = self.state.as_ref(),
                "stale submission outcome, ignoring"
            );
            return false;
        }
        self.state = match outcome {
            Ok(()) => SubmissionState::Success,
            Err(err) => SubmissionState::Error(err.to_string()),
        };
        debug!(state = self.state.as_ref(), "submission finished");
        true
    }

    /// Confirm the reviewed registration and send it.
    #[instrument(skip_all, fields(event = self.event.id, session = self.session))]
    pub async fn confirm_submit<T: Transmitter>(&mut self, transmitter: &T) -> &SubmissionState {
        if let Some(pending) = self.begin_submit(transmitter.endpoint()) {
            let outcome = pending.send(transmitter).await;
            self.finish(pending.ticket(), outcome);
        }
        &self.state
    }

    /// Close the modal, discarding the draft whatever the current state.
    pub fn close(self) {
        debug!(event = self.event.id, state = self.state.as_ref(), "registration closed");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::catalog::find_event;

    pub(crate) const ENDPOINT: &str = "https://script.google.com/macros/s/test/exec";

    #[derive(thiserror::Error, Debug)]
    pub(crate) enum MockError {
        #[error("NetworkError: {0}")]
        NetworkError(String),
    }

    /// Records payloads and answers with a fixed outcome.
    pub(crate) struct MockTransmitter {
        pub endpoint: &'static str,
        pub fail_with: Option<&'static str>,
        pub sent: RefCell<Vec<RegistrationPayload>>,
    }

    impl MockTransmitter {
        pub fn ok() -> Self {
            Self {
                endpoint: ENDPOINT,
                fail_with: None,
                sent: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(message: &'static str) -> Self {
            Self {
                fail_with: Some(message),
                ..Self::ok()
            }
        }

        pub fn unconfigured() -> Self {
            Self {
                endpoint: config::PLACEHOLDER_ENDPOINT,
                ..Self::ok()
            }
        }
    }

    impl Transmitter for MockTransmitter {
        type Error = MockError;

        fn endpoint(&self) -> &str {
            self.endpoint
        }

        async fn transmit(&self, payload: &RegistrationPayload) -> Result<(), MockError> {
            self.sent.borrow_mut().push(payload.clone());
            match self.fail_with {
                Some(message) => Err(MockError::NetworkError(message.to_string())),
                None => Ok(()),
            }
        }
    }

    pub(crate) fn filled_hackathon() -> RegistrationWorkflow {
        let mut workflow = RegistrationWorkflow::new(find_event("hackathon").unwrap());
        workflow.update_field(DraftField::TeamName, "Alpha");
        workflow.set_participant(0, "A. Singh");
        workflow.update_field(DraftField::ContactEmail, "alpha@example.com");
        workflow.update_field(DraftField::ContactPhone, "+91 9000000000");
        workflow.update_field(DraftField::TransactionId, "UTR123");
        workflow.attach_screenshot(Screenshot::from_bytes("pay.png", b"hi!".to_vec()));
        workflow
    }

    #[tokio::test]
    async fn test_hackathon_registration_succeeds() {
        let mut workflow = filled_hackathon();
        let before = workflow.draft().clone();

        assert!(workflow.review());
        assert_eq!(workflow.state(), &SubmissionState::Reviewing);
        assert_eq!(workflow.draft(), &before);

        let transmitter = MockTransmitter::ok();
        let state = workflow.confirm_submit(&transmitter).await;
        assert_eq!(state, &SubmissionState::Success);
        assert_eq!(workflow.draft(), &before);

        let sent = transmitter.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].event, "Hackathon");
        assert_eq!(sent[0].team_name, "Alpha");
        assert_eq!(sent[0].participants, vec!["A. Singh".to_string()]);
        assert_eq!(sent[0].screenshot, "data:image/png;base64,aGkh");
        assert_eq!(sent[0].screenshot_name, "pay.png");
    }

    #[tokio::test]
    async fn test_network_error_surfaces_message() {
        let mut workflow = filled_hackathon();
        workflow.review();

        let transmitter = MockTransmitter::failing("timeout");
        workflow.confirm_submit(&transmitter).await;

        let message = workflow.state().error_message().unwrap();
        assert!(message.contains("timeout"));
        assert_eq!(transmitter.sent.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_screenshot_is_not_sent() {
        let mut workflow = filled_hackathon();
        workflow.draft.screenshot = None;
        workflow.review();

        let transmitter = MockTransmitter::ok();
        workflow.confirm_submit(&transmitter).await;

        assert_eq!(
            workflow.state(),
            &SubmissionState::Error("Payment screenshot is required.".into())
        );
        assert!(transmitter.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_placeholder_endpoint_is_not_sent() {
        let mut workflow = filled_hackathon();
        workflow.review();

        let transmitter = MockTransmitter::unconfigured();
        workflow.confirm_submit(&transmitter).await;

        let message = workflow.state().error_message().unwrap();
        assert!(message.starts_with("Setup is incomplete"));
        assert!(transmitter.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_screenshot_becomes_error() {
        let mut workflow = filled_hackathon();
        workflow.attach_screenshot(Screenshot::from_path("/definitely/not/here/pay.png"));
        workflow.review();

        let transmitter = MockTransmitter::ok();
        workflow.confirm_submit(&transmitter).await;

        assert!(workflow.state().error_message().unwrap().contains("pay.png"));
        assert!(transmitter.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_from_idle_is_ignored() {
        let mut workflow = filled_hackathon();
        let transmitter = MockTransmitter::ok();

        assert_eq!(workflow.confirm_submit(&transmitter).await, &SubmissionState::Idle);
        assert!(transmitter.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_reset_keeps_draft_and_requires_review() {
        let mut workflow = filled_hackathon();
        workflow.review();
        workflow.confirm_submit(&MockTransmitter::failing("timeout")).await;
        let draft = workflow.draft().clone();

        assert!(workflow.reset());
        assert_eq!(workflow.state(), &SubmissionState::Idle);
        assert_eq!(workflow.draft(), &draft);
        assert!(!workflow.reset());

        assert!(workflow.review());
        let transmitter = MockTransmitter::ok();
        assert_eq!(
            workflow.confirm_submit(&transmitter).await,
            &SubmissionState::Success
        );
    }

    #[test]
    fn test_participant_cap_and_floor() {
        let mut workflow = RegistrationWorkflow::new(find_event("ideathon").unwrap());
        assert!(!workflow.remove_participant(0));
        assert_eq!(workflow.draft().participants().len(), 1);

        for _ in 0..6 {
            workflow.add_participant();
        }
        assert_eq!(workflow.draft().participants().len(), 4);
        assert!(!workflow.add_participant());

        workflow.set_participant(2, "third");
        assert!(workflow.remove_participant(1));
        assert_eq!(workflow.draft().participants()[1], "third");
    }

    #[test]
    fn test_edits_only_while_idle() {
        let mut workflow = filled_hackathon();
        workflow.review();
        assert!(!workflow.update_field(DraftField::TeamName, "Beta"));
        assert!(!workflow.add_participant());
        assert_eq!(workflow.draft().team_name, "Alpha");

        assert!(workflow.edit());
        assert!(workflow.update_field_by_name("teamName", "Beta").unwrap());
        assert_eq!(workflow.draft().team_name, "Beta");
        assert!(workflow.update_field_by_name("nickname", "x").is_err());
    }

    #[test]
    fn test_review_only_from_idle() {
        let mut workflow = filled_hackathon();
        assert!(workflow.review());
        assert!(!workflow.review());
        assert!(workflow.edit());
        assert!(!workflow.edit());
        assert!(workflow.review());
    }

    #[test]
    fn test_finish_ignores_foreign_ticket() {
        let mut workflow = filled_hackathon();
        workflow.review();
        let pending = workflow.begin_submit(ENDPOINT).unwrap();
        assert_eq!(workflow.state(), &SubmissionState::Submitting);
        assert!(workflow.begin_submit(ENDPOINT).is_none());

        let foreign = SubmissionTicket { session: 99 };
        assert!(!workflow.finish(foreign, Ok(())));
        assert_eq!(workflow.state(), &SubmissionState::Submitting);

        assert!(workflow.finish(pending.ticket(), Ok(())));
        assert!(!workflow.finish(pending.ticket(), Ok(())));
        assert_eq!(workflow.state(), &SubmissionState::Success);
    }

    #[tokio::test]
    async fn test_send_refuses_placeholder_transmitter() {
        let mut workflow = filled_hackathon();
        workflow.review();
        let pending = workflow.begin_submit(ENDPOINT).unwrap();

        let transmitter = MockTransmitter::unconfigured();
        let outcome = pending.send(&transmitter).await;
        assert_eq!(outcome, Err(SubmissionError::EndpointUnconfigured));
        assert!(transmitter.sent.borrow().is_empty());

        workflow.finish(pending.ticket(), outcome);
        assert!(workflow
            .state()
            .error_message()
            .unwrap()
            .starts_with("Setup is incomplete"));
    }
}
