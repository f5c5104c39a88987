use std::str::FromStr;

use chrono::Datelike;
use tracing::{debug, instrument, warn};

use crate::catalog;
use crate::client::Transmitter;
use crate::error::SubmissionError;
use crate::model::{EventRecord, SiteInfo, Sponsor};
use crate::render;
use crate::workflow::{PendingSubmission, RegistrationWorkflow, SubmissionState, SubmissionTicket};

/// Scroll offset, in pixels, past which the scroll-to-top button shows.
pub const SCROLL_BUTTON_THRESHOLD: u32 = 300;

/// Anchor at the top of the page.
pub const TOP_ANCHOR: &str = "top";

/// Anchor id of an event's detail section.
pub fn detail_anchor(event_id: &str) -> String {
    format!("details-{event_id}")
}

/// A user interaction emitted by a rendered component.
///
/// [`ActionKind`] is the payload-free name written in `data-action`
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq, strum_macros::EnumDiscriminants)]
#[strum_discriminants(
    name(ActionKind),
    derive(strum_macros::EnumString, strum_macros::AsRefStr),
    strum(serialize_all = "kebab-case")
)]
pub enum Action {
    ViewDetails(String),
    Register(String),
    ScrollToTop,
    CloseModal,
    AddParticipant,
    RemoveParticipant(usize),
    Review,
    Edit,
    Confirm,
    TryAgain,
}

impl Action {
    /// Name of the action as written in `data-action` attributes.
    pub fn kind(&self) -> ActionKind {
        ActionKind::from(self)
    }

    /// Value of the `data-target` attribute, if the action has one.
    pub fn target(&self) -> Option<String> {
        match self {
            Self::ViewDetails(id) | Self::Register(id) => Some(id.clone()),
            Self::RemoveParticipant(index) => Some(index.to_string()),
            _ => None,
        }
    }

    /// Rebuild an action from its `data-action` / `data-target` attributes.
    pub fn parse(name: &str, target: Option<&str>) -> Option<Self> {
        let kind = ActionKind::from_str(name).ok()?;
        let action = match kind {
            ActionKind::ViewDetails => Self::ViewDetails(target?.to_string()),
            ActionKind::Register => Self::Register(target?.to_string()),
            ActionKind::RemoveParticipant => Self::RemoveParticipant(target?.parse().ok()?),
            ActionKind::ScrollToTop => Self::ScrollToTop,
            ActionKind::CloseModal => Self::CloseModal,
            ActionKind::AddParticipant => Self::AddParticipant,
            ActionKind::Review => Self::Review,
            ActionKind::Edit => Self::Edit,
            ActionKind::Confirm => Self::Confirm,
            ActionKind::TryAgain => Self::TryAgain,
        };
        Some(action)
    }
}

/// What the view should do after an action was dispatched.
#[derive(Debug)]
pub enum Effect {
    /// Nothing to do beyond re-rendering, if anything changed.
    Render,
    /// Bring the element with this id into view.
    ScrollTo(String),
    /// Encode and send this registration, then report back through
    /// [`Site::finish_submission`].
    Submit(PendingSubmission),
    /// The action did not apply in the current state.
    Ignored,
}

/// Root of the page: owns the open registration modal, if any, and the
/// scroll-to-top button visibility.
#[derive(Debug)]
pub struct Site {
    modal: Option<RegistrationWorkflow>,
    sessions: u64,
    scroll_button_visible: bool,
    endpoint: String,
    copyright_year: i32,
}

impl Site {
    /// A site that sends registrations to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            modal: None,
            sessions: 0,
            scroll_button_visible: false,
            endpoint: endpoint.into(),
            copyright_year: chrono::Local::now().year(),
        }
    }

    /// Pin the footer year, e.g. for reproducible output.
    pub fn with_copyright_year(mut self, year: i32) -> Self {
        self.copyright_year = year;
        self
    }

    /// Header and footer information.
    pub fn info(&self) -> &'static SiteInfo {
        &catalog::SITE
    }

    /// Events in display order.
    pub fn events(&self) -> &'static [EventRecord] {
        catalog::events()
    }

    /// Sponsors shown in the gallery.
    pub fn sponsors(&self) -> &'static [Sponsor] {
        catalog::sponsors()
    }

    /// The open registration modal, if any.
    pub fn registration(&self) -> Option<&RegistrationWorkflow> {
        self.modal.as_ref()
    }

    /// Mutable access to the open registration modal.
    pub fn registration_mut(&mut self) -> Option<&mut RegistrationWorkflow> {
        self.modal.as_mut()
    }

    /// Event whose registration modal is open.
    pub fn active_event(&self) -> Option<&'static EventRecord> {
        self.modal.as_ref().map(|m| m.event())
    }

    /// Whether the scroll-to-top button is shown.
    pub fn scroll_button_visible(&self) -> bool {
        self.scroll_button_visible
    }

    /// Open a fresh registration modal for `event`, replacing any open one.
    pub fn open_registration(&mut self, event: &'static EventRecord) -> &mut RegistrationWorkflow {
        self.sessions += 1;
        self.modal
            .insert(RegistrationWorkflow::with_session(event, self.sessions))
    }

    /// Open the modal for the event with `id`; `None` for unknown ids.
    pub fn open_registration_by_id(&mut self, id: &str) -> Option<&mut RegistrationWorkflow> {
        let event = catalog::find_event(id)?;
        Some(self.open_registration(event))
    }

    /// Close the modal and discard its draft.
    pub fn close_registration(&mut self) {
        if let Some(workflow) = self.modal.take() {
            workflow.close();
        }
    }

    /// Track the page's scroll offset.
    pub fn on_scroll(&mut self, offset: u32) {
        let visible = offset > SCROLL_BUTTON_THRESHOLD;
        if visible != self.scroll_button_visible {
            debug!(offset, visible, "scroll button visibility changed");
        }
        self.scroll_button_visible = visible;
    }

    /// Anchor of the event's detail section; `None` for unknown ids.
    pub fn scroll_to_detail(&self, id: &str) -> Option<String> {
        catalog::find_event(id).map(|e| detail_anchor(e.id))
    }

    /// Anchor at the top of the page.
    pub fn scroll_to_top(&self) -> &'static str {
        TOP_ANCHOR
    }

    /// Keyboard handling: Escape closes the modal.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.modal.is_some() {
            self.close_registration();
            return true;
        }
        false
    }

    /// Apply a user interaction.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Effect {
        let applied = match action {
            Action::ViewDetails(id) => {
                return self
                    .scroll_to_detail(&id)
                    .map_or(Effect::Ignored, Effect::ScrollTo)
            }
            Action::ScrollToTop => return Effect::ScrollTo(TOP_ANCHOR.to_string()),
            Action::Register(id) => self.open_registration_by_id(&id).is_some(),
            Action::CloseModal => {
                let open = self.modal.is_some();
                self.close_registration();
                open
            }
            Action::Confirm => {
                let endpoint = self.endpoint.clone();
                return match self
                    .modal
                    .as_mut()
                    .and_then(|m| m.begin_submit(&endpoint))
                {
                    Some(pending) => Effect::Submit(pending),
                    None => Effect::Render,
                };
            }
            other => {
                let Some(workflow) = self.modal.as_mut() else {
                    return Effect::Ignored;
                };
                match other {
                    Action::AddParticipant => workflow.add_participant(),
                    Action::RemoveParticipant(index) => workflow.remove_participant(index),
                    Action::Review => workflow.review(),
                    Action::Edit => workflow.edit(),
                    Action::TryAgain => workflow.reset(),
                    _ => false,
                }
            }
        };
        if applied {
            Effect::Render
        } else {
            Effect::Ignored
        }
    }

    /// Apply a submission outcome if its modal session is still open.
    pub fn finish_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<(), SubmissionError>,
    ) -> bool {
        match self.modal.as_mut() {
            Some(workflow) if workflow.session() == ticket.session => {
                workflow.finish(ticket, outcome)
            }
            _ => {
                warn!(ticket = ticket.session, "modal closed before submission finished, ignoring");
                false
            }
        }
    }

    /// Confirm the open registration and send it through `transmitter`.
    ///
    /// Returns the resulting state, or `None` when no modal is open.
    pub async fn confirm_submit<T: Transmitter>(
        &mut self,
        transmitter: &T,
    ) -> Option<&SubmissionState> {
        let workflow = self.modal.as_mut()?;
        Some(workflow.confirm_submit(transmitter).await)
    }

    /// Render the whole page.
    pub fn render(&self) -> String {
        render::page(&render::PageView {
            info: self.info(),
            events: self.events(),
            sponsors: self.sponsors(),
            modal: self.modal.as_ref(),
            scroll_button_visible: self.scroll_button_visible,
            copyright_year: self.copyright_year,
        })
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(crate::config::PLACEHOLDER_ENDPOINT)
    }
}
