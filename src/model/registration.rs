use std::path::PathBuf;

use serde::Serialize;
use strum_macros::EnumString;

/// Maximum number of participants in one team.
pub const MAX_PARTICIPANTS: usize = 4;

/// A team's registration as typed into the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub team_name: String,
    participants: Vec<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub transaction_id: String,
    pub screenshot: Option<Screenshot>,
}

impl RegistrationDraft {
    /// An empty draft with a single blank participant slot.
    pub fn new() -> Self {
        Self {
            team_name: String::new(),
            participants: vec![String::new()],
            contact_email: String::new(),
            contact_phone: String::new(),
            transaction_id: String::new(),
            screenshot: None,
        }
    }

    /// Participant names in slot order. Never empty, never more than
    /// [`MAX_PARTICIPANTS`].
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Whether another participant slot can be added.
    pub fn can_add_participant(&self) -> bool {
        self.participants.len() < MAX_PARTICIPANTS
    }

    /// Whether a slot can be removed without emptying the team.
    pub fn can_remove_participant(&self) -> bool {
        self.participants.len() > 1
    }

    pub(crate) fn push_participant(&mut self) -> bool {
        if !self.can_add_participant() {
            return false;
        }
        self.participants.push(String::new());
        true
    }

    pub(crate) fn remove_participant(&mut self, index: usize) -> bool {
        if !self.can_remove_participant() || index >= self.participants.len() {
            return false;
        }
        self.participants.remove(index);
        true
    }

    pub(crate) fn set_participant(&mut self, index: usize, name: String) -> bool {
        match self.participants.get_mut(index) {
            Some(slot) => {
                *slot = name;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::TeamName => &mut self.team_name,
            DraftField::ContactEmail => &mut self.contact_email,
            DraftField::ContactPhone => &mut self.contact_phone,
            DraftField::TransactionId => &mut self.transaction_id,
        };
        *slot = value;
    }
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Scalar form fields, named as the form inputs name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum_macros::Display)]
#[strum(serialize_all = "camelCase")]
pub enum DraftField {
    TeamName,
    ContactEmail,
    ContactPhone,
    TransactionId,
}

/// The payment screenshot attached to a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screenshot {
    pub name: String,
    /// MIME type reported by the picker, if any. Falls back to a guess from
    /// the file extension when encoding.
    pub content_type: Option<String>,
    pub source: ScreenshotSource,
}

/// Where the screenshot bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenshotSource {
    Bytes(Vec<u8>),
    /// Read in full when the registration is submitted.
    Path(PathBuf),
}

impl Screenshot {
    /// A screenshot already held in memory, named as the picker named it.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            source: ScreenshotSource::Bytes(bytes),
        }
    }

    /// Reference a file on disk; the file name becomes the screenshot name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            content_type: None,
            source: ScreenshotSource::Path(path),
        }
    }

    /// Use `content_type` instead of guessing from the file extension.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// JSON body posted to the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub event: String,
    pub team_name: String,
    pub participants: Vec<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub transaction_id: String,
    /// `data:<mime>;base64,<data>`
    pub screenshot: String,
    pub screenshot_name: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_new_draft_has_one_blank_slot() {
        let draft = RegistrationDraft::new();
        assert_eq!(draft.participants(), [String::new()]);
        assert!(draft.screenshot.is_none());
    }

    #[test]
    fn test_participant_bounds() {
        let mut draft = RegistrationDraft::new();
        assert!(!draft.remove_participant(0));
        for _ in 0..10 {
            draft.push_participant();
        }
        assert_eq!(draft.participants().len(), MAX_PARTICIPANTS);
        assert!(!draft.remove_participant(7));
        assert!(draft.remove_participant(3));
        assert_eq!(draft.participants().len(), 3);
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!(DraftField::from_str("teamName").unwrap(), DraftField::TeamName);
        assert_eq!(
            DraftField::from_str("transactionId").unwrap(),
            DraftField::TransactionId
        );
        assert!(DraftField::from_str("participants").is_err());
        assert_eq!(DraftField::ContactPhone.to_string(), "contactPhone");
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let payload = RegistrationPayload {
            event: "Hackathon".into(),
            team_name: "Alpha".into(),
            participants: vec!["A. Singh".into()],
            contact_email: "alpha@example.com".into(),
            contact_phone: "+91 9000000000".into(),
            transaction_id: "UTR123".into(),
            screenshot: "data:image/png;base64,AAAA".into(),
            screenshot_name: "pay.png".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["teamName"], "Alpha");
        assert_eq!(json["participants"][0], "A. Singh");
        assert_eq!(json["screenshotName"], "pay.png");
        assert_eq!(json["transactionId"], "UTR123");
    }

    #[test]
    fn test_screenshot_from_path_takes_file_name() {
        let shot = Screenshot::from_path("/tmp/uploads/pay.png");
        assert_eq!(shot.name, "pay.png");
        assert!(matches!(shot.source, ScreenshotSource::Path(_)));
    }
}
