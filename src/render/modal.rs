use itertools::Itertools;

use super::{button, escape};
use crate::model::{DraftField, RegistrationDraft};
use crate::site::Action;
use crate::workflow::{RegistrationWorkflow, SubmissionState};

const QR_CODE_URL: &str = "https://placehold.co/200x200/1B2735/FFFFFF?text=UPI+QR+Code";

/// The registration modal for the open workflow.
pub fn registration_modal(workflow: &RegistrationWorkflow) -> String {
    let content = match workflow.state() {
        SubmissionState::Idle => form(workflow),
        SubmissionState::Reviewing => review(workflow, false),
        SubmissionState::Submitting => review(workflow, true),
        SubmissionState::Success => success(workflow),
        SubmissionState::Error(message) => failure(message),
    };
    let close = button("close", &Action::CloseModal, false, "&times;")
        .replacen("<button ", r#"<button aria-label="Close" "#, 1);
    format!(
        r#"<div class="modal-backdrop"><div class="modal" role="dialog" data-state="{}">{close}{content}</div></div>"#,
        workflow.state().as_ref()
    )
}

fn text_input(input_type: &str, field: DraftField, value: &str, placeholder: &str) -> String {
    format!(
        r#"<input type="{input_type}" name="{field}" value="{}" placeholder="{placeholder}" required>"#,
        escape(value)
    )
}

fn form(workflow: &RegistrationWorkflow) -> String {
    let event = workflow.event();
    let draft = workflow.draft();

    let removable = draft.can_remove_participant();
    let participants = draft
        .participants()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let remove = if removable {
                button("remove", &Action::RemoveParticipant(i), false, "&times;")
            } else {
                String::new()
            };
            format!(
                r#"<div class="participant"><input type="text" name="participants" data-index="{i}" value="{}" placeholder="Participant {} Name" required>{remove}</div>"#,
                escape(name),
                i + 1
            )
        })
        .join("");
    let add = if draft.can_add_participant() {
        button("link", &Action::AddParticipant, false, "Add Participant")
    } else {
        String::new()
    };

    let upload = match &draft.screenshot {
        Some(shot) => format!("Selected: {}", escape(&shot.name)),
        None => "Upload Payment Screenshot".to_string(),
    };

    format!(
        concat!(
            r#"<form class="registration-form"><h2>Register for {title}</h2><div class="fields">"#,
            "{team}",
            r#"<div class="participants">{participants}{add}</div>"#,
            "{email}{phone}",
            r#"<div class="payment"><h3>Payment Instructions</h3>"#,
            r#"<p>Pay <span class="fee">{fee}</span> using the QR code below, then upload the screenshot and enter the Transaction ID.</p>"#,
            r#"<img src="{qr}" alt="UPI QR Code">"#,
            "{transaction}",
            r#"<label class="upload"><span>{upload}</span><input type="file" name="screenshot" accept="image/*" required></label>"#,
            "</div></div>{submit}</form>"
        ),
        title = escape(event.title),
        team = text_input("text", DraftField::TeamName, &draft.team_name, "Team Name"),
        participants = participants,
        add = add,
        email = text_input(
            "email",
            DraftField::ContactEmail,
            &draft.contact_email,
            "Contact Email"
        ),
        phone = text_input(
            "tel",
            DraftField::ContactPhone,
            &draft.contact_phone,
            "Contact Phone"
        ),
        fee = escape(event.details.registration_fee),
        qr = QR_CODE_URL,
        transaction = text_input(
            "text",
            DraftField::TransactionId,
            &draft.transaction_id,
            "UTR / Transaction ID"
        ),
        upload = upload,
        submit = button("primary", &Action::Review, false, "Submit Registration"),
    )
}

fn review_rows(title: &str, draft: &RegistrationDraft) -> String {
    let participants = draft
        .participants()
        .iter()
        .map(|p| format!("<li>{}</li>", escape(p)))
        .join("");
    let screenshot = draft
        .screenshot
        .as_ref()
        .map(|s| escape(&s.name))
        .unwrap_or_default();
    [
        format!("<p><strong>Event:</strong> {}</p>", escape(title)),
        format!("<p><strong>Team Name:</strong> {}</p>", escape(&draft.team_name)),
        format!("<p><strong>Participants:</strong></p><ul>{participants}</ul>"),
        format!(
            "<p><strong>Contact Email:</strong> {}</p>",
            escape(&draft.contact_email)
        ),
        format!(
            "<p><strong>Contact Phone:</strong> {}</p>",
            escape(&draft.contact_phone)
        ),
        format!(
            "<p><strong>Transaction ID:</strong> {}</p>",
            escape(&draft.transaction_id)
        ),
        format!("<p><strong>Screenshot:</strong> {screenshot}</p>"),
    ]
    .concat()
}

fn review(workflow: &RegistrationWorkflow, submitting: bool) -> String {
    let confirm_label = if submitting {
        r#"<span class="spinner"></span>"#
    } else {
        "Confirm &amp; Submit"
    };
    format!(
        r#"<div class="review"><h3>Review Your Details</h3><div class="summary">{}</div><div class="actions">{}{}</div></div>"#,
        review_rows(workflow.event().title, workflow.draft()),
        button("secondary", &Action::Edit, submitting, "Go Back &amp; Edit"),
        button("primary", &Action::Confirm, submitting, confirm_label),
    )
}

fn success(workflow: &RegistrationWorkflow) -> String {
    format!(
        concat!(
            r#"<div class="result success"><h2>Registration Successful!</h2>"#,
            "<p>Thank you for registering for the {}. You will receive a confirmation email shortly. ",
            "Please check your inbox and spam folder.</p>{}</div>"
        ),
        escape(workflow.event().title),
        button("primary", &Action::CloseModal, false, "Done"),
    )
}

fn failure(message: &str) -> String {
    format!(
        r#"<div class="result error"><h2>Submission Failed</h2><p class="message">{}</p><div class="actions">{}{}</div></div>"#,
        escape(message),
        button("secondary", &Action::TryAgain, false, "Try Again"),
        button("primary", &Action::CloseModal, false, "Close"),
    )
}
