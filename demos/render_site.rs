use tech_triad::{Action, Effect, RegistrationClient, RegistrationConfig, Screenshot, Site};

/// Render the landing page, then walk one registration through the modal.
///
/// Set `TECH_TRIAD_ENDPOINT` to a deployed script URL to actually submit;
/// with the placeholder the modal ends in the "setup incomplete" error.
#[tokio::main]
async fn main() {
    let config = RegistrationConfig::from_env();
    let client = RegistrationClient::new(config.clone()).unwrap();
    let mut site = Site::new(config.endpoint);

    std::fs::create_dir_all("site").unwrap();
    std::fs::write("site/index.html", site.render()).unwrap();
    println!("Wrote site/index.html");

    site.dispatch(Action::Register("hackathon".to_string()));
    let workflow = site.registration_mut().unwrap();
    workflow.update_field_by_name("teamName", "Alpha").unwrap();
    workflow.set_participant(0, "A. Singh");
    workflow.update_field_by_name("contactEmail", "alpha@example.com").unwrap();
    workflow.update_field_by_name("contactPhone", "+91 9000000000").unwrap();
    workflow.update_field_by_name("transactionId", "UTR123").unwrap();
    workflow.attach_screenshot(Screenshot::from_bytes("pay.png", vec![0x89, b'P', b'N', b'G']));
    site.dispatch(Action::Review);

    if let Effect::Submit(pending) = site.dispatch(Action::Confirm) {
        let outcome = pending.send(&client).await;
        site.finish_submission(pending.ticket(), outcome);
    }

    let state = site.registration().unwrap().state();
    println!("Registration ended in state {}", state.as_ref());
    if let Some(message) = state.error_message() {
        println!("  {message}");
    }
    std::fs::write("site/registration.html", site.render()).unwrap();
    println!("Wrote site/registration.html");
}
