pub use client::{RegistrationClient, Transmitter};
pub use config::{DeliveryMode, RegistrationConfig};
pub use error::{RegistrationError, Result, SubmissionError};
pub use model::*;
pub use site::{Action, Effect, Site};
pub use workflow::{PendingSubmission, RegistrationWorkflow, SubmissionState, SubmissionTicket};

pub mod catalog;
mod client;
pub mod config;
pub mod encoding;
mod error;
mod model;
pub mod render;
pub mod site;
pub mod workflow;
