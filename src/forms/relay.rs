use gloo_net::http::Request;
use log::info;
use thiserror::Error;

use super::controller::Submission;
use crate::config;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelayError {
    #[error("could not encode submission: {0}")]
    Encode(String),
    #[error("request to form relay failed: {0}")]
    Transport(String),
    #[error("form relay answered with status {0}")]
    Status(u16),
}

/// Anything outside 200-299 counts as a failed submission.
pub fn check_status(status: u16) -> Result<(), RelayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RelayError::Status(status))
    }
}

/// POST one submission to the form relay. Single attempt, no retry.
pub async fn send(submission: &Submission) -> Result<(), RelayError> {
    let request = Request::post(config::get_form_relay_url())
        .header("Accept", "application/json")
        .json(submission)
        .map_err(|e| RelayError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))?;

    info!("Form relay answered {} for {}", response.status(), submission.form_source);
    check_status(response.status())
}
