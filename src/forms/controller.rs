use serde::Serialize;

use super::relay::RelayError;
use super::schema::{validate, FormKind, FormValues, ValidationErrors};

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed(&'static str),
}

/// Body sent to the form relay: every field plus the tag naming the form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Submission {
    #[serde(flatten)]
    pub fields: FormValues,
    pub form_source: &'static str,
}

/// State behind one pricing page form. Knows nothing about the DOM or the
/// network: the component feeds it input and relay outcomes.
#[derive(Clone, Debug, PartialEq)]
pub struct FormController {
    kind: FormKind,
    values: FormValues,
    errors: ValidationErrors,
    status: SubmissionStatus,
}

impl FormController {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: FormValues::blank(kind),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn update_field(&mut self, name: &str, value: String) {
        self.values.set(name, value);
    }

    /// Recompute every error from the current values.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(self.kind, &self.values);
        self.errors.is_empty()
    }

    /// Start a submission. Returns the body to post, or `None` when the form
    /// is invalid, already in flight or already sent.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        match self.status {
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded => return None,
            SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {}
        }
        if !self.validate() {
            return None;
        }

        self.status = SubmissionStatus::Submitting;
        Some(Submission {
            fields: self.values.clone(),
            form_source: self.kind.form_source(),
        })
    }

    pub fn finish(&mut self, outcome: Result<(), RelayError>) {
        if !self.is_submitting() {
            return;
        }
        self.status = match outcome {
            Ok(()) => SubmissionStatus::Succeeded,
            Err(_) => SubmissionStatus::Failed(self.kind.copy().failure),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn support_filled() -> FormController {
        let mut form = FormController::new(FormKind::Support);
        form.update_field("name", "Ada".to_string());
        form.update_field("email", "ada@example.com".to_string());
        form.update_field("service", "Web App".to_string());
        form.update_field("description", "Build a portal".to_string());
        form
    }

    #[test]
    fn support_request_body_carries_fields_and_source() {
        let mut form = support_filled();
        let submission = form.begin_submit().expect("form is valid");
        assert_eq!(form.status(), &SubmissionStatus::Submitting);

        let body = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "service": "Web App",
                "budget": "",
                "description": "Build a portal",
                "form_source": "Pricing Page - Budget Support Request",
            })
        );

        form.finish(Ok(()));
        assert_eq!(form.status(), &SubmissionStatus::Succeeded);
    }

    #[test]
    fn invalid_form_never_produces_a_request() {
        let mut form = FormController::new(FormKind::Collaboration);
        form.update_field("name", "Ada".to_string());
        form.update_field("email", "ada@example.com".to_string());
        form.update_field("title", "Engine".to_string());
        form.update_field("proposal", "Build it".to_string());

        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.errors().get("needs"), Some("Please tell us what you need from us."));
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = support_filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert!(form.is_submitting());
    }

    #[test]
    fn non_ok_status_fails_with_fixed_message_and_allows_retry() {
        let mut form = support_filled();
        form.begin_submit();
        form.finish(Err(RelayError::Status(500)));
        assert_eq!(
            form.status(),
            &SubmissionStatus::Failed("Sorry, there was an issue sending your request. Please try again.")
        );

        assert!(form.begin_submit().is_some());
        form.finish(Ok(()));
        assert_eq!(form.status(), &SubmissionStatus::Succeeded);
    }

    #[test]
    fn transport_error_fails_like_a_bad_status() {
        let mut form = FormController::new(FormKind::Bespoke);
        form.update_field("name", "Ada".to_string());
        form.update_field("email", "ada@example.com".to_string());
        form.update_field("message", "A custom dashboard".to_string());
        form.begin_submit();
        form.finish(Err(RelayError::Transport("offline".to_string())));
        assert_eq!(
            form.status(),
            &SubmissionStatus::Failed("Sorry, there was an issue sending your message. Please try again.")
        );
    }

    #[test]
    fn succeeded_form_stays_succeeded() {
        let mut form = support_filled();
        form.begin_submit();
        form.finish(Ok(()));
        assert!(form.begin_submit().is_none());
        form.finish(Err(RelayError::Status(502)));
        assert_eq!(form.status(), &SubmissionStatus::Succeeded);
    }

    #[test]
    fn errors_are_recomputed_wholesale() {
        let mut form = FormController::new(FormKind::Bespoke);
        assert!(!form.validate());
        assert_eq!(form.errors().len(), 3);

        form.update_field("name", "Ada".to_string());
        form.update_field("email", "ada@example.com".to_string());
        assert!(!form.validate());
        assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec!["message"]);
    }
}
