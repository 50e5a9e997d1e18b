use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Length as the browser counts it for `maxlength`: UTF-16 code units.
pub fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// The three forms on the pricing page. Each one only differs in its fields,
/// its copy and the tag the relay receives in `form_source`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    Bespoke,
    Support,
    Collaboration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldInput {
    Text,
    Email,
    TextArea { rows: u32 },
    /// Dropdown filled from the service catalogue.
    ServiceSelect,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    Required(&'static str),
    Email(&'static str),
    MaxLength { limit: usize, message: &'static str },
}

impl Rule {
    /// Error message if `value` breaks this rule.
    fn check(&self, value: &str) -> Option<&'static str> {
        match *self {
            Rule::Required(message) => value.trim().is_empty().then_some(message),
            Rule::Email(message) => (!is_valid_email(value)).then_some(message),
            Rule::MaxLength { limit, message } => (input_length(value) > limit).then_some(message),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input: FieldInput,
    pub placeholder: Option<&'static str>,
    /// Checked in order, the first broken rule wins.
    pub rules: &'static [Rule],
    /// Rendered half width next to its neighbour.
    pub half: bool,
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|rule| matches!(rule, Rule::Required(_)))
    }

    pub fn char_limit(&self) -> Option<usize> {
        self.rules.iter().find_map(|rule| match rule {
            Rule::MaxLength { limit, .. } => Some(*limit),
            _ => None,
        })
    }
}

/// Text shown around a form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormCopy {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
    pub thanks_heading: &'static str,
    pub thanks_body: &'static str,
    pub failure: &'static str,
}

const NAME_RULES: &[Rule] = &[Rule::Required("Full Name is required.")];
const EMAIL_RULES: &[Rule] = &[
    Rule::Required("Email Address is required."),
    Rule::Email("Please enter a valid email address."),
];

const fn name_field() -> FieldSpec {
    FieldSpec {
        name: "name",
        label: "Full Name",
        input: FieldInput::Text,
        placeholder: None,
        rules: NAME_RULES,
        half: true,
    }
}

const fn email_field() -> FieldSpec {
    FieldSpec {
        name: "email",
        label: "Email Address",
        input: FieldInput::Email,
        placeholder: None,
        rules: EMAIL_RULES,
        half: true,
    }
}

const BESPOKE_FIELDS: &[FieldSpec] = &[
    name_field(),
    email_field(),
    FieldSpec {
        name: "message",
        label: "Project Details",
        input: FieldInput::TextArea { rows: 5 },
        placeholder: Some("Tell us about your project, goals, and any specific features you have in mind..."),
        rules: &[
            Rule::Required("Please describe your requirements."),
            Rule::MaxLength {
                limit: config::BESPOKE_MESSAGE_LIMIT,
                message: "Message cannot exceed 500 characters.",
            },
        ],
        half: false,
    },
];

const SUPPORT_FIELDS: &[FieldSpec] = &[
    name_field(),
    email_field(),
    FieldSpec {
        name: "service",
        label: "Service of Interest",
        input: FieldInput::ServiceSelect,
        placeholder: Some("Select a service..."),
        rules: &[Rule::Required("Please select a service.")],
        half: true,
    },
    FieldSpec {
        name: "budget",
        label: "Your Budget (USD)",
        input: FieldInput::Text,
        placeholder: Some("e.g., $500"),
        rules: &[],
        half: true,
    },
    FieldSpec {
        name: "description",
        label: "Project Description",
        input: FieldInput::TextArea { rows: 4 },
        placeholder: Some("Tell us about your project and why you need support..."),
        rules: &[Rule::Required("Please describe your project.")],
        half: false,
    },
];

const COLLABORATION_FIELDS: &[FieldSpec] = &[
    name_field(),
    email_field(),
    FieldSpec {
        name: "title",
        label: "Your Idea / Venture",
        input: FieldInput::Text,
        placeholder: Some("e.g., AI-Powered App for..."),
        rules: &[Rule::Required("Please provide a title for your idea.")],
        half: false,
    },
    FieldSpec {
        name: "proposal",
        label: "Proposal & Your Contribution",
        input: FieldInput::TextArea { rows: 4 },
        placeholder: Some("Briefly describe your idea and what you bring to the table (e.g., industry expertise, audience, etc.)."),
        rules: &[Rule::Required("Please describe your proposal.")],
        half: false,
    },
    FieldSpec {
        name: "needs",
        label: "What you need from ProbSolv",
        input: FieldInput::TextArea { rows: 4 },
        placeholder: Some("What specific expertise or resources are you looking for from us?"),
        rules: &[Rule::Required("Please tell us what you need from us.")],
        half: false,
    },
];

impl FormKind {
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormKind::Bespoke => BESPOKE_FIELDS,
            FormKind::Support => SUPPORT_FIELDS,
            FormKind::Collaboration => COLLABORATION_FIELDS,
        }
    }

    #[cfg(test)]
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|field| field.name == name)
    }

    pub fn form_source(self) -> &'static str {
        match self {
            FormKind::Bespoke => "Pricing Page - Bespoke Solution",
            FormKind::Support => "Pricing Page - Budget Support Request",
            FormKind::Collaboration => "Pricing Page - Collaboration Proposal",
        }
    }

    /// Prefix for element ids so two forms never share one.
    pub fn id_prefix(self) -> &'static str {
        match self {
            FormKind::Bespoke => "bespoke",
            FormKind::Support => "support",
            FormKind::Collaboration => "collab",
        }
    }

    pub fn copy(self) -> FormCopy {
        match self {
            FormKind::Bespoke => FormCopy {
                heading: "Describe Your Custom Requirements",
                submit_label: "Submit Request",
                busy_label: "Sending...",
                thanks_heading: "Thank You!",
                thanks_body: "Your request for a bespoke solution has been received. We will contact you shortly.",
                failure: "Sorry, there was an issue sending your message. Please try again.",
            },
            FormKind::Support => FormCopy {
                heading: "Budget Support Request",
                submit_label: "Submit Request",
                busy_label: "Submitting...",
                thanks_heading: "Thank You!",
                thanks_body: "Your support request has been received. We'll review it and get back to you if it aligns with our support program.",
                failure: "Sorry, there was an issue sending your request. Please try again.",
            },
            FormKind::Collaboration => FormCopy {
                heading: "Collaboration Proposal",
                submit_label: "Propose Collaboration",
                busy_label: "Submitting...",
                thanks_heading: "Proposal Sent!",
                thanks_body: "Thank you for your interest in collaborating. We'll review your proposal and reach out if it's a good fit.",
                failure: "Sorry, there was an issue sending your proposal. Please try again.",
            },
        }
    }
}

/// Current input of one form, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    /// Every field of `kind` present and empty.
    pub fn blank(kind: FormKind) -> Self {
        Self(
            kind.fields()
                .iter()
                .map(|field| (field.name.to_string(), String::new()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: String) {
        self.0.insert(name.to_string(), value);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<&'static str, &'static str>);

impl ValidationErrors {
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.0.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// Check every field of `kind` against `values`.
pub fn validate(kind: FormKind, values: &FormValues) -> ValidationErrors {
    let errors = kind
        .fields()
        .iter()
        .filter_map(|field| {
            let value = values.get(field.name);
            field
                .rules
                .iter()
                .find_map(|rule| rule.check(value))
                .map(|message| (field.name, message))
        })
        .collect();
    ValidationErrors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(kind: FormKind, pairs: &[(&str, &str)]) -> FormValues {
        let mut values = FormValues::blank(kind);
        for (name, value) in pairs {
            values.set(name, value.to_string());
        }
        values
    }

    fn required_fields(kind: FormKind) -> Vec<&'static str> {
        kind.fields()
            .iter()
            .filter(|field| field.is_required())
            .map(|field| field.name)
            .collect()
    }

    fn valid_value(field: &FieldSpec) -> &'static str {
        match field.input {
            FieldInput::Email => "ada@example.com",
            _ => "something",
        }
    }

    #[test]
    fn every_blank_required_combination_is_reported() {
        for kind in [FormKind::Bespoke, FormKind::Support, FormKind::Collaboration] {
            let required = required_fields(kind);
            for mask in 0u32..(1 << required.len()) {
                let mut values = FormValues::blank(kind);
                for (bit, name) in required.iter().enumerate() {
                    if mask & (1 << bit) != 0 {
                        values.set(name, valid_value(kind.field(name).unwrap()).to_string());
                    } else if bit % 2 == 0 {
                        values.set(name, "   ".to_string());
                    }
                }

                let errors = validate(kind, &values);
                for (bit, name) in required.iter().enumerate() {
                    let is_filled = mask & (1 << bit) != 0;
                    assert_eq!(errors.get(name).is_none(), is_filled, "{:?} {} mask {:b}", kind, name, mask);
                }
                assert_eq!(errors.is_empty(), mask == (1 << required.len()) - 1);
            }
        }
    }

    #[test]
    fn blank_email_reports_required_message() {
        let errors = validate(FormKind::Support, &FormValues::blank(FormKind::Support));
        assert_eq!(errors.get("email"), Some("Email Address is required."));
    }

    #[test]
    fn email_shape_check() {
        for bad in ["ada", "ada.example.com", "ada@example", "@example.com", "ada@.com"] {
            assert!(!is_valid_email(bad), "{} should be rejected", bad);
        }
        for good in ["a@b.c", "ada@example.com", "first.last@sub.domain.org"] {
            assert!(is_valid_email(good), "{} should pass", good);
        }

        let values = filled(FormKind::Collaboration, &[("email", "ada@example")]);
        let errors = validate(FormKind::Collaboration, &values);
        assert_eq!(errors.get("email"), Some("Please enter a valid email address."));
    }

    #[test]
    fn long_bespoke_message_fails_with_length_message() {
        let long = "x".repeat(501);
        let values = filled(FormKind::Bespoke, &[("message", &long)]);
        let errors = validate(FormKind::Bespoke, &values);
        assert_eq!(errors.get("message"), Some("Message cannot exceed 500 characters."));

        let values = filled(
            FormKind::Bespoke,
            &[("name", "Ada"), ("email", "ada@example.com"), ("message", &long)],
        );
        let errors = validate(FormKind::Bespoke, &values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("message"), Some("Message cannot exceed 500 characters."));
    }

    #[test]
    fn message_at_limit_passes() {
        let at_limit = "é".repeat(500);
        let values = filled(
            FormKind::Bespoke,
            &[("name", "Ada"), ("email", "ada@example.com"), ("message", &at_limit)],
        );
        assert!(validate(FormKind::Bespoke, &values).is_empty());

        let emoji_at_limit = "😀".repeat(250);
        assert_eq!(input_length(&emoji_at_limit), 500);
        let values = filled(
            FormKind::Bespoke,
            &[("name", "Ada"), ("email", "ada@example.com"), ("message", &emoji_at_limit)],
        );
        assert!(validate(FormKind::Bespoke, &values).is_empty());
    }

    #[test]
    fn emoji_count_twice_toward_the_limit() {
        let emoji = "😀".repeat(300);
        let values = filled(
            FormKind::Bespoke,
            &[("name", "Ada"), ("email", "ada@example.com"), ("message", &emoji)],
        );
        let errors = validate(FormKind::Bespoke, &values);
        assert_eq!(errors.get("message"), Some("Message cannot exceed 500 characters."));
        assert_eq!(input_length("a😀é"), 4);
    }

    #[test]
    fn budget_is_optional() {
        let values = filled(
            FormKind::Support,
            &[
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("service", "Web App"),
                ("description", "Build a portal"),
            ],
        );
        assert!(validate(FormKind::Support, &values).is_empty());
        assert!(!FormKind::Support.field("budget").unwrap().is_required());
    }

    #[test]
    fn collaboration_with_blank_needs_only_flags_needs() {
        let values = filled(
            FormKind::Collaboration,
            &[
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("title", "Analytical Engine"),
                ("proposal", "Let's build it together"),
            ],
        );
        let errors = validate(FormKind::Collaboration, &values);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["needs"]);
    }

    #[test]
    fn only_bespoke_message_has_a_char_limit() {
        assert_eq!(FormKind::Bespoke.field("message").unwrap().char_limit(), Some(500));
        assert_eq!(FormKind::Support.field("description").unwrap().char_limit(), None);
    }
}
