use crate::text;

/// Monotonic identifier for one submission attempt.
pub type SubmissionId = u64;

/// Relay field names, fixed by the external form-relay contract.
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_COMPANY: &str = "company";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_SUBJECT: &str = "_subject";
pub const FIELD_SOURCE: &str = "source";
/// Hidden honeypot; the relay silently discards submissions that fill it.
pub const FIELD_HONEYPOT: &str = "_gotcha";

/// Editable contact-form fields, addressed by the host's input names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Message,
    Honeypot,
}

impl Field {
    /// Map an input control name to its field, if it is one of ours.
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            FIELD_NAME => Some(Field::Name),
            FIELD_EMAIL => Some(Field::Email),
            FIELD_COMPANY => Some(Field::Company),
            FIELD_PHONE => Some(Field::Phone),
            FIELD_MESSAGE => Some(Field::Message),
            FIELD_HONEYPOT => Some(Field::Honeypot),
            _ => None,
        }
    }
}

/// Contact-form draft state. The message starts out as the decoded
/// pre-fill text when one arrived in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
    pub honeypot: String,
}

impl ContactForm {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
            Field::Honeypot => self.honeypot = value,
        }
    }

    /// Reset every field, as after a successful submission.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Contact-form submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Why a submission did not go through, in the core's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// No response obtained from the relay.
    Network,
    /// The relay answered with a failure, optionally carrying its own
    /// human-readable message.
    Rejected { message: Option<String> },
}

/// The complete, ordered field list POSTed to the relay: honeypot and
/// fixed metadata first, then the sender fields, mirroring the form
/// markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(&'static str, String)>,
}

impl FormPayload {
    pub fn from_form(form: &ContactForm) -> Self {
        Self {
            fields: vec![
                (FIELD_HONEYPOT, form.honeypot.clone()),
                (FIELD_SUBJECT, text::RELAY_SUBJECT.to_owned()),
                (FIELD_SOURCE, text::RELAY_SOURCE.to_owned()),
                (FIELD_NAME, form.name.clone()),
                (FIELD_EMAIL, form.email.clone()),
                (FIELD_COMPANY, form.company.clone()),
                (FIELD_PHONE, form.phone.clone()),
                (FIELD_MESSAGE, form.message.clone()),
            ],
        }
    }

    /// Field name/value pairs in relay order.
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<(&'static str, String)> {
        self.fields
    }
}
