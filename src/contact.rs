use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_MESSAGE_LEN: usize = 1000;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Trims every field and checks it against the rules the backend enforces.
    pub fn validated(self) -> Result<Self, ApiError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ApiError::Validation("Please enter your name".to_string()));
        }
        if email.is_empty() {
            return Err(ApiError::Validation("Please enter your email".to_string()));
        }
        if message.is_empty() {
            return Err(ApiError::Validation("Please enter a message".to_string()));
        }
        if !is_valid_email(email) {
            return Err(ApiError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ApiError::Validation(format!(
                "Name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ApiError::Validation(format!(
                "Message must be at most {MAX_MESSAGE_LEN} characters"
            )));
        }

        Ok(Self::new(name, email, message))
    }
}

/// Backend acknowledgement for a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
    pub message_id: Option<String>,
    pub submitted_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AckData {
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    New,
    Read,
    Responded,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Responded => "responded",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Document id assigned by the store.
    #[serde(rename = "_id", default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub submitted_at: String,
    #[serde(default)]
    pub status: MessageStatus,
}

impl ContactMessage {
    /// Id accepted by the status update endpoint.
    pub fn key(&self) -> Option<&str> {
        self.object_id.as_deref().or(self.id.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePage {
    pub messages: Vec<ContactMessage>,
    pub total_count: u64,
    pub skip: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(ApiError),
}

impl FormStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Error(_))
    }
}

/// Contact form state: `Idle -> Submitting -> {Success, Error}`, back to `Idle` on edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: FormStatus,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Inputs are locked while a request is in flight.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        if self.status.is_terminal() {
            self.status = FormStatus::Idle;
        }
    }

    /// Moves to `Submitting` and hands back the request to send. Returns `None` when not
    /// idle, or when validation fails (the form is then in `Error`).
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.status != FormStatus::Idle {
            return None;
        }
        let request = ContactRequest::new(&self.name, &self.email, &self.message);
        match request.validated() {
            Ok(request) => {
                self.status = FormStatus::Submitting;
                Some(request)
            }
            Err(e) => {
                self.status = FormStatus::Error(e);
                None
            }
        }
    }

    pub fn finish(&mut self, result: Result<Ack, ApiError>) {
        if !self.is_submitting() {
            return;
        }
        self.status = match result {
            Ok(ack) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                FormStatus::Success(ack.message)
            }
            Err(e) => FormStatus::Error(e),
        };
    }

    /// Dismisses an error so the same values can be sent again.
    pub fn retry(&mut self) {
        if matches!(self.status, FormStatus::Error(_)) {
            self.status = FormStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada");
        form.edit(Field::Email, "ada@example.com");
        form.edit(Field::Message, "Hello there");
        form
    }

    fn ack() -> Ack {
        Ack {
            message: "Thank you for your message! I'll get back to you soon.".to_string(),
            message_id: Some("abc".to_string()),
            submitted_at: None,
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@example.c"));
        assert!(!is_valid_email(" ada@example.com"));
    }

    #[test]
    fn test_validation_trims_and_rejects_blanks() {
        let ok = ContactRequest::new("  Ada ", " ada@example.com ", "\nhi\n")
            .validated()
            .unwrap();
        assert_eq!(ok, ContactRequest::new("Ada", "ada@example.com", "hi"));

        for (name, email, message) in [
            ("   ", "ada@example.com", "hi"),
            ("Ada", "", "hi"),
            ("Ada", "ada@example.com", " \t "),
        ] {
            let err = ContactRequest::new(name, email, message)
                .validated()
                .unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)));
        }
    }

    #[test]
    fn test_validation_lengths() {
        let long_name = "a".repeat(MAX_NAME_LEN + 1);
        assert!(ContactRequest::new(long_name, "ada@example.com", "hi")
            .validated()
            .is_err());
        let long_message = "m".repeat(MAX_MESSAGE_LEN + 1);
        assert!(ContactRequest::new("Ada", "ada@example.com", long_message)
            .validated()
            .is_err());
        let max_message = "m".repeat(MAX_MESSAGE_LEN);
        assert!(ContactRequest::new("Ada", "ada@example.com", max_message)
            .validated()
            .is_ok());
    }

    #[test]
    fn test_successful_submission_clears_fields() {
        let mut form = filled();
        let request = form.begin_submit().unwrap();
        assert_eq!(request.email, "ada@example.com");
        assert!(form.is_submitting());

        form.finish(Ok(ack()));
        assert!(matches!(form.status(), FormStatus::Success(_)));
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Email), "");
        assert_eq!(form.value(Field::Message), "");
    }

    #[test]
    fn test_failed_submission_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(Err(ApiError::network("connection refused")));
        assert!(matches!(form.status(), FormStatus::Error(ApiError::Network { .. })));
        assert_eq!(form.value(Field::Name), "Ada");
        assert_eq!(form.value(Field::Message), "Hello there");

        // no resubmission until the error is dismissed or a field is edited
        assert!(form.begin_submit().is_none());
        form.retry();
        assert_eq!(form.status(), &FormStatus::Idle);
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_invalid_email_never_submits() {
        let mut form = filled();
        form.edit(Field::Email, "not-an-email");
        assert!(form.begin_submit().is_none());
        assert!(matches!(form.status(), FormStatus::Error(ApiError::Validation(_))));
        assert_eq!(form.value(Field::Email), "not-an-email");
    }

    #[test]
    fn test_no_double_submit() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        form.edit(Field::Name, "Eve");
        assert_eq!(form.value(Field::Name), "Ada");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_edit_after_terminal_returns_to_idle() {
        let mut form = filled();
        form.begin_submit();
        form.finish(Ok(ack()));
        form.edit(Field::Name, "B");
        assert_eq!(form.status(), &FormStatus::Idle);

        form.edit(Field::Email, "bad");
        form.begin_submit();
        assert!(form.status().is_terminal());
        form.edit(Field::Email, "b@example.com");
        assert_eq!(form.status(), &FormStatus::Idle);
    }

    #[test]
    fn test_finish_ignored_when_not_submitting() {
        let mut form = filled();
        form.finish(Ok(ack()));
        assert_eq!(form.status(), &FormStatus::Idle);
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[test]
    fn test_contact_message_wire_format() {
        let raw = r#"{
            "_id": "65f0c0ffee",
            "id": "2b0c",
            "name": "Ada",
            "email": "ada@example.com",
            "message": "hi",
            "submittedAt": "2025-01-01T10:00:00",
            "status": "read"
        }"#;
        let msg: ContactMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(msg.key(), Some("65f0c0ffee"));
        assert_eq!(msg.status, MessageStatus::Read);
        assert_eq!(MessageStatus::Responded.to_string(), "responded");
    }
}
