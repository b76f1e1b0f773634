use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

const MAX_NAME_LEN: usize = 150;
const MAX_EMAIL_LEN: usize = 255;

/// A stored contact-form message. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// What a visitor typed into the contact form, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Missing required fields: name, email, and message are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("{0} is too long")]
    TooLong(&'static str),
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ContactSubmission {
    pub fn validate(self) -> Result<ValidContact, ContactError> {
        let (Some(name), Some(email), Some(message)) =
            (present(self.name), present(self.email), present(self.message))
        else {
            return Err(ContactError::MissingFields);
        };

        if name.chars().count() > MAX_NAME_LEN {
            return Err(ContactError::TooLong("name"));
        }
        if email.len() > MAX_EMAIL_LEN {
            return Err(ContactError::TooLong("email"));
        }
        if !EmailAddress::is_valid(&email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ValidContact {
            name,
            email,
            message,
        })
    }
}
