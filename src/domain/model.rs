use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three inputs of the lead form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    /// Element id of the input.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Element id of the inline error message next to the input.
    pub fn error_id(&self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Phone => "phoneError",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone number",
        }
    }

    pub(crate) fn noun(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email address",
            Field::Phone => "phone number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Submitting,
    Success,
}

/// Origin tags attached to every lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadTags {
    pub source: String,
    pub campaign: String,
}

impl Default for LeadTags {
    fn default() -> Self {
        Self {
            source: "Fitness Landing Page".to_string(),
            campaign: "90-Day Transformation".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub timestamp: String,
    pub source: String,
    pub campaign: String,
}

impl LeadSubmission {
    /// Normalizes raw (already validated) field values into a submission
    /// stamped with `at`.
    pub fn new(name: &str, email: &str, phone: &str, tags: &LeadTags, at: DateTime<Utc>) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.trim().to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: tags.source.clone(),
            campaign: tags.campaign.clone(),
        }
    }

    pub fn form_pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("timestamp", self.timestamp.as_str()),
            ("source", self.source.as_str()),
            ("campaign", self.campaign.as_str()),
        ]
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.form_pairs())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    /// `None` when the body could not be read.
    pub body: Option<String>,
}

impl WebhookResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parameters handed to the conversion tracker after a successful submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionEvent {
    pub name: String,
    pub send_to: String,
    pub value: f64,
    pub currency: String,
}

impl Default for ConversionEvent {
    fn default() -> Self {
        Self {
            name: "conversion".to_string(),
            send_to: "AW-CONVERSION_ID/CONVERSION_LABEL".to_string(),
            value: 1.0,
            currency: "USD".to_string(),
        }
    }
}
