pub mod controller;
pub mod formatter;
pub mod validators;

pub use crate::domain::model::{
    ConversionEvent, Field, FormState, LeadSubmission, LeadTags, WebhookResponse,
};
pub use crate::domain::ports::{ConfigProvider, ConversionTracker, FormView, WebhookTransport};
pub use crate::utils::error::Result;
