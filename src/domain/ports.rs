use crate::domain::model::{ConversionEvent, Field, LeadTags, WebhookResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn webhook_url(&self) -> &str;
    fn lead_tags(&self) -> &LeadTags;
    /// Pause between a successful response and revealing the success panel.
    fn success_delay(&self) -> Duration;
    fn conversion_event(&self) -> &ConversionEvent;
}

/// The page elements the form controller drives.
pub trait FormView: Send {
    fn field_value(&self, field: Field) -> String;
    fn set_field_value(&mut self, field: Field, value: &str);

    /// Marks the input as invalid and shows `message` in its error element.
    fn show_field_error(&mut self, field: Field, message: &str);
    fn clear_field_error(&mut self, field: Field);
    fn has_field_error(&self, field: Field) -> bool;

    fn focus(&mut self, field: Field);
    fn scroll_into_view(&mut self);

    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_loading(&mut self, loading: bool);
    fn set_dimmed(&mut self, dimmed: bool);

    fn hide_form(&mut self);
    fn show_success_panel(&mut self);
    /// Clears every field value.
    fn reset_form(&mut self);

    /// Blocking user-facing notice.
    fn alert(&mut self, message: &str);
}

#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// POSTs an already-encoded form body. Only transport-level failures are
    /// errors; any HTTP status comes back as a response.
    async fn post_form(&self, url: &str, body: String) -> Result<WebhookResponse>;
}

pub trait ConversionTracker: Send + Sync {
    fn track(&self, event: &ConversionEvent);
}
