use crate::core::validators::{FieldError, FieldResult, FieldRules};
use crate::core::{
    ConfigProvider, ConversionTracker, Field, FormState, FormView, LeadSubmission,
    WebhookResponse, WebhookTransport,
};
use crate::utils::error::{LeadError, Result};
use chrono::Utc;

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; no request was sent. Errors are in field order.
    Invalid(Vec<FieldError>),
    /// The webhook answered with a success status.
    Delivered { status: u16 },
    /// Transport failure or HTTP error status. The form is interactive again.
    Failed(LeadError),
}

/// Drives the lead form: per-field validation on blur, input formatting,
/// and the submit flow `Idle -> Validating -> Submitting -> Success | Idle`.
///
/// `submit` borrows the controller mutably, so at most one webhook request
/// is in flight per form.
pub struct FormController<V: FormView, T: WebhookTransport, C: ConfigProvider> {
    view: V,
    transport: T,
    config: C,
    rules: FieldRules,
    tracker: Option<Box<dyn ConversionTracker>>,
    state: FormState,
}

impl<V: FormView, T: WebhookTransport, C: ConfigProvider> FormController<V, T, C> {
    pub fn new(view: V, transport: T, config: C) -> Self {
        Self {
            view,
            transport,
            config,
            rules: FieldRules::default(),
            tracker: None,
            state: FormState::Idle,
        }
    }

    pub fn with_rules(mut self, rules: FieldRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_tracker(mut self, tracker: Box<dyn ConversionTracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn scroll_to_form(&mut self) {
        self.view.scroll_into_view();
        self.view.focus(Field::Name);
    }

    pub fn on_blur(&mut self, field: Field) -> FieldResult {
        let result = self.rules.validate(field, &self.view.field_value(field));
        match &result {
            Err(e) => self.view.show_field_error(field, &e.to_string()),
            Ok(()) => self.view.clear_field_error(field),
        }
        result
    }

    /// Handles an input event: re-renders the value through the field's
    /// formatter and clears a stale error mark without re-validating.
    pub fn on_input(&mut self, field: Field) {
        if let Some(formatter) = self.rules.get(field).and_then(|rule| rule.formatter) {
            let current = self.view.field_value(field);
            let formatted = formatter(&current);
            if formatted != current {
                self.view.set_field_value(field, &formatted);
            }
        }

        if self.view.has_field_error(field) {
            self.view.clear_field_error(field);
        }
    }

    /// Replaces the field value and fires the input event, as typing would.
    pub fn input(&mut self, field: Field, value: &str) {
        self.view.set_field_value(field, value);
        self.on_input(field);
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.state = FormState::Validating;

        for field in Field::ALL {
            self.view.clear_field_error(field);
        }

        let failures: Vec<FieldError> = self
            .rules
            .iter()
            .filter_map(|rule| (rule.validator)(&self.view.field_value(rule.field)).err())
            .collect();

        if let Some(first) = failures.first() {
            for error in &failures {
                self.view.show_field_error(error.field(), &error.to_string());
            }
            self.view.focus(first.field());
            self.state = FormState::Idle;
            tracing::debug!("Submission blocked by {} invalid field(s)", failures.len());
            return SubmitOutcome::Invalid(failures);
        }

        let lead = LeadSubmission::new(
            &self.view.field_value(Field::Name),
            &self.view.field_value(Field::Email),
            &self.view.field_value(Field::Phone),
            self.config.lead_tags(),
            Utc::now(),
        );

        self.state = FormState::Submitting;
        self.view.set_submit_enabled(false);
        self.view.set_loading(true);
        self.view.set_dimmed(true);

        match self.deliver(&lead).await {
            Ok(response) => {
                self.complete(&lead, &response).await;
                SubmitOutcome::Delivered {
                    status: response.status,
                }
            }
            Err(e) => {
                self.recover(&e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn deliver(&self, lead: &LeadSubmission) -> Result<WebhookResponse> {
        tracing::debug!("Posting lead to {}", self.config.webhook_url());
        let response = self
            .transport
            .post_form(self.config.webhook_url(), lead.to_form_body())
            .await?;

        if !response.is_success() {
            return Err(LeadError::HttpStatusError {
                status: response.status,
            });
        }
        Ok(response)
    }

    async fn complete(&mut self, lead: &LeadSubmission, response: &WebhookResponse) {
        match &response.body {
            Some(body) => tracing::debug!("Webhook response: {}", body),
            None => tracing::debug!("Request sent successfully (response unreadable)"),
        }

        let delay = self.config.success_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.view.hide_form();
        self.view.show_success_panel();
        self.view.reset_form();
        self.state = FormState::Success;

        match serde_json::to_string(lead) {
            Ok(json) => tracing::debug!("Submitted lead: {}", json),
            Err(e) => tracing::debug!("Submitted lead could not be serialized: {}", e),
        }
        tracing::info!(
            email = %lead.email,
            source = %lead.source,
            campaign = %lead.campaign,
            status = response.status,
            "Lead submitted successfully"
        );

        if let Some(tracker) = &self.tracker {
            tracker.track(self.config.conversion_event());
        }
    }

    fn recover(&mut self, error: &LeadError) {
        tracing::error!("Error submitting form: {}", error);
        if error.looks_cross_origin() {
            tracing::warn!("Possible cross-origin rejection; check the webhook dashboard to confirm delivery");
        }

        self.view.alert(&error.user_friendly_message());

        self.view.set_loading(false);
        self.view.set_submit_enabled(true);
        self.view.set_dimmed(false);
        self.state = FormState::Idle;
    }
}
