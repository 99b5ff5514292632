use crate::core::{Field, FormView};
use std::collections::HashMap;

/// In-memory form used by the CLI and by tests. Records every visual state
/// the controller applies instead of rendering it. Error messages are held
/// under the id of the element that would display them.
#[derive(Debug, Clone)]
pub struct HeadlessForm {
    values: HashMap<Field, String>,
    errors: HashMap<&'static str, String>,
    focused: Option<Field>,
    submit_enabled: bool,
    loading: bool,
    dimmed: bool,
    form_visible: bool,
    success_visible: bool,
    scrolled: bool,
    alerts: Vec<String>,
}

impl Default for HeadlessForm {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            errors: HashMap::new(),
            focused: None,
            submit_enabled: true,
            loading: false,
            dimmed: false,
            form_visible: true,
            success_visible: false,
            scrolled: false,
            alerts: Vec::new(),
        }
    }
}

impl HeadlessForm {
    pub fn with_values(name: &str, email: &str, phone: &str) -> Self {
        let mut form = Self::default();
        form.values.insert(Field::Name, name.to_string());
        form.values.insert(Field::Email, email.to_string());
        form.values.insert(Field::Phone, phone.to_string());
        form
    }

    pub fn error_message(&self, field: Field) -> Option<&str> {
        self.error_text(field.error_id())
    }

    /// Message rendered in the error element with the given id.
    pub fn error_text(&self, element_id: &str) -> Option<&str> {
        self.errors.get(element_id).map(String::as_str)
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn dimmed(&self) -> bool {
        self.dimmed
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    pub fn scrolled_into_view(&self) -> bool {
        self.scrolled
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl FormView for HeadlessForm {
    fn field_value(&self, field: Field) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_field_value(&mut self, field: Field, value: &str) {
        self.values.insert(field, value.to_string());
    }

    fn show_field_error(&mut self, field: Field, message: &str) {
        self.errors.insert(field.error_id(), message.to_string());
    }

    fn clear_field_error(&mut self, field: Field) {
        self.errors.remove(field.error_id());
    }

    fn has_field_error(&self, field: Field) -> bool {
        self.errors.contains_key(field.error_id())
    }

    fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    fn scroll_into_view(&mut self) {
        self.scrolled = true;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_dimmed(&mut self, dimmed: bool) {
        self.dimmed = dimmed;
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn show_success_panel(&mut self) {
        self.success_visible = true;
    }

    fn reset_form(&mut self) {
        self.values.clear();
    }

    fn alert(&mut self, message: &str) {
        tracing::warn!("Alert: {}", message);
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_form_is_interactive() {
        let form = HeadlessForm::default();
        assert!(form.submit_enabled());
        assert!(form.form_visible());
        assert!(!form.success_visible());
        assert_eq!(form.field_value(Field::Email), "");
    }

    #[test]
    fn test_reset_clears_values_only() {
        let mut form = HeadlessForm::with_values("Jane", "jane@example.com", "5551234567");
        form.show_field_error(Field::Name, "Name is required");
        form.reset_form();

        assert_eq!(form.field_value(Field::Name), "");
        assert!(form.has_field_error(Field::Name));
    }

    #[test]
    fn test_errors_render_into_their_own_element() {
        let mut form = HeadlessForm::default();
        form.show_field_error(Field::Email, "Please enter a valid email address");

        assert_eq!(
            form.error_text("emailError"),
            Some("Please enter a valid email address")
        );
        assert_eq!(form.error_text("nameError"), None);
        assert!(!form.has_field_error(Field::Phone));

        form.clear_field_error(Field::Email);
        assert_eq!(form.error_text("emailError"), None);
    }
}
