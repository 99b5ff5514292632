use crate::core::{ConversionEvent, ConversionTracker};

/// Emits conversion events as structured log lines.
#[derive(Debug, Clone, Default)]
pub struct TracingConversionTracker;

impl ConversionTracker for TracingConversionTracker {
    fn track(&self, event: &ConversionEvent) {
        tracing::info!(
            event = %event.name,
            send_to = %event.send_to,
            value = event.value,
            currency = %event.currency,
            "Conversion tracked"
        );
    }
}
