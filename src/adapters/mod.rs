// Adapters layer: concrete implementations of the form ports.

pub mod analytics;
pub mod http;
pub mod view;

pub use analytics::TracingConversionTracker;
pub use http::ReqwestWebhook;
pub use view::HeadlessForm;
