pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{HeadlessForm, ReqwestWebhook, TracingConversionTracker};
pub use crate::config::FormSettings;
pub use crate::core::controller::{FormController, SubmitOutcome};
pub use crate::utils::error::{LeadError, Result};
