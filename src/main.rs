use clap::Parser;
use lead_capture::core::{Field, FormView};
use lead_capture::utils::error::ErrorSeverity;
use lead_capture::utils::logger;
use lead_capture::{
    CliConfig, FormController, HeadlessForm, LeadError, ReqwestWebhook, SubmitOutcome,
    TracingConversionTracker,
};

fn exit_with(e: &LeadError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting lead-capture CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let file = cli.load_file().unwrap_or_else(|e| exit_with(&e));
    let settings = cli
        .settings(file.as_ref())
        .unwrap_or_else(|e| exit_with(&e));
    let track_conversion = cli.analytics_enabled(file.as_ref());

    let mut controller = FormController::new(HeadlessForm::default(), ReqwestWebhook::new(), settings);
    if track_conversion {
        controller = controller.with_tracker(Box::new(TracingConversionTracker));
    }

    controller.input(Field::Name, &cli.name);
    controller.input(Field::Email, &cli.email);
    controller.input(Field::Phone, &cli.phone);
    tracing::debug!(
        "Phone field after formatting: {}",
        controller.view().field_value(Field::Phone)
    );

    match controller.submit().await {
        SubmitOutcome::Delivered { status } => {
            tracing::info!("✅ Lead delivered (HTTP {})", status);
            println!("✅ Thanks! Your information was submitted.");
        }
        SubmitOutcome::Invalid(errors) => {
            for error in &errors {
                eprintln!("❌ {}: {}", error.field(), error);
            }
            exit_with(&LeadError::ValidationError {
                message: format!("{} field(s) failed validation", errors.len()),
            });
        }
        SubmitOutcome::Failed(e) => exit_with(&e),
    }
}
