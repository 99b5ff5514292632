use anyhow::Context;
use clap::Parser;
use lead_capture::config::webhook_env;
use lead_capture::utils::logger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gen_config")]
#[command(about = "Generate config.js with the webhook URL from WEBHOOK_URL or .env")]
struct Args {
    /// Where to write the generated file
    #[arg(short, long, default_value = "config.js")]
    output: PathBuf,

    /// Local env file consulted when WEBHOOK_URL is not set
    #[arg(long, default_value = ".env")]
    dotenv: PathBuf,

    /// Fail instead of falling back to the placeholder URL
    #[arg(long)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let resolved =
        webhook_env::resolve_for_build(webhook_env::WEBHOOK_URL_VAR, &args.dotenv, args.strict)
            .with_context(|| format!("resolving webhook URL via {}", args.dotenv.display()))?;
    tracing::debug!("Webhook URL source: {:?}", resolved.source);

    webhook_env::write_config_js(&args.output, &resolved.url)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("✅ {} generated successfully", args.output.display());
    Ok(())
}
