use anyhow::bail;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quotegen::app::{
    QuoteRequestController, ShareDisposition, copy_current_quote, share_current_quote,
};
use quotegen::domain::{GenerationResult, PredefinedTheme};
use quotegen::infra::api::HttpQuoteBackend;
use quotegen::infra::platform::{CommandClipboard, DesktopShare};

#[derive(Parser)]
#[command(
    name = "quotegen",
    about = "Generate themed quotes from the quote service"
)]
struct Cli {
    /// Predefined theme tag, for example "wisdom". See --list-themes.
    #[arg(value_name = "THEME", conflicts_with = "custom")]
    theme: Option<String>,

    /// Free-text custom theme instead of a predefined tag.
    #[arg(long, value_name = "TEXT")]
    custom: Option<String>,

    /// Copy the generated quote to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Share the generated quote (native share, or copy plus share URL).
    #[arg(long)]
    share: bool,

    /// Page URL attached to shared quotes.
    #[arg(long, value_name = "URL", default_value = "http://localhost:3000/")]
    page_url: String,

    /// List the predefined theme tags and exit.
    #[arg(long)]
    list_themes: bool,
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    if cli.list_themes {
        for theme in PredefinedTheme::ALL {
            println!("{:<14} {}", theme.tag(), theme.label());
        }
        return Ok(());
    }

    let mut controller = QuoteRequestController::new();
    match (&cli.theme, &cli.custom) {
        (Some(tag), None) => {
            let Some(theme) = PredefinedTheme::from_tag(tag) else {
                bail!("unknown theme tag '{tag}' (see --list-themes)");
            };
            controller.select_predefined_theme(Some(theme));
        }
        (None, Some(text)) => controller.set_custom_theme(text),
        _ => {}
    }

    let backend = HttpQuoteBackend::from_env()?;
    if let Err(error) = controller.generate(&backend) {
        bail!(error.user_message());
    }

    match controller.result() {
        Some(GenerationResult::Success(success)) => {
            if !success.resolved_theme.is_empty() {
                println!("[{}]", success.resolved_theme);
            }
            println!("\"{}\"", success.quote);
            println!("   - {}", success.author);
        }
        Some(GenerationResult::Failure { message }) => {
            bail!("{message}");
        }
        None => bail!("no result was produced"),
    }

    if cli.copy && copy_current_quote(&controller, &CommandClipboard)? {
        eprintln!("Copied to clipboard.");
    }

    if cli.share {
        match share_current_quote(&controller, &DesktopShare, &CommandClipboard, &cli.page_url)? {
            Some(ShareDisposition::Native) => eprintln!("Shared."),
            Some(ShareDisposition::CopiedWithShareUrl) => {
                eprintln!("Copied to clipboard and opened the share page.");
            }
            None => {}
        }
    }

    Ok(())
}
