//! Vitrine CLI - render a headless-CMS portfolio in the terminal
//!
//! Usage: vitrine <COMMAND>
//!
//! Commands:
//!   show        Load the whole page and render its sections
//!   settings    Show the portfolio settings
//!   projects    List projects
//!   skills      List skills grouped by category
//!   experience  List experience, most relevant first
//!   hero        Play the hero typing animation
//!   contact     Draft a contact email or record a submission

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod ui;

use commands::Session;
use vitrine::config::{load_layered, ConfigWarning};
use vitrine::presentation::{Cli, Commands};
use vitrine::ContactForm;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    if let Err(err) = run(cli).await {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = load_layered(cli.config.as_deref(), Some(cwd.as_path()))?;

    let session = Session {
        ui: ui::context::UiContext::new(cli.json, cli.verbose, cli.color, &config),
        config,
        fixture: cli.fixture,
    };
    print_config_warnings(&warnings, &session);

    match cli.command {
        Commands::Show { sections } => commands::show::cmd_show(&session, &sections).await,
        Commands::Settings => commands::content::cmd_settings(&session).await,
        Commands::Projects { featured, detail } => {
            commands::content::cmd_projects(&session, featured, detail.as_deref()).await
        }
        Commands::Skills => commands::content::cmd_skills(&session).await,
        Commands::Experience => commands::content::cmd_experience(&session).await,
        Commands::Hero { cycles } => commands::hero::cmd_hero(&session, cycles).await,
        Commands::Contact {
            name,
            email,
            message,
            send,
        } => {
            let form = ContactForm::new(name, email, message);
            commands::contact::cmd_contact(&session, form, send).await
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vitrine={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn print_config_warnings(warnings: &[ConfigWarning], session: &Session) {
    let ui = &session.ui;
    for warning in warnings {
        if ui.json {
            let _ = ui::json::write_event(&mut std::io::stderr(), &serde_json::json!({
                "event": "warning",
                "kind": "config",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }));
            continue;
        }

        let location = match warning.line {
            Some(line) => format!("{}:{line}", warning.file.display()),
            None => warning.file.display().to_string(),
        };
        let mut message = format!("unknown config key '{}' in {location}", warning.key);
        if let Some(suggestion) = &warning.suggestion {
            message.push_str(&format!(" (did you mean '{suggestion}'?)"));
        }
        eprintln!(
            "{} {}",
            ui::primitives::icon::Icon::Warning.colored(ui.color, ui.unicode),
            message
        );
    }
}
