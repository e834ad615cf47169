use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use soilsense_core::{recognizer_from_config, ChatOptions, Config, Language, ReplyPolicy, VoiceCapture};
use tokio::sync::mpsc;

mod app;
mod handler;
mod logging;
mod tui;
mod ui;

use app::App;
use tui::EventHandler;

#[derive(Parser, Debug)]
#[command(name = "soilsense")]
#[command(version, about = "Smart agriculture dashboard with a multilingual assistant chat")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Display language code (en, es, hi, ta, ml, te, kn)
    #[arg(short, long)]
    lang: Option<Language>,

    /// Delay before the assistant replies, in milliseconds
    #[arg(long)]
    reply_delay_ms: Option<u64>,

    /// What to do with replies that arrive while the chat is closed
    /// (always, suppress-when-closed)
    #[arg(long)]
    reply_policy: Option<ReplyPolicy>,

    /// Speech-to-text program and its arguments, taken as separate words up
    /// to the end of the command line; `{locale}` is replaced with the
    /// language tag
    #[arg(long, num_args = 1.., allow_hyphen_values = true)]
    voice_command: Option<Vec<String>>,

    /// Disable voice input even if a command is configured
    #[arg(long)]
    no_voice: bool,

    /// Config file (default: <config dir>/soilsense/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the dashboard (default)
    Dashboard,
    /// List supported languages and their speech locales
    Languages,
}

/// Effective settings after layering flags over the config file.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    language: Language,
    options: ChatOptions,
    voice_command: Option<Vec<String>>,
    voice_enabled: bool,
}

fn resolve_settings(cli: &Cli, config: &Config) -> Settings {
    let reply_delay = cli
        .reply_delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.reply_delay());

    Settings {
        language: cli.lang.or(config.language).unwrap_or_default(),
        options: ChatOptions {
            reply_delay,
            reply_policy: cli.reply_policy.or(config.reply_policy).unwrap_or_default(),
        },
        voice_command: cli.voice_command.clone().or_else(|| config.voice_command.clone()),
        voice_enabled: !cli.no_voice,
    }
}

fn print_languages() {
    for language in Language::ALL {
        println!(
            "{:<4}{:<12}{}",
            language.code(),
            language.display_name(),
            language.locale_tag()
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Languages) = cli.command {
        print_languages();
        return Ok(());
    }

    let _log_guard = match logging::default_log_path() {
        Some(path) => match logging::init(&path) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("warning: logging disabled: {e:#}");
                None
            }
        },
        None => None,
    };

    let config_path = cli.config.clone().or_else(|| Config::default_path().ok());
    let config = match &config_path {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            Config::new()
        }),
        None => Config::new(),
    };

    let settings = resolve_settings(&cli, &config);
    tracing::info!(
        language = settings.language.code(),
        reply_policy = settings.options.reply_policy.as_str(),
        delay_ms = settings.options.reply_delay.as_millis() as u64,
        "starting"
    );

    let recognizer = recognizer_from_config(settings.voice_command.as_deref(), settings.voice_enabled);
    tracing::info!(recognizer = recognizer.name(), supported = recognizer.is_supported(), "voice input");
    let voice = VoiceCapture::new(recognizer);

    let (chat_tx, chat_rx) = mpsc::unbounded_channel();
    let mut app = App::new(settings.language, settings.options, voice, chat_tx, config_path);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new(chat_rx);

    let result = run(&mut terminal, &mut app, &mut events).await;

    tui::restore()?;
    result
}

async fn run(terminal: &mut tui::Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event),
            None => app.quit(),
        }
    }

    tracing::info!("exiting");
    Ok(())
}
