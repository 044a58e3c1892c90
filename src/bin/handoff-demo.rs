//! Sample host for the companion libraries
//!
//! Runs the handoff protocol against an in-memory platform and prints what
//! a real app would show or launch.

use anyhow::{anyhow, Context, Result};
use app_core::ecosystem::{
    AccountReceiver, CompanionApp, EcosystemConfig, EcosystemManager, ECOSYSTEM_INTENT_ACTION,
    EXTRA_KEY_ACCOUNT,
};
use app_core::DateFormatter;
use app_platform::memory::MemoryPlatform;
use app_platform::{Intent, NoticeLength, NoticeSink};
use app_ui::colors;
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand};
use i18n::Translator;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "handoff-demo", version, about = "Exercise the companion app libraries")]
struct Cli {
    /// Preferred language tags, most preferred first
    #[arg(long, env = "HANDOFF_LOCALE", value_delimiter = ',', global = true)]
    locale: Vec<String>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hand an account to a companion app
    Send {
        /// Target app (files, notes, talk)
        #[arg(long)]
        app: CompanionApp,

        /// Account name to hand over
        #[arg(long)]
        account: Option<String>,

        /// Packages installed on the simulated device
        #[arg(long = "installed")]
        installed: Vec<String>,

        /// Simulate a device without a marketplace app
        #[arg(long)]
        no_store: bool,

        /// Simulate a device without a browser
        #[arg(long)]
        no_browser: bool,
    },

    /// Receive a handoff intent
    Receive {
        /// Intent action (defaults to the handoff action)
        #[arg(long)]
        action: Option<String>,

        /// Account extra
        #[arg(long)]
        account: Option<String>,

        /// Deliver no intent at all
        #[arg(long)]
        empty: bool,
    },

    /// Format a timestamp some minutes in the past
    Date {
        /// Minutes before now
        #[arg(long, default_value_t = 0)]
        minutes_ago: i64,
    },

    /// Inspect a color string
    Color {
        /// Color such as #0082C9 or navy
        value: String,
    },
}

struct StdoutNotices;

impl NoticeSink for StdoutNotices {
    fn show(&self, message: &str, length: NoticeLength) {
        println!("notice ({:?}): {}", length, message);
    }
}

struct PrintingReceiver;

impl AccountReceiver for PrintingReceiver {
    fn on_account_received(&mut self, account_name: &str) {
        println!("account received: {}", account_name);
    }

    fn on_account_error(&mut self, reason: &str) {
        println!("account error: {}", reason);
    }
}

fn load_config(cli: &Cli) -> Result<EcosystemConfig> {
    let mut config = match &cli.config {
        Some(path) => EcosystemConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EcosystemConfig::default(),
    };
    if !cli.locale.is_empty() {
        config.locale = cli.locale.clone();
    }
    tracing::debug!(locale = ?config.locale, notice_length = ?config.notice_length, "configuration ready");
    Ok(config)
}

fn minutes_before(now: DateTime<Utc>, minutes: i64) -> Result<DateTime<Utc>> {
    Duration::try_minutes(minutes)
        .and_then(|span| now.checked_sub_signed(span))
        .ok_or_else(|| anyhow!("--minutes-ago {} is out of range", minutes))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let translator = Translator::new(&config.locale_tags()).context("Failed to load translations")?;
    tracing::info!("Using locale {}", translator.locale());

    match &cli.command {
        Command::Send { app, account, installed, no_store, no_browser } => {
            let mut platform = MemoryPlatform::new().with_store_app(!no_store).with_browser(!no_browser);
            for package in installed {
                platform.install(package.as_str());
            }

            let manager = EcosystemManager::with_config(&platform, StdoutNotices, config)?;
            match manager.open_app(*app, account.as_deref()) {
                Ok(target) => {
                    tracing::info!(app = %app, package = target.package(), "handoff delivered");
                    println!("launched {}", target.package());
                }
                Err(e) => {
                    tracing::info!(app = %app, "handoff not delivered: {}", e);
                    println!("not launched: {}", e);
                }
            }

            for intent in platform.delivered() {
                println!("{}", serde_json::to_string_pretty(&intent)?);
            }
        }
        Command::Receive { action, account, empty } => {
            let intent = (!empty).then(|| {
                let mut intent = Intent::new(action.as_deref().unwrap_or(ECOSYSTEM_INTENT_ACTION));
                if let Some(account) = account {
                    intent = intent.with_extra(EXTRA_KEY_ACCOUNT, account.as_str());
                }
                intent
            });

            let platform = MemoryPlatform::new();
            let manager = EcosystemManager::with_config(&platform, StdoutNotices, config)?;
            tracing::info!(has_intent = intent.is_some(), "receiving handoff");
            manager.receive_account_with(intent.as_ref(), &mut PrintingReceiver);
        }
        Command::Date { minutes_ago: minutes } => {
            let timestamp = minutes_before(Utc::now(), *minutes)?;
            tracing::debug!("formatting {}", timestamp);

            let formatter = DateFormatter::new(translator);
            println!("{}", formatter.conditionally_relative_time_span(&timestamp));
        }
        Command::Color { value } => {
            let color = colors::parse_color(value).with_context(|| format!("Cannot inspect {:?}", value))?;
            tracing::debug!(?color, "parsed color");
            println!("hex: {}", colors::to_hex_string(color));
            println!("dark: {}", colors::is_dark_background(color));
            println!("foreground: {}", colors::to_hex_string(colors::foreground_for_background(color)));
        }
    }

    Ok(())
}
