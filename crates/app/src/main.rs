use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use flags_core::model::Language;
use services::analyzer::timeout_from_env;
use services::export::format_timestamp;
use services::{
    AppServices, ClearConfirmation, Clock, CompletionService, ServicesConfig, SessionStore,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://flags.sqlite3";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidLanguage { raw: String },
    InvalidTransition { raw: String },
    ClearNotConfirmed,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidLanguage { raw } => {
                write!(f, "invalid --lang value: {raw} (expected ru or kk)")
            }
            ArgsError::InvalidTransition { raw } => {
                write!(f, "invalid --transition-ms value: {raw}")
            }
            ArgsError::ClearNotConfirmed => {
                write!(f, "clear deletes every stored session; pass --yes to confirm")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    language: Language,
    export_dir: PathBuf,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn initial_language(&self) -> Language {
        self.language
    }

    fn transition_delay(&self) -> Duration {
        self.services.transition_delay()
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    fn session_store(&self) -> Arc<SessionStore> {
        self.services.session_store()
    }

    fn completion(&self) -> Arc<CompletionService> {
        self.services.completion()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    db_url: String,
    language: Language,
    transition: Duration,
    out_dir: PathBuf,
    confirmed: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            language: Language::Ru,
            transition: services::quiz_loop::DEFAULT_TRANSITION_DELAY,
            out_dir: PathBuf::from("."),
            confirmed: false,
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--lang ru|kk] [--transition-ms <ms>]");
    eprintln!("  cargo run -p app -- list   [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- export [--db <sqlite_url>] [--out <dir>]");
    eprintln!("  cargo run -p app -- clear  [--db <sqlite_url>] --yes");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --lang ru");
    eprintln!("  --transition-ms 400");
    eprintln!("  --out .");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLAGS_DB_URL, FLAGS_LANG, FLAGS_TRANSITION_MS, FLAGS_EXPORT_DIR");
    eprintln!("  FLAGS_AI_API_KEY, FLAGS_AI_BASE_URL, FLAGS_AI_MODEL, FLAGS_AI_TIMEOUT_SECS");
    eprintln!("  RUST_LOG (default: info)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    List,
    Export,
    Clear,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "list" => Some(Self::List),
            "export" => Some(Self::Export),
            "clear" => Some(Self::Clear),
            _ => None,
        }
    }
}

impl Args {
    /// Defaults overridden by `FLAGS_*` variables. Malformed values are ignored.
    fn from_env() -> Self {
        let defaults = Self::default();
        let env = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            db_url: normalize_sqlite_url(env("FLAGS_DB_URL").unwrap_or(defaults.db_url)),
            language: env("FLAGS_LANG")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.language),
            transition: env("FLAGS_TRANSITION_MS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map_or(defaults.transition, Duration::from_millis),
            out_dir: env("FLAGS_EXPORT_DIR").map_or(defaults.out_dir, PathBuf::from),
            confirmed: false,
        }
    }

    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
        mut base: Self,
    ) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match (cmd, arg.as_str()) {
                (_, "--db") => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    base.db_url = normalize_sqlite_url(value);
                }
                (Command::Ui, "--lang") => {
                    let value = require_value(args, "--lang")?;
                    base.language = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLanguage { raw: value.clone() })?;
                }
                (Command::Ui, "--transition-ms") => {
                    let value = require_value(args, "--transition-ms")?;
                    let ms: u64 = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidTransition { raw: value.clone() })?;
                    base.transition = Duration::from_millis(ms);
                }
                (Command::Ui | Command::Export, "--out") => {
                    base.out_dir = PathBuf::from(require_value(args, "--out")?);
                }
                (Command::Clear, "--yes") => base.confirmed = true,
                (_, "--help" | "-h") => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if cmd == Command::Clear && !base.confirmed {
            return Err(ArgsError::ClearNotConfirmed);
        }
        Ok(base)
    }
}

/// Resolve a SQLite URL or bare path to `sqlite://<absolute path>`.
fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" {
        return raw;
    }

    let trimmed = raw.trim();
    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);
    let path = std::path::Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the desktop quiz.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter, Args::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    prepare_sqlite_file(&parsed.db_url)?;
    let config = ServicesConfig {
        transition_delay: parsed.transition,
        analysis_timeout: timeout_from_env(),
    };
    let services = AppServices::new_sqlite(&parsed.db_url, Clock::default_clock(), config).await?;
    tracing::info!(db = %parsed.db_url, command = ?cmd, "storage ready");

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                language: parsed.language,
                export_dir: parsed.out_dir,
                services,
            });
            let context = build_app_context(&app);

            // Dioxus/tao can default to always-on-top in some macOS dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Red Flag / Green Flag")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::List => {
            let sessions = services.session_store().list_all().await;
            for session in &sessions {
                let profile = session.profile();
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\tred={}\tgreen={}",
                    session.id(),
                    format_timestamp(session.timestamp()),
                    profile.phone(),
                    profile.age(),
                    profile.region(),
                    profile.language(),
                    session.red_count(),
                    session.green_count(),
                );
            }
            eprintln!("{} session(s)", sessions.len());
            Ok(())
        }
        Command::Export => match services.session_store().export_to_table().await {
            None => {
                eprintln!("nothing to export");
                Ok(())
            }
            Some(export) => {
                let path = export.write_to_dir(&parsed.out_dir).await?;
                eprintln!("exported {} session(s) to {}", export.rows(), path.display());
                Ok(())
            }
        },
        Command::Clear => {
            services
                .session_store()
                .clear_all(ClearConfirmation::confirmed())
                .await?;
            eprintln!("all sessions deleted");
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
