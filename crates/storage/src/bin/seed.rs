use std::fmt;

use chrono::{DateTime, Duration, Utc};
use flags_core::catalog::{questions, regions};
use flags_core::model::{Answer, Flag, GameSession, Gender, Language, SessionId, UserProfile};
use storage::records::{SESSIONS_KEY, prepend_session};
use storage::repository::Storage;

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    sessions: u32,
    now: Option<DateTime<Utc>>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSessions { raw: String },
    InvalidDbUrl { raw: String },
    InvalidNow { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSessions { raw } => write!(f, "invalid --sessions value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidNow { raw } => {
                write!(f, "invalid --now value (expected RFC3339): {raw}")
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

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut db_url =
            std::env::var("FLAGS_DB_URL").unwrap_or_else(|_| "sqlite:flags.sqlite3?mode=rwc".into());
        let mut sessions = std::env::var("FLAGS_SEED_SESSIONS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(6);
        let mut now: Option<DateTime<Utc>> = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--sessions" => {
                    let value = require_value(&mut args, "--sessions")?;
                    sessions = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidSessions { raw: value.clone() })?;
                }
                "--now" => {
                    let value = require_value(&mut args, "--now")?;
                    let parsed = DateTime::parse_from_rfc3339(&value)
                        .map_err(|_| ArgsError::InvalidNow { raw: value.clone() })?
                        .with_timezone(&Utc);
                    now = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            sessions,
            now,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: sqlite:flags.sqlite3)");
    eprintln!("  --sessions <n>            Number of demo sessions to add (default: 6)");
    eprintln!("  --now <rfc3339>           Fixed current time for deterministic seeding");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  FLAGS_DB_URL, FLAGS_SEED_SESSIONS");
}

fn demo_session(index: u32, now: DateTime<Utc>) -> Result<GameSession, flags_core::Error> {
    let language = Language::ALL[index as usize % Language::ALL.len()];
    let gender = Gender::ALL[index as usize % Gender::ALL.len()];
    let region_table = regions(language);
    let region = region_table[index as usize % region_table.len()];
    let timestamp = now - Duration::hours(i64::from(index) * 7);
    let phone = format!("+7701{:07}", 1_000 + index);

    let profile = UserProfile::from_persisted(phone, 18 + index % 30, gender, region, language)?;
    let answers: Vec<Answer> = questions(language)
        .iter()
        .enumerate()
        .map(|(pos, question)| {
            let choice = if (pos as u32 + index) % 3 == 0 {
                Flag::Red
            } else {
                Flag::Green
            };
            Answer::for_question(question, choice)
        })
        .collect();

    Ok(GameSession::new(
        SessionId::generate(timestamp),
        timestamp,
        profile,
        answers,
        "## Демо\n\nСгенерировано для проверки панели администратора.",
    ))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::sqlite(&args.db_url).await?;
    let now = args.now.unwrap_or_else(Utc::now);

    let mut raw = storage.entries.get(SESSIONS_KEY).await?;
    let mut total = 0;
    for i in 0..args.sessions {
        let (updated, count) = prepend_session(raw.as_deref(), &demo_session(i, now)?)?;
        raw = Some(updated);
        total = count;
    }
    if let Some(raw) = raw {
        storage.entries.put(SESSIONS_KEY, &raw).await?;
    }

    println!(
        "Seeded {} demo sessions ({} total) into {}",
        args.sessions,
        total,
        args.db_url
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
