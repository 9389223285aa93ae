use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::Parser;

use hours_engine::{parse_hours, Locale, ParseResult};

#[derive(Parser)]
#[command(name = "hours")]
#[command(
    author,
    version,
    about = "Parse free-text business opening hours into weekly entries",
    long_about = None
)]
struct Cli {
    /// The hours text to parse; reads stdin when omitted
    text: Vec<String>,

    /// JSON file with localized day and month names (defaults to English)
    #[arg(long)]
    locale_file: Option<PathBuf>,

    /// Reference timestamp for "today"/"tomorrow", e.g. 2026-02-18T12:00:00
    /// or 2026-02-18 (defaults to the current local time)
    #[arg(long)]
    now: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let text = read_input(&cli.text)?;
    let locale = load_locale(cli.locale_file.as_deref())?;
    let now = resolve_now(cli.now.as_deref())?;

    let result = parse_hours(&text, &locale, now);
    print_result(&result, cli.pretty)?;

    // A parse error is an input problem, not a tool failure.
    Ok(if result.parse_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn read_input(args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read hours text from stdin")?;
    Ok(buffer)
}

fn load_locale(path: Option<&std::path::Path>) -> Result<Locale> {
    let Some(path) = path else {
        return Ok(Locale::english());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read locale file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid locale file {}", path.display()))
}

fn resolve_now(arg: Option<&str>) -> Result<NaiveDateTime> {
    let Some(arg) = arg else {
        return Ok(Local::now().naive_local());
    };
    if let Ok(stamp) = NaiveDateTime::parse_from_str(arg, "%Y-%m-%dT%H:%M:%S") {
        return Ok(stamp);
    }
    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .with_context(|| format!("invalid --now value {arg:?}"))
}

fn print_result(result: &ParseResult, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
    .context("failed to serialize result")?;
    println!("{json}");
    Ok(())
}
