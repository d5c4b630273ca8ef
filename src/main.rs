use clap::Parser;
use serde_json::Value;
use tracing::Level;

use change_info::transforms::Registry;
use change_info::{ChangeLog, Context, Extra, Lang, SchemaDefinition};

/// Describe the change between two JSON records.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a JSON schema definition (`{"fields":[...]}`)
    #[arg(long)]
    schema: std::path::PathBuf,
    /// Record before the change (JSON). Omit for a creation.
    #[arg(long)]
    old: Option<String>,
    /// Record after the change (JSON). Omit for a deletion.
    #[arg(long)]
    new: Option<String>,
    /// Extra name/value pairs as a JSON array of `{"name","old","new"}`
    #[arg(long)]
    extras: Option<String>,
    /// Output language
    #[arg(long, value_enum, default_value = "zh")]
    lang: Lang,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn fail(msg: String) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_json(what: &str, s: &str) -> Value {
    serde_json::from_str(s).unwrap_or_else(|e| fail(format!("Invalid {what} JSON: {e}")))
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Load the schema definition.
    let def_text = std::fs::read_to_string(&args.schema)
        .unwrap_or_else(|e| fail(format!("Cannot read {}: {e}", args.schema.display())));
    let schema = SchemaDefinition::from_json(&def_text)
        .and_then(|def| def.build(&Registry::with_builtins()))
        .unwrap_or_else(|e| fail(e.to_string()));

    // Parse records and extras.
    let old = args.old.as_deref().map(|s| parse_json("old", s));
    let new = args.new.as_deref().map(|s| parse_json("new", s));
    let extras: Vec<Extra> = match args.extras.as_deref() {
        Some(s) => serde_json::from_str(s).unwrap_or_else(|e| fail(format!("Invalid extras JSON: {e}"))),
        None => Vec::new(),
    };

    let log = ChangeLog::with_context(&schema, Context::new(args.lang));
    let (info, err) = log.make_info_pair(old.as_ref(), new.as_ref(), &extras);
    if let Some(e) = err {
        tracing::error!(error = %e, "describing changes failed");
        if info.is_empty() {
            fail(e.to_string());
        }
    }
    println!("{info}");
}
