//! bibconv CLI - BibTeX field markup to plain Unicode text

#[cfg(feature = "cli")]
use bibconv::{
    convert_field, parse_bibtex, ConversionResult, ConvertedEntry, FieldOptions, FieldText, Loss,
};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "bibconv")]
#[command(version)]
#[command(about = "bibconv - BibTeX field markup to plain Unicode text", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input .bib file (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Strict mode: exit with error if anything could not be converted exactly
    #[arg(long, global = true)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert a single field value
    Field {
        /// Field markup, e.g. 'M\"uller'
        text: String,

        /// Sentence capitalization for titles
        #[arg(long, conflicts_with = "noun")]
        title: bool,

        /// Lowercase, then capitalize words joined by hyphens
        #[arg(long)]
        noun: bool,

        /// The text does not begin a sentence
        #[arg(long)]
        not_at_start: bool,
    },

    /// Show version info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> ConversionResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd, cli.strict, cli.quiet);
    }

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let bibliography = parse_bibtex(&input)?;
    let entries = bibliography.convert_all()?;

    let mut loss = Loss::new();
    let mut result = String::new();
    for entry in &entries {
        loss.merge(&entry.loss);
        result.push_str(&format_entry(entry));
        result.push('\n');
    }

    report_loss(&loss, cli.strict, cli.quiet);

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            write!(file, "{}", result)?;
            eprintln!("✓ {} entries written to: {}", entries.len(), path);
        }
        None => {
            print!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands, strict: bool, quiet: bool) -> ConversionResult<()> {
    match cmd {
        Commands::Field {
            text,
            title,
            noun,
            not_at_start,
        } => {
            let options = field_options(title, noun, not_at_start);
            let FieldText { text, loss } = convert_field(&text, &options)?;
            report_loss(&loss, strict, quiet);
            println!("{}", text);
        }

        Commands::Info => {
            println!("bibconv v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Accents:  \\' \\` \\^ \\\" \\~ \\c");
            println!(
                "Symbols:  {} named commands",
                bibconv::symbols::SYMBOL_COMMANDS.len()
            );
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn field_options(title: bool, noun: bool, not_at_start: bool) -> FieldOptions {
    let options = if noun {
        FieldOptions::noun()
    } else if title {
        FieldOptions::title()
    } else {
        FieldOptions::default()
    };
    FieldOptions {
        at_start: !not_at_start,
        ..options
    }
}

#[cfg(feature = "cli")]
fn init_tracing(quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if quiet { "error" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// One entry as `@type{key}` followed by its converted fields
#[cfg(feature = "cli")]
fn format_entry(entry: &ConvertedEntry) -> String {
    let mut out = format!("@{}{{{}}}\n", entry.entry_type, entry.key);
    for (name, field) in &entry.fields {
        let marker = if field.is_lossy() { " (lossy)" } else { "" };
        out.push_str(&format!("  {} = {}{}\n", name, field.text, marker));
    }
    out
}

#[cfg(feature = "cli")]
fn report_loss(loss: &Loss, strict: bool, quiet: bool) {
    if !loss.is_lossy() {
        return;
    }

    if !quiet {
        eprintln!(
            "⚠ {} escape(s) could not be converted exactly",
            loss.count()
        );
    }

    if strict {
        eprintln!("Error: lossy conversion in strict mode");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install bibconv --features cli");
    eprintln!("  bibconv [OPTIONS] [INPUT_FILE]");
}
