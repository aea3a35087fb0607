//! varsta - birth-date mention extraction CLI
//!
//! Inspects each stage of the extraction pipeline. The external tagger is
//! supplied as a JSON token stream, so the full pipeline runs without a
//! model in the loop.
//!
//! # Usage
//!
//! ```bash
//! # Lemma-normalized tokens with character offsets
//! varsta lex "Ion a împlinit 20 de ani"
//!
//! # Matched trigger phrases
//! varsta triggers "s-a născut pe 5 martie 2020"
//!
//! # Full extraction over pre-tagged text ('-' reads the tags from stdin)
//! varsta extract --tags tags.json "Maria s-a nascut pe 5 martie 2020"
//! cat tags.json | varsta extract --tags - "Maria s-a nascut pe 5 martie 2020"
//! ```

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use varsta::lexer::analyze;
use varsta::triggers::match_triggers;
use varsta::{BirthDateExtractor, MockTagger, Result, Span, TaggedToken};

#[derive(Parser)]
#[command(
    name = "varsta",
    version,
    about = "Birth-date mention extraction for Romanian text"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Human-readable lines
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Print lemma-normalized tokens with character offsets
    Lex {
        /// Text to analyze
        text: String,
    },
    /// Print matched trigger phrases
    Triggers {
        /// Text to analyze
        text: String,
    },
    /// Run the full extraction pipeline over pre-tagged text
    Extract {
        /// JSON file with the tagger's token stream ('-' for stdin)
        #[arg(long)]
        tags: String,
        /// The original text the tags refer to
        text: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Lex { text } => {
            let tokens = analyze(&text);
            match cli.format {
                Format::Json => print_json(&tokens)?,
                Format::Text => {
                    for token in &tokens {
                        println!("{:>4} {:>4}  {}", token.start, token.end, token.lemma);
                    }
                }
            }
        }
        Command::Triggers { text } => {
            let triggers = match_triggers(&analyze(&text));
            match cli.format {
                Format::Json => print_json(&triggers)?,
                Format::Text => {
                    for trigger in &triggers {
                        println!(
                            "{:>4} {:>4}  date expected at {}",
                            trigger.start, trigger.end, trigger.next
                        );
                    }
                }
            }
        }
        Command::Extract { tags, text } => {
            let tokens: Vec<TaggedToken> = serde_json::from_str(&read_input(&tags)?)?;
            let extractor = BirthDateExtractor::new(MockTagger::new().with_tokens(tokens));
            let result = extractor.extract(&text)?;
            match cli.format {
                Format::Json => {
                    // the service response shape: a list of 0 or 1 spans
                    let spans: Vec<Span> = result.into_iter().collect();
                    print_json(&spans)?;
                }
                Format::Text => match result {
                    Some(span) => println!(
                        "{:>4} {:>4}  {}",
                        span.start,
                        span.end,
                        span.extract(&text)
                    ),
                    None => println!("no birth date found"),
                },
            }
        }
    }
    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
