//! `sprint-json` CLI: format, minify, validate, and inspect JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | sprint-json format
//!
//! # Pretty-print with 4-space indentation, file to file
//! sprint-json format --indent 4 -i data.json -o pretty.json
//!
//! # Strip all whitespace
//! sprint-json minify -i pretty.json
//!
//! # Check a document, allowing array or scalar roots
//! sprint-json --any-root validate -i list.json
//!
//! # Show structure counts and sizes
//! sprint-json stats -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sprint_json::parser::DEFAULT_MAX_DEPTH;
use sprint_json::{Object, ParseOptions, Value};
use std::io::{self, Read};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "sprint-json",
    version,
    about = "Format, minify and validate JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Maximum object/array nesting accepted by the parser
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Accept array and scalar roots, not just objects
    #[arg(long, global = true)]
    any_root: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pretty-print a JSON document
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Spaces per indentation level
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Rewrite a JSON document without whitespace
    Minify {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check that a document parses
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show value counts, nesting depth and encoded sizes
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let options = ParseOptions::default().max_depth(cli.max_depth);

    match &cli.command {
        Commands::Format {
            input,
            output,
            indent,
        } => {
            let value = load(input.as_deref(), &cli, &options)?;
            let text = sprint_json::serialize(&value, true, *indent);
            write_output(output.as_deref(), &text)?;
        }
        Commands::Minify { input, output } => {
            let value = load(input.as_deref(), &cli, &options)?;
            let text = sprint_json::serialize(&value, false, 0);
            write_output(output.as_deref(), &text)?;
        }
        Commands::Validate { input } => {
            let value = load(input.as_deref(), &cli, &options)?;
            info!(kind = value.type_name(), "document is valid");
            println!("valid {}", value.type_name());
        }
        Commands::Stats { input } => {
            let value = load(input.as_deref(), &cli, &options)?;
            let stats = Stats::collect(&value);
            let compact = sprint_json::serialize(&value, false, 0).len();
            let pretty = sprint_json::serialize(&value, true, 2).len();
            println!("Objects:       {}", stats.objects);
            println!("Arrays:        {}", stats.arrays);
            println!("Keys:          {}", stats.keys);
            println!("Strings:       {}", stats.strings);
            println!("Numbers:       {}", stats.numbers);
            println!("Booleans:      {}", stats.booleans);
            println!("Nulls:         {}", stats.nulls);
            println!("Max depth:     {}", stats.max_depth);
            println!("Compact size:  {} bytes", compact);
            println!("Indented size: {} bytes", pretty);
        }
    }

    Ok(())
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(cli.verbose >= 2),
        )
        .init();
}

/// Read and parse the input. Object roots only, unless `--any-root`.
fn load(path: Option<&str>, cli: &Cli, options: &ParseOptions) -> Result<Value> {
    let text = read_input(path)?;
    debug!(bytes = text.len(), any_root = cli.any_root, "read input");
    let value = if cli.any_root {
        sprint_json::parse_value_with_options(&text, options)
            .context("Failed to parse JSON document")?
    } else {
        sprint_json::parse_with_options(&text, options)
            .map(Value::Object)
            .context("Failed to parse JSON object")?
    };
    Ok(value)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Write `content` plus a trailing newline.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[derive(Debug, Default)]
struct Stats {
    objects: usize,
    arrays: usize,
    keys: usize,
    strings: usize,
    numbers: usize,
    booleans: usize,
    nulls: usize,
    max_depth: usize,
}

impl Stats {
    fn collect(value: &Value) -> Self {
        let mut stats = Stats::default();
        stats.visit(value, 0);
        stats
    }

    fn visit(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.nulls += 1,
            Value::Bool(_) => self.booleans += 1,
            Value::Integer(_) | Value::Double(_) => self.numbers += 1,
            Value::String(_) => self.strings += 1,
            Value::Object(object) => {
                self.enter(depth);
                self.objects += 1;
                self.visit_object(object, depth + 1);
            }
            Value::Array(array) => {
                self.enter(depth);
                self.arrays += 1;
                for item in array {
                    self.visit(item, depth + 1);
                }
            }
        }
    }

    fn visit_object(&mut self, object: &Object, depth: usize) {
        self.keys += object.len();
        for item in object.values() {
            self.visit(item, depth);
        }
    }

    fn enter(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth + 1);
    }
}
