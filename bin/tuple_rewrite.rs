use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use ariadne::{Color, Label, Report, ReportKind, Source};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tuple_rewrite::ast::Block;
use tuple_rewrite::{is_identifier, parse, print, rewrite, ParseError, StrSpan};

// ariadne counts characters, the parser counts bytes
fn char_span(src: &str, span: StrSpan) -> StrSpan {
    let start = src[..span.start].chars().count();
    let len = src[span.clone()].chars().count();
    match len {
        // end of input: point at the last character, if there is one
        0 => start.saturating_sub(1)..start,
        _ => start..start + len,
    }
}

fn report_parse_error(src: &str, path: &Path, error: &ParseError) {
    // ariadne cannot place a label in a source with no characters
    if src.is_empty() {
        println!("Failed to parse '{}': {}", path.display(), error);
        return;
    }
    let span = char_span(src, error.span());
    let report = Report::build(ReportKind::Error, (), span.start)
        .with_message(format!("Failed to parse '{}'", path.display()))
        .with_label(
            Label::new(span)
                .with_message(error.to_string())
                .with_color(Color::Yellow),
        )
        .finish();
    if report.print(Source::from(src)).is_err() {
        println!("Failed to parse '{}': {}", path.display(), error);
    }
}

/// Ask on stdin until `valid` accepts the (trimmed) answer. Exits when stdin is closed.
fn prompt(question: &str, valid: impl Fn(&str) -> bool) -> String {
    let stdin = io::stdin();
    loop {
        print!("{}", question);
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                std::process::exit(1)
            }
            Ok(_) => {}
        }
        let answer = line.trim();
        if valid(answer) {
            return answer.to_string();
        }
        println!("'{}' is not valid here", answer);
    }
}

fn parse_or_report(path: &Path) -> Option<Block> {
    let src = fs::read_to_string(path).unwrap_or_else(|_| {
        println!("Failed to read file '{}'", path.display());
        std::process::exit(1)
    });
    match parse(&src) {
        Ok(ast) => Some(ast),
        Err(e) => {
            report_parse_error(&src, path, &e);
            None
        }
    }
}

// Note that the three-slash comments are actually used in the help output
/// Rewrites every tuple literal in a file into a constructor call of the given type.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// paths of the files to rewrite (asked for when omitted)
    #[clap()]
    paths: Vec<PathBuf>,

    /// type name used for the constructor calls (asked for when omitted)
    #[clap(short, long)]
    type_name: Option<String>,

    /// print the rewritten code instead of overwriting the file
    #[clap(short, long)]
    print: bool,

    /// Only parse the file and check for bad syntax constructs
    #[clap(short, long)]
    dry_run: bool,

    /// show debug logging
    #[clap(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args: Cli = Cli::parse();
    init_logging(args.verbose);

    if let Some(type_name) = &args.type_name {
        if !is_identifier(type_name) {
            println!("'{}' is not a valid type name", type_name);
            std::process::exit(2)
        }
    }

    let paths = match args.paths.is_empty() {
        true => vec![PathBuf::from(prompt("File name: ", |s| !s.is_empty()))],
        false => args.paths,
    };

    let mut type_name = args.type_name;
    let mut any_err = false;
    for path in paths {
        let ast = match parse_or_report(&path) {
            Some(ast) => ast,
            None => {
                any_err = true;
                continue;
            }
        };
        tracing::info!(path = %path.display(), statements = ast.statements.len(), "parsed");

        if args.dry_run {
            continue;
        }

        // only asked once, and only after something parsed
        let name = type_name.get_or_insert_with(|| prompt("Type name: ", is_identifier));
        let pretty_str = print(&rewrite(&ast, name));
        match args.print {
            true => println!("{}", pretty_str),
            false => fs::write(&path, pretty_str + "\n").unwrap_or_else(|_| {
                println!("Failed to write file '{}'", path.display());
                std::process::exit(1)
            }),
        }
    }

    if any_err {
        std::process::exit(1)
    }
}
