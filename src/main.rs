use std::{
    fs,
    io::{self, BufRead, Write},
    process,
};

use clap::Parser;
use jawa::{
    error::{LexError, ParseError, highlight_span},
    interpreter::environment::Environment,
    run_line,
};

/// jawa is a small, dynamically-typed expression language with arithmetic,
/// string and character coercion, and session-scoped variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a path to a script file instead of source text.
    #[arg(short, long)]
    file: bool,

    /// Source text to run. Starts the interactive prompt when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.contents {
        Some(contents) => {
            let script = if args.file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                              &contents);
                    process::exit(1);
                })
            } else {
                contents
            };

            run_script(&script);
        },
        None => run_prompt(),
    }
}

/// Runs a whole script line by line against one environment, printing each
/// computed value. A failed line is reported and the next line still runs;
/// no failure is fatal.
fn run_script(script: &str) {
    let mut environment = Environment::new();

    for line in script.lines() {
        if line.trim().is_empty() {
            continue;
        }

        run_and_report(line, &mut environment);
    }
}

/// The interactive prompt. Reads one line at a time into the shared session
/// environment until end of input or the `exit` sentinel.
fn run_prompt() {
    println!();
    println!("Jawa CLI");

    let mut environment = Environment::new();
    let stdin = io::stdin();

    loop {
        print!(">>> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let input = input.trim_end_matches(['\r', '\n']);
        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        run_and_report(input, &mut environment);
    }
}

/// Feeds one line through the pipeline, echoing the value on success and
/// the failure otherwise. Failures that carry a column span also get a
/// caret marker underneath the offending text.
fn run_and_report(line: &str, environment: &mut Environment) {
    match run_line(line, environment) {
        Ok(value) => println!("{value}"),
        Err(error) => {
            eprintln!("{error}");

            let span = error.downcast_ref::<LexError>()
                            .and_then(LexError::span)
                            .or_else(|| {
                                error.downcast_ref::<ParseError>().and_then(ParseError::span)
                            });

            if let Some((start, end)) = span {
                eprintln!("{}", highlight_span(line, start, end));
            }
        },
    }
}
