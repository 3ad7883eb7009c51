use std::{fs, io, process::ExitCode};

use clap::Parser;
use mutex_lang::{interpreter::lexer::scan, repl, session::Session};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit status for scripts that fail to scan, parse or run.
const EXIT_DATA_ERROR: u8 = 65;

/// mutex is a small scripting language with mutable and immutable variables,
/// numbers, strings and arrays.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mutex to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the value of the last statement of a
    /// mutex script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Prints the token stream instead of running the script.
    #[arg(short, long)]
    tokens: bool,

    /// Reports every parse error instead of stopping at the first.
    #[arg(short, long)]
    recover: bool,

    /// The script, or a path to it with `--file`. Starts an interactive
    /// session when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        return match repl::start(io::stdin().lock(), &mut io::stdout()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    if args.tokens {
        let output = scan(&script);
        for token in &output.tokens {
            println!("{token}");
        }
        for error in &output.errors {
            eprintln!("{error}");
        }
        return exit_code(!output.is_clean(), args.file);
    }

    let mut session = Session::new();
    let result = if args.recover {
        session.run_recovering(&script)
    } else {
        session.run(&script).map_err(|e| vec![e])
    };

    match result {
        Ok(value) => {
            if args.pipe_mode {
                println!("{value}");
            }
        },
        Err(errors) => {
            for e in errors {
                eprintln!("{e}");
            }
        },
    }

    exit_code(session.had_error(), args.file)
}

fn exit_code(had_error: bool, file_mode: bool) -> ExitCode {
    match (had_error, file_mode) {
        (false, _) => ExitCode::SUCCESS,
        (true, true) => ExitCode::from(EXIT_DATA_ERROR),
        (true, false) => ExitCode::FAILURE,
    }
}

/// Installs a log subscriber on stderr, filtered by `RUST_LOG`. Nothing is
/// installed when the variable is unset.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
