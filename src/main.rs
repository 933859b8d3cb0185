use std::{
    fs,
    io::{self, Write},
    path::Path,
    process,
};

use clap::{Parser, ValueEnum};
use sting::{
    error::{Diagnostics, RuntimeError},
    evaluate, render, run, tokenize,
};

/// Exit status for input that fails to scan or parse.
const EXIT_DATA_ERROR: i32 = 65;
/// Exit status for a program that stops on a runtime error.
const EXIT_SOFTWARE_ERROR: i32 = 70;

/// What to do with the input.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Mode {
    /// Print the token stream, one token per line.
    Tokens,
    /// Print every statement in canonical parenthesized form.
    Ast,
    /// Evaluate the input as a single expression and print its value.
    Evaluate,
    /// Execute the input as a program.
    #[default]
    Run,
}

/// sting is a small expression language with a tree-walking interpreter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sting to read a `.sting` file instead of a script.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// What to do with the input.
    #[arg(short, long, value_enum, default_value_t = Mode::Run)]
    mode: Mode,

    /// The script, or the path to it with `--file`. Starts an interactive
    /// prompt when omitted.
    contents: Option<String>,
}

fn read_script(path: &str) -> String {
    if Path::new(path).extension().is_none_or(|extension| extension != "sting") {
        eprintln!("The input file '{path}' must have the '.sting' extension.");
        process::exit(1);
    }

    fs::read_to_string(path).unwrap_or_else(|_| {
                                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                process::exit(1);
                            })
}

fn execute(script: &str, mode: Mode) -> Result<(), Box<dyn std::error::Error>> {
    match mode {
        Mode::Tokens => {
            for token in tokenize(script)? {
                println!("{token}");
            }
        },
        Mode::Ast => {
            for line in render(script)? {
                println!("{line}");
            }
        },
        Mode::Evaluate => println!("{}", evaluate(script)?),
        Mode::Run => run(script, io::stdout().lock())?,
    }
    Ok(())
}

/// Reads and handles one line at a time until the end of input.
///
/// Every line is a separate run with its own diagnostics, and an error in one
/// line is reported without leaving the prompt.
fn run_prompt(mode: Mode) {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!(">> ");
        if io::stdout().flush().is_err() {
            return;
        }

        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => {
                println!();
                return;
            },
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                process::exit(1);
            },
        }

        if let Err(e) = execute(&line, mode) {
            eprintln!("{e}");
        }
    }
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        run_prompt(args.mode);
        return;
    };

    let script = if args.file { read_script(&contents) } else { contents };

    if let Err(e) = execute(&script, args.mode) {
        eprintln!("{e}");

        if e.is::<Diagnostics>() {
            process::exit(EXIT_DATA_ERROR);
        }
        if e.is::<RuntimeError>() {
            process::exit(EXIT_SOFTWARE_ERROR);
        }
        process::exit(1);
    }
}
