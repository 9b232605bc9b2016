use std::fs;

use clap::Parser;
use dyad::{
    interpreter::evaluator::function::builtin::BUILTIN_FUNCTIONS,
    run_source,
    session::{Outcome, Session},
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// dyad is a tiny interactive language for plain `f64` arithmetic where every
/// function takes exactly two arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells dyad to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Script text to run; omit it to get the interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    run_source(&script, true);
}

/// Runs the interactive prompt until an exit command or end of input.
fn repl() {
    banner();

    let mut editor = DefaultEditor::new().unwrap_or_else(|error| {
                         eprintln!("Failed to initialize the line editor: {error}");
                         std::process::exit(1);
                     });
    let mut session = Session::new();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if !line.is_empty() {
                    let _ = editor.add_history_entry(&line);
                }
                match session.submit(&line) {
                    Outcome::Exit => break,
                    Outcome::Skipped => {},
                    Outcome::Evaluated { value, display } => {
                        if display {
                            println!("{value}");
                        }
                    },
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("{error}");
                break;
            },
        }
    }
}

/// Prints the greeting the prompt opens with.
fn banner() {
    let builtins = BUILTIN_FUNCTIONS.iter()
                                    .map(|name| format!("{name}(a,b)"))
                                    .collect::<Vec<_>>()
                                    .join(", ");

    println!("dyad expression interpreter");
    println!("Supported features:");
    println!("- Basic arithmetic: +, -, *, /");
    println!("- Built-in functions: {builtins}");
    println!("- Variables: var name = expression");
    println!("- Custom functions: def name(a,b) {{ expression }}");
    println!("Enter expressions (type 'quit' to exit):");
}
