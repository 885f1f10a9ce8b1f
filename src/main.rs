use std::{
    fs,
    io::{self, Write},
};

use bigcalc::{eval_line, interpreter::evaluator::Context};
use clap::Parser;

/// bigcalc is an interactive calculator over arbitrary-precision integers,
/// with variables, parentheses, and the operators `+ - * / ^`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single statement and exit instead of starting the
    /// interactive session.
    #[arg(short, long)]
    eval: Option<String>,

    /// A script file to evaluate line by line instead of reading stdin.
    file: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut context = Context::new();

    if let Some(statement) = args.eval {
        run_statement(&statement, &mut context);
        return;
    }

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            std::process::exit(1);
        });
        for (number, line) in script.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match eval_line(line, &mut context) {
                Ok(Some(value)) => println!("{value}"),
                Ok(None) => {},
                Err(e) => {
                    eprintln!("line {}: {e}", number + 1);
                    std::process::exit(1);
                },
            }
        }
        return;
    }

    repl(&mut context);
}

/// Evaluates one statement, printing the value or the error message.
fn run_statement(statement: &str, context: &mut Context) {
    match eval_line(statement, context) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Runs the interactive read-eval-print loop.
///
/// Each line is either a command (`/exit`, `/help`) or a statement. Errors
/// are reported per line and never end the session; only `/exit` or a
/// closed stdin does.
fn repl(context: &mut Context) {
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = input.trim();

        match line {
            "" => {},
            "/exit" => {
                println!("Bye!");
                break;
            },
            "/help" => print_help(),
            _ if line.starts_with('/') => println!("Unknown command. Try /help."),
            _ => match eval_line(line, context) {
                Ok(Some(value)) => println!("{value}"),
                Ok(None) => {},
                Err(e) => eprintln!("{e}"),
            },
        }
    }
}

fn print_help() {
    println!("Evaluates integer expressions of arbitrary size.");
    println!("Operators: + - * / ^ with the usual precedence; () groups.");
    println!("Assignment: name = expression (names are letters only).");
    println!("Commands:");
    println!("  /exit   Leave the calculator");
    println!("  /help   Show this help");
}
