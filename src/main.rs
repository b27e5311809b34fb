use std::{env, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use turtls::{error::RunError, init_tracing, repl, session::Session};

/// TurtlScript is a small scripting language with integers, booleans,
/// bindings and conditionals. Run it without arguments for an interactive
/// prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A `.turtls` script to run.
    #[arg(conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Evaluates the given source instead of reading a file.
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Pipe mode prints the final value of a script after running it.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Increases log output on stderr (`-v` debug, `-vv` trace). `RUST_LOG`
    /// overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut session = Session::new();
    let result = match (&args.file, &args.eval) {
        (Some(path), _) => session.run_file(path),
        (None, Some(source)) => session.run(source).map_err(RunError::from),
        (None, None) => return run_repl(),
    };

    match result {
        Ok(Some(value)) if value.is_error() => {
            eprintln!("{value}");
            ExitCode::FAILURE
        },
        Ok(Some(value)) => {
            if args.pipe_mode {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}

fn run_repl() -> ExitCode {
    let user = env::var("USER").or_else(|_| env::var("USERNAME"))
                               .unwrap_or_else(|_| "there".to_string());
    println!("Hello {user}! Welcome to TurtlScript!");
    println!("Type {} to quit.", repl::QUIT_COMMAND);

    match repl::start(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}
