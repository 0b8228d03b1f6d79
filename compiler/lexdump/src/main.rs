//! Token dump for the demo expression grammar.
//!
//! Usage: `lexdump [--sync] [file]`. Reads stdin when no file is given.

mod grammar;

use std::io::Read;
use std::process::ExitCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use statelex::{Lexer, RunError, Token};

use grammar::{kind_name, Demo};

struct Options {
    sync: bool,
    path: Option<String>,
}

fn print_usage() {
    eprintln!("Usage: lexdump [--sync] [file]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --sync       Run the state machine on the main thread");
    eprintln!("  -h, --help   Show this message");
    eprintln!();
    eprintln!("Reads standard input when no file is given.");
}

fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut options = Options {
        sync: false,
        path: None,
    };
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--sync" => options.sync = true,
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(format!("unknown option '{flag}'"));
            }
            path if options.path.is_none() => options.path = Some(path.to_owned()),
            extra => return Err(format!("unexpected argument '{extra}'")),
        }
    }
    Ok(Some(options))
}

fn read_source(path: Option<&str>) -> Result<String, String> {
    match path {
        None | Some("-") => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| format!("error reading standard input: {e}"))?;
            Ok(content)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {e}"),
        }),
    }
}

fn print_token(tok: &Token) {
    println!("  {:<12} {} @ {}", kind_name(tok.kind), tok, tok.span);
}

fn dump(content: String, sync: bool, errors: &Arc<AtomicUsize>) -> Result<usize, RunError> {
    let seen = Arc::clone(errors);
    let lexer = Lexer::new(content, Demo::Code).on_error(move |message| {
        eprintln!("error: {message}");
        seen.fetch_add(1, Ordering::SeqCst);
    });

    if sync {
        let (count, summary) = lexer.run_sync(|stream| {
            let mut count = 0;
            for tok in stream {
                print_token(&tok);
                count += 1;
            }
            count
        })?;
        tracing::debug!(
            tokens = summary.tokens_emitted,
            errors = summary.errors_reported,
            "sync dump finished"
        );
        return Ok(count);
    }

    let mut stream = lexer.run_async()?;
    let mut count = 0;
    while let Some(tok) = stream.next_token() {
        print_token(&tok);
        count += 1;
    }
    Ok(count)
}

fn main() -> ExitCode {
    statelex::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let content = match read_source(options.path.as_deref()) {
        Ok(content) => content,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let label = options.path.as_deref().unwrap_or("<stdin>");
    println!("Tokens for '{label}':");

    let errors = Arc::new(AtomicUsize::new(0));
    let count = match dump(content, options.sync, &errors) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("{count} tokens");

    if errors.load(Ordering::SeqCst) > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
