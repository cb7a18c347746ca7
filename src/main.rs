use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use monkey_frontend::{parse, render_error, tokenize};

/// Parse a source file and print its syntax tree or its syntax errors.
#[derive(Parser, Debug)]
#[command(name = "monkey-parse", version, about)]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Print lexing and parsing times
    #[arg(long)]
    timings: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let file_contents = match read_to_string(&cli.file) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read {}: {}", cli.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    if cli.tokens {
        let start = Instant::now();
        let tokens = tokenize(file_contents.as_str(), file_name);
        if cli.timings {
            eprintln!("Tokenized in {:?}", start.elapsed());
        }

        for token in tokens {
            println!("{:>6}  {}", token.offset(), token);
        }
        return ExitCode::SUCCESS;
    }

    let start = Instant::now();
    let (program, errors) = parse(&file_contents, file_name);
    if cli.timings {
        eprintln!("Parsed in {:?}", start.elapsed());
    }

    if errors.is_empty() {
        println!("{}", program);
        return ExitCode::SUCCESS;
    }

    for error in &errors {
        eprint!("{}", render_error(error, &file_contents));
    }
    eprintln!("{} error(s)", errors.len());

    ExitCode::FAILURE
}
