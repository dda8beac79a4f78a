use agar_rust::lexer::{tokenize, Token};
use agar_rust::parser::parse;
use agar_rust::CheckError;
use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(ClapParser)]
#[command(name = "agar-parser")]
#[command(about = "Syntax checker for the Agar toy language", long_about = None)]
struct Cli {
    /// Source file to check
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Do not print the token listing
    #[arg(short, long)]
    quiet: bool,

    /// Print the token listing and stop before checking the grammar
    #[arg(long, conflicts_with = "quiet")]
    tokens_only: bool,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; RUST_LOG=debug shows scanner and parser spans
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match check_file(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CheckError>() {
                Some(check) => eprintln!("{check}"),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn check_file(cli: &Cli) -> Result<()> {
    let input = read_source(&cli.file)?;

    let tokens = tokenize(&input).map_err(CheckError::from)?;
    tracing::info!(file = %cli.file.display(), tokens = tokens.len(), "scanned");

    if !cli.quiet {
        print_tokens(&tokens);
    }
    if cli.tokens_only {
        return Ok(());
    }

    parse(&tokens).map_err(CheckError::from)?;
    println!("Parsing completed successfully! No syntax errors.");

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file '{}'", path.display()))
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("Token: {} Type: {}", token.lexeme, token.kind);
    }
}
