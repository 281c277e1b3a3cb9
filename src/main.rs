use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use sql_analyzer::sql::parser::{self, ParseResult};
use sql_analyzer::sql::scanner;

fn main() -> Result<()> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        bail!("Usage: sql-analyzer <query | path to a .sql file>");
    }

    let input = &args[1];
    let source = if Path::new(input).extension().is_some_and(|ext| ext == "sql") {
        fs::read_to_string(input).with_context(|| format!("read {input}"))?
    } else {
        input.clone()
    };

    let tokens = scanner::tokenize(&source).context("tokenize query")?;

    println!("{:<24} {:<22} {:>5} {:>8}", "TOKEN", "TIPO", "LÍNEA", "COLUMNA");
    for token in &tokens {
        println!(
            "{:<24} {:<22} {:>5} {:>8}",
            token.lexeme, token.category, token.line, token.column
        );
    }

    let ParseResult { statements, errors } = parser::parse(tokens);
    println!();
    if errors.is_empty() {
        println!("{}", serde_json::to_string_pretty(&statements)?);
    } else {
        for error in &errors {
            println!("{error}");
        }
    }
    Ok(())
}
