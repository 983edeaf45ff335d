//! Fabula CLI entry point.

use std::env;
use std::process::ExitCode;

use fabula_runtime::{Repl, quest};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-V" | "--version" => {
                println!("fabula {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other => {
                return Err(format!("unknown option: {other}").into());
            }
        }
    }

    let world = quest::world()?;
    Repl::new(world)?.run()?;
    Ok(())
}

fn print_help() {
    println!("fabula - a turn-based interactive fiction engine");
    println!();
    println!("USAGE:");
    println!("    fabula [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print this help");
    println!("    -V, --version    Print the version");
}
