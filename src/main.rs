use std::path::PathBuf;

use clap::Parser as ClapParser;
use sprig_lang::cli::{self, RunOptions};

#[derive(ClapParser)]
#[command(name = "sprig")]
#[command(about = "Sprig - a tiny scripting language for loading, reshaping, and saving JSON")]
#[command(version)]
struct Cli {
    /// Path to the script to run
    script: PathBuf,

    /// Values substituted for $1, $2, … in load/save parameters
    args: Vec<String>,

    /// Validate the script without executing it
    #[arg(long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = RunOptions {
        script: cli.script,
        args: cli.args,
        check_only: cli.check,
    };

    match cli::execute_run(&options) {
        Ok(diagnostics) => {
            for diagnostic in &diagnostics {
                println!("{}", diagnostic);
            }
            if !diagnostics.is_empty() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
