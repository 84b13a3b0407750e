use clap::Parser;
use dcacompare::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
