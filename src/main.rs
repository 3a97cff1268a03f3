// src/main.rs

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use ngon_vertices::cli::{run, Args};

fn main() -> ExitCode {
    env_logger::init();

    // Missing or non-integer arguments exit here with clap's usage error (code 2).
    let args = Args::parse();
    debug!("{args:?}");

    ExitCode::from(run(&args, &mut io::stdout().lock(), &mut io::stderr().lock()))
}
