//! The main entry point for the shunt CLI.

#![allow(unused_crate_dependencies)]

use shunt::cli::{
    parse_args, run,
    utils::{LogDestination, init_logger},
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let opts = match parse_args(std::env::args_os()) {
        Ok(opts) => opts,
        Err(e) => e.exit(),
    };
    init_logger(LogDestination::Stderr, opts.verbose);
    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
