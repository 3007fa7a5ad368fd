mod cli;
mod fib;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    // Missing or non-integer arguments never reach this point: clap's error
    // path exits with code 2, keeping malformed invocations distinct from
    // the 0/1 match contract.
    let args = cli::CliArgs::parse();

    if fib::fib(args.n) == args.expected {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
