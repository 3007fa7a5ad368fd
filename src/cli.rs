use clap::Parser;

/// Fibonacci check fixture.
///
/// Exits 0 when fib(n) equals the expected value and 1 on a mismatch.
/// Malformed invocations (a missing argument, or a token that is not an
/// integer) are rejected by the parser with exit code 2.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct CliArgs {
    /// The fibonacci index to evaluate.
    pub n: i64,

    /// The value fib(n) is expected to equal.
    pub expected: i64,
}
