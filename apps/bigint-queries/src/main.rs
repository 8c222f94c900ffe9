use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use bigint_queries::{
    evaluate, run_script, BinaryOp, Config, QueryError, DEFAULT_MAX_DIGITS, DEFAULT_MAX_INDEX,
};
use bignum::{factorial, fibonacci, BigInt};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bigint-queries")]
#[command(about = "Factorials, powers and Fibonacci numbers of arbitrary size")]
struct Cli {
    /// Read the query script from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Reject decimal tokens longer than this many characters
    #[arg(long, default_value_t = DEFAULT_MAX_DIGITS)]
    max_digits: usize,

    /// Reject factorial arguments, exponents and Fibonacci indices above this
    #[arg(long, default_value_t = DEFAULT_MAX_INDEX)]
    max_index: u64,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print n!
    Factorial { n: u64 },
    /// Print base^exponent
    Power { base: String, exponent: u64 },
    /// Print the nth Fibonacci number (fib(0) = 0)
    Fibonacci { n: u64 },
    /// Print a + b
    Add { a: String, b: String },
    /// Print a - b (fails when a < b)
    Sub { a: String, b: String },
    /// Print a * b
    Mul { a: String, b: String },
}

fn run(cli: Cli) -> Result<(), QueryError> {
    let config = Config {
        max_digits: cli.max_digits,
        max_index: cli.max_index,
    };

    let result: BigInt = match cli.command {
        None => {
            let stdout = io::stdout().lock();
            return match cli.input {
                Some(path) => run_script(BufReader::new(File::open(path)?), stdout, &config),
                None => run_script(io::stdin().lock(), stdout, &config),
            };
        }
        Some(Command::Factorial { n }) => factorial(config.check_index(n)?),
        Some(Command::Power { base, exponent }) => config.power(&config.parse_big(&base)?, exponent)?,
        Some(Command::Fibonacci { n }) => fibonacci(config.check_index(n)?),
        Some(Command::Add { a, b }) => evaluate(BinaryOp::Add, &a, &b, &config)?,
        Some(Command::Sub { a, b }) => evaluate(BinaryOp::Sub, &a, &b, &config)?,
        Some(Command::Mul { a, b }) => evaluate(BinaryOp::Mul, &a, &b, &config)?,
    };
    println!("{}", result);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
