//! Reads HTML from stdin and writes the readability analysis as JSON to stdout.
//!
//! Usage: `analyze_stdin [--pretty] [--verbose] [--skip <check>]...`
//!
//! `<check>` is one of `answer-placement`, `fact-density`,
//! `heading-structure`, `eeat`, `snippability`, `schema`.

use std::env;
use std::io;
use std::process::ExitCode;

use ai_readability::{analyze_reader, Error, IssueType, Options};
use tracing_subscriber::EnvFilter;

struct Args {
    pretty: bool,
    verbose: bool,
    options: Options,
}

fn parse_args<I>(mut raw: I) -> ai_readability::Result<Args>
where
    I: Iterator<Item = String>,
{
    let mut args = Args {
        pretty: false,
        verbose: false,
        options: Options::default(),
    };

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--skip" => {
                let name = raw.next().ok_or_else(|| {
                    Error::InvalidArgument("--skip requires a check name".to_string())
                })?;
                let kind: IssueType = name.parse()?;
                args.options = args.options.without(kind);
            }
            other => return Err(Error::InvalidArgument(other.to_string())),
        }
    }

    Ok(args)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("ai_readability=debug")
    } else {
        EnvFilter::new("ai_readability=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run() -> ai_readability::Result<()> {
    let args = parse_args(env::args().skip(1))?;
    init_logging(args.verbose);

    let result = analyze_reader(io::stdin().lock(), &args.options)?;
    let json = if args.pretty {
        result.to_json_pretty()?
    } else {
        result.to_json()?
    };
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("analyze_stdin: {err}");
            ExitCode::FAILURE
        }
    }
}
