use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use mao::run;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// mao runs programs written in a small typed expression language with `int`
/// and `double` variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program file to run. The program is read from standard input when no
    /// file and no script are given.
    file: Option<PathBuf>,

    /// Runs the given program text instead of reading a file.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,
}

/// Installs a tracing subscriber writing to stderr when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn read_source(args: &Args) -> io::Result<String> {
    if let Some(script) = &args.eval {
        return Ok(script.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path);
    }
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(e) => {
            let name = args.file
                           .as_ref()
                           .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
            eprintln!("Failed to read the input file '{name}': {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut out = io::stdout().lock();
    let result = run(&source, &mut out, &mut io::stderr());

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
