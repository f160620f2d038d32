use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use getsig_contracts::GETSIG_REPORT_SCHEMA_VERSION;
use getsig_core::output::{write_artifact, WriteStatus};
use getsig_core::{generate, sha256_hex, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "getsig")]
#[command(
    about = "Deterministic generator for the signature-lookup registry and its test suite.",
    long_about = None
)]
struct Cli {
    /// Registry source to write (e.g. FunctionSignature.scala).
    registry: PathBuf,
    /// Test suite source to write (e.g. UTestFunctionSignature.scala).
    test: PathBuf,
    /// Generator config JSON replacing the built-in catalog and fragments.
    #[arg(long)]
    config: Option<PathBuf>,
    /// If set, fail if either output differs; do not write.
    #[arg(long, default_value_t = false)]
    check: bool,
    /// Print a JSON run report on stdout.
    #[arg(long, default_value_t = false)]
    report: bool,
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct Report {
    schema_version: &'static str,
    keys: usize,
    check: bool,
    registry: RegistryReport,
    tests: TestsReport,
}

#[derive(Debug, Serialize)]
struct RegistryReport {
    path: String,
    sha256: String,
    status: WriteStatus,
    functions: usize,
}

#[derive(Debug, Serialize)]
struct TestsReport {
    path: String,
    sha256: String,
    status: WriteStatus,
    helpers: usize,
    assertions: usize,
    cases: usize,
}

fn main() -> Result<()> {
    try_main().map_err(|err| {
        eprintln!("{err:#}");
        err
    })
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    tracing::debug!(
        registry = %cli.registry.display(),
        test = %cli.test.display(),
        check = cli.check,
        "starting getsig"
    );
    let cfg = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let out = generate(&cfg)?;
    let registry_status = write_artifact(&cli.registry, &out.registry.source, cli.check)?;
    let tests_status = write_artifact(&cli.test, &out.tests.source, cli.check)?;

    if cli.report {
        let report = Report {
            schema_version: GETSIG_REPORT_SCHEMA_VERSION,
            keys: out.keys,
            check: cli.check,
            registry: RegistryReport {
                path: display(&cli.registry),
                sha256: sha256_hex(out.registry.source.as_bytes()),
                status: registry_status,
                functions: out.registry.functions,
            },
            tests: TestsReport {
                path: display(&cli.test),
                sha256: sha256_hex(out.tests.source.as_bytes()),
                status: tests_status,
                helpers: out.tests.helpers,
                assertions: out.tests.assertions,
                cases: out.tests.cases,
            },
        };
        let mut bytes = serde_json::to_vec(&report)?;
        bytes.push(b'\n');
        std::io::Write::write_all(&mut std::io::stdout(), &bytes)?;
    }
    Ok(())
}

fn display(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
