use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use apicov::cli::{self, RunConfig, SourceConfig};
use apicov::gcs::{DEFAULT_BUCKET, DEFAULT_LOG_DIR};
use apicov::report::EmptyCategoryPolicy;

/// apicov: field-level API coverage of Knative Serving resources from e2e logs.
#[derive(Parser)]
#[command(name = "apicov", version, about)]
struct Cli {
    /// Directory to store the generated XML file.
    #[arg(long, default_value = "./artifacts")]
    artifacts_dir: PathBuf,

    /// Service account key file, or a file holding an OAuth2 access token.
    /// Defaults to $GOOGLE_APPLICATION_CREDENTIALS; anonymous when neither is set.
    #[arg(long, alias = "credentials")]
    service_account: Option<PathBuf>,

    /// GCS bucket holding the CI logs.
    #[arg(long, default_value = DEFAULT_BUCKET)]
    bucket: String,

    /// Job log directory within the bucket.
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    log_dir: String,

    /// Build number to read instead of the latest build.
    #[arg(long)]
    build: Option<u64>,

    /// Read a local build log instead of fetching from GCS.
    #[arg(long, conflicts_with_all = ["bucket", "log_dir", "service_account"])]
    log_file: Option<PathBuf>,

    /// How to report a category no record was seen for.
    #[arg(long, value_enum, default_value_t = EmptyCategoryPolicy::Zero)]
    empty_category: EmptyCategoryPolicy,

    /// Increase log verbosity (-v for debug, -vv for trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let source_config = match args.log_file {
        Some(path) => SourceConfig::File(path),
        None => SourceConfig::Gcs {
            bucket: args.bucket,
            log_dir: args.log_dir,
            credentials: args.service_account.or_else(|| {
                std::env::var_os("GOOGLE_APPLICATION_CREDENTIALS").map(PathBuf::from)
            }),
        },
    };
    let run_config = RunConfig {
        artifacts_dir: args.artifacts_dir,
        build: args.build,
        empty_category: args.empty_category,
    };

    let source = cli::log_source(&source_config)?;
    let output = cli::cmd_run(source.as_ref(), &run_config)?;
    print!("{}", output);
    Ok(())
}
