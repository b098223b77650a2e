use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use version_value::config::{DEFAULT_HASH_NORMALIZATION_LIMIT, DEFAULT_LOG_FILTER, VersionConfig};
use version_value::version::self_check;

#[derive(Parser)]
#[command(name = "version-value")]
#[command(version, about = "Run the version comparison self-check")]
struct Cli {
    /// Number of components every version is padded to before hashing
    #[arg(long, default_value_t = DEFAULT_HASH_NORMALIZATION_LIMIT)]
    hash_limit: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(writer)
        .init();

    let config = VersionConfig {
        hash_normalization_limit: cli.hash_limit,
    };
    let checked = self_check::run(&config)?;
    info!("Self-check passed: {} ordered pairs", checked);

    Ok(())
}
